//! Access filter.

use consent_filter_sdk::{ConsentGrants, ConsentLevel, FieldSpec, MissingFieldError, Record, Table};

/// Restrict every dataset record to the fields its subject consented to.
///
/// The subject is looked up by `identification_field`. Partial grants are
/// applied first, then complete grants on top of them; a subject with no
/// grant yields an empty record. Output has one record per input record, in
/// input order.
///
/// # Errors
///
/// Returns [`MissingFieldError`] if a record lacks `identification_field`.
pub fn apply_filter(
    dataset: &Table,
    identification_field: &str,
    grants: &ConsentGrants,
) -> Result<Table, MissingFieldError> {
    dataset
        .iter()
        .enumerate()
        .map(|(row, record)| {
            let subject = record.require(identification_field, row)?;
            Ok(allowed_fields(record, subject, grants))
        })
        .collect()
}

fn allowed_fields(record: &Record, subject: &str, grants: &ConsentGrants) -> Record {
    let mut allowed = Record::new();

    for level in ConsentLevel::ALL {
        let Some(specs) = grants.specs_for(level, subject) else {
            continue;
        };
        for name in specs.iter().flat_map(FieldSpec::field_names) {
            if let Some(value) = record.get(name) {
                allowed.insert(name, value);
            }
        }
    }

    allowed
}

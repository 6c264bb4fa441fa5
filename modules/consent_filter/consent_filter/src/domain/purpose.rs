//! Purpose matcher.

use consent_filter_sdk::{PurposeCheck, Table};

/// Check whether `requested` is listed in the purpose catalog.
///
/// Exact string comparison against `purpose_field`; rows without that field
/// simply do not match. An empty catalog never matches.
#[must_use]
pub fn matches(requested: &str, catalog: &Table, purpose_field: &str) -> PurposeCheck {
    let matched_row = catalog
        .iter()
        .position(|row| row.get(purpose_field) == Some(requested));

    PurposeCheck {
        requested: requested.to_owned(),
        matched_row,
        catalog_rows: catalog.len(),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::test_support::{record, table};

    #[test]
    fn listed_purpose_matches() {
        let catalog = table(vec![
            record(&[("purpose", "marketing")]),
            record(&[("purpose", "billing")]),
        ]);

        let check = matches("billing", &catalog, "purpose");
        assert!(check.is_match());
        assert_eq!(check.matched_row, Some(1));
        assert_eq!(check.catalog_rows, 2);
    }

    #[test]
    fn comparison_is_exact() {
        let catalog = table(vec![record(&[("purpose", "Billing ")])]);

        assert!(!matches("billing", &catalog, "purpose").is_match());
        assert!(!matches("Billing", &catalog, "purpose").is_match());
    }

    #[test]
    fn empty_catalog_never_matches() {
        let check = matches("billing", &table(vec![]), "purpose");
        assert!(!check.is_match());
        assert_eq!(check.catalog_rows, 0);
    }

    #[test]
    fn rows_without_purpose_field_are_skipped() {
        let catalog = table(vec![
            record(&[("other", "billing")]),
            record(&[("purpose", "billing")]),
        ]);

        assert_eq!(matches("billing", &catalog, "purpose").matched_row, Some(1));
    }
}

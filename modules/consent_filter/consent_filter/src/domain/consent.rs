//! Consent resolver.

use consent_filter_sdk::{ConsentGrants, ConsentLevel, FieldSpec, MissingFieldError, Table};

/// Separator between specifiers in a consent-info value.
const SPEC_SEPARATOR: &str = ", ";

/// Build per-level grants from the consent registry.
///
/// For each row the subject, level and info fields are read (all three are
/// required), the info value is split on `", "` into [`FieldSpec`]s, and the
/// list is stored under the row's level. Rows with an unrecognized level
/// grant nothing; their positions are kept in
/// [`ConsentGrants::ignored_rows`]. The last row per subject and level wins.
///
/// # Errors
///
/// Returns [`MissingFieldError`] if any row lacks one of the three fields.
pub fn resolve_consent(
    consents: &Table,
    subject_field: &str,
    level_field: &str,
    info_field: &str,
) -> Result<ConsentGrants, MissingFieldError> {
    let mut grants = ConsentGrants::new();

    for (row, consent) in consents.iter().enumerate() {
        let subject = consent.require(subject_field, row)?;
        let level = consent.require(level_field, row)?;
        let info = consent.require(info_field, row)?;

        let Some(level) = ConsentLevel::parse(level) else {
            tracing::debug!(row, level, "consent row has unrecognized level; no fields granted");
            grants.ignore_row(row);
            continue;
        };

        let specs = info.split(SPEC_SEPARATOR).map(FieldSpec::new).collect();
        grants.grant(level, subject, specs);
    }

    Ok(grants)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::test_support::{consent_row, record, table};

    fn resolve(consents: &Table) -> ConsentGrants {
        resolve_consent(consents, "cpf", "level", "info").unwrap()
    }

    #[test]
    fn levels_route_to_their_maps() {
        let grants = resolve(&table(vec![
            consent_row("1", "parcial", "nome"),
            consent_row("2", "Completo", "nome, email"),
        ]));

        assert_eq!(grants.partial("1"), Some(&[FieldSpec::new("nome")][..]));
        assert_eq!(grants.complete("1"), None);
        assert_eq!(
            grants.complete("2"),
            Some(&[FieldSpec::new("nome"), FieldSpec::new("email")][..])
        );
    }

    #[test]
    fn info_is_split_on_comma_space_only() {
        let grants = resolve(&table(vec![consent_row("1", "completo", "nome,email, telefone")]));

        assert_eq!(
            grants.complete("1"),
            Some(&[FieldSpec::new("nome,email"), FieldSpec::new("telefone")][..])
        );
    }

    #[test]
    fn last_row_per_subject_and_level_wins() {
        let grants = resolve(&table(vec![
            consent_row("1", "parcial", "nome"),
            consent_row("1", "completo", "telefone"),
            consent_row("1", "PARCIAL", "email"),
        ]));

        assert_eq!(grants.partial("1"), Some(&[FieldSpec::new("email")][..]));
        assert_eq!(grants.complete("1"), Some(&[FieldSpec::new("telefone")][..]));
    }

    #[test]
    fn unrecognized_levels_are_dropped_silently() {
        let grants = resolve(&table(vec![
            consent_row("1", "total", "nome"),
            consent_row("2", "", "email"),
            consent_row("3", "partial", "email"),
        ]));

        assert_eq!(grants.partial("1"), None);
        assert_eq!(grants.complete("1"), None);
        assert_eq!(grants.partial("3"), Some(&[FieldSpec::new("email")][..]));
        assert_eq!(grants.ignored_rows(), &[0, 1]);
    }

    #[test]
    fn empty_registry_yields_empty_grants() {
        let grants = resolve(&table(vec![]));
        assert!(grants.is_empty());
        assert!(grants.ignored_rows().is_empty());
    }

    #[test]
    fn missing_info_fails_even_for_unknown_level() {
        let consents = table(vec![record(&[("cpf", "1"), ("level", "nenhum")])]);

        let err = resolve_consent(&consents, "cpf", "level", "info").unwrap_err();
        assert_eq!(err.field, "info");
        assert_eq!(err.row, 0);
    }
}

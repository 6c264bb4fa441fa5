//! Contract checker.

use consent_filter_sdk::{ContractCheck, MissingFieldError, Table};

const ACTIVE_STATUS: &str = "true";

/// Scan the contract registry for an active contract.
///
/// A contract is active when its `status_field`, lower-cased, equals
/// `"true"`. The scan stops at the first active row.
///
/// # Errors
///
/// Returns [`MissingFieldError`] if a row inspected before an active one
/// lacks `status_field`.
pub fn has_active_contract(
    contracts: &Table,
    status_field: &str,
) -> Result<ContractCheck, MissingFieldError> {
    for (row, contract) in contracts.iter().enumerate() {
        let status = contract.require(status_field, row)?;
        if status.to_lowercase() == ACTIVE_STATUS {
            return Ok(ContractCheck {
                active_row: Some(row),
                inspected_rows: row + 1,
            });
        }
    }

    Ok(ContractCheck {
        active_row: None,
        inspected_rows: contracts.len(),
    })
}

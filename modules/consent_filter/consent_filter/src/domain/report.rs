//! Tracing-backed decision reporter.

use consent_filter_sdk::{
    ConsentGrants, ConsentLevel, ContractCheck, DecisionReporter, PurposeCheck, ReleaseOutcome,
};
use tracing::{debug, info};

/// Reports every decision as a `tracing` event.
///
/// Decisions are logged at `info`; the full consent maps only at `debug`
/// since they list subject identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingReporter;

impl DecisionReporter for LoggingReporter {
    fn purpose_checked(&self, check: &PurposeCheck) {
        if check.is_match() {
            info!(
                purpose = %check.requested,
                catalog_row = check.matched_row,
                "Query purpose is compatible with the dataset purpose"
            );
        } else {
            info!(
                purpose = %check.requested,
                catalog_rows = check.catalog_rows,
                "Query purpose is not compatible with the dataset purpose"
            );
        }
    }

    fn contract_checked(&self, check: &ContractCheck) {
        if check.is_active() {
            info!(contract_row = check.active_row, "Active contract found");
        } else {
            info!(
                inspected_rows = check.inspected_rows,
                "No active contract for this access"
            );
        }
    }

    fn consent_resolved(&self, grants: &ConsentGrants) {
        info!(
            partial_subjects = grants.subject_count(ConsentLevel::Partial),
            complete_subjects = grants.subject_count(ConsentLevel::Complete),
            ignored_rows = grants.ignored_rows().len(),
            "Consent registry resolved"
        );
        debug!(grants = ?grants, "Permitted fields per subject");
    }

    fn released(&self, outcome: &ReleaseOutcome) {
        let suppressed = outcome.table.iter().filter(|row| row.is_empty()).count();
        info!(
            basis = outcome.basis.as_str(),
            rows = outcome.table.len(),
            columns = outcome.header.len(),
            suppressed_rows = suppressed,
            "Dataset released"
        );
        match serde_json::to_string(outcome) {
            Ok(trail) => debug!(decision = %trail, "Decision trail"),
            Err(e) => debug!(error = %e, "Decision trail could not be serialized"),
        }
    }
}

//! Traits at the edges of the policy core.
//!
//! The core never touches files or consoles directly: tables come in and go
//! out through a [`RecordStore`], and every decision is handed to a
//! [`DecisionReporter`] that decides how (or whether) to show it.

use std::path::Path;

use crate::error::RecordStoreError;
use crate::models::{ConsentGrants, ContractCheck, PurposeCheck, ReleaseOutcome, Table};

/// Source and sink of tabular records.
pub trait RecordStore: Send + Sync {
    /// Read the whole table at `path` into memory.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Read`] if the table is missing or malformed.
    fn read_table(&self, path: &Path) -> Result<Table, RecordStoreError>;

    /// Write `table` to `path` using exactly the columns in `header`.
    ///
    /// The header is written even when `table` is empty, and fields a row
    /// lacks are written as empty cells.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Write`] if the destination cannot be written.
    fn write_table(
        &self,
        path: &Path,
        header: &[String],
        table: &Table,
    ) -> Result<(), RecordStoreError>;
}

/// Observer for policy decisions.
pub trait DecisionReporter: Send + Sync {
    fn purpose_checked(&self, check: &PurposeCheck);

    fn contract_checked(&self, check: &ContractCheck);

    fn consent_resolved(&self, grants: &ConsentGrants);

    /// Called once per run with the final outcome, before it is written.
    fn released(&self, outcome: &ReleaseOutcome);
}

/// Reporter that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpReporter;

impl DecisionReporter for NoOpReporter {
    fn purpose_checked(&self, _check: &PurposeCheck) {}

    fn contract_checked(&self, _check: &ContractCheck) {}

    fn consent_resolved(&self, _grants: &ConsentGrants) {}

    fn released(&self, _outcome: &ReleaseOutcome) {}
}

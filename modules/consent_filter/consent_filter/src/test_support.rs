#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use consent_filter_sdk::{
    ConsentGrants, ConsentLevel, ContractCheck, DecisionReporter, FieldSpec, PurposeCheck,
    Record, RecordStore, RecordStoreError, ReleaseOutcome, Table,
};
use parking_lot::Mutex;

use crate::config::ConsentFilterConfig;

#[must_use]
pub fn record(fields: &[(&str, &str)]) -> Record {
    fields.iter().copied().collect()
}

#[must_use]
pub fn table(records: Vec<Record>) -> Table {
    records.into()
}

/// Dataset row with the column layout used throughout the tests.
#[must_use]
pub fn customer(cpf: &str, nome: &str, email: &str, telefone: &str) -> Record {
    record(&[
        ("cpf", cpf),
        ("nome", nome),
        ("email", email),
        ("telefone", telefone),
    ])
}

#[must_use]
pub fn consent_row(cpf: &str, level: &str, info: &str) -> Record {
    record(&[("cpf", cpf), ("level", level), ("info", info)])
}

#[must_use]
pub fn specs(raw: &[&str]) -> Vec<FieldSpec> {
    raw.iter().map(|s| FieldSpec::new(*s)).collect()
}

#[must_use]
pub fn test_config() -> ConsentFilterConfig {
    ConsentFilterConfig {
        purpose_catalog_path: PathBuf::from("purposes.csv"),
        dataset_path: PathBuf::from("dataset.csv"),
        contracts_path: PathBuf::from("contracts.csv"),
        consents_path: PathBuf::from("consents.csv"),
        output_path: PathBuf::from("released.csv"),
        query_purpose: "billing".to_owned(),
        purpose_field: "purpose".to_owned(),
        status_field: "status".to_owned(),
        identification_field: "cpf".to_owned(),
        consent_subject_field: "cpf".to_owned(),
        consent_level_field: "level".to_owned(),
        consent_info_field: "info".to_owned(),
    }
}

/// In-memory record store keyed by path.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<HashMap<PathBuf, Table>>,
    written: Mutex<HashMap<PathBuf, (Vec<String>, Table)>>,
}

impl MemoryStore {
    pub fn put(&self, path: &Path, table: Table) {
        self.tables.lock().insert(path.to_path_buf(), table);
    }

    pub fn written(&self, path: &Path) -> Option<(Vec<String>, Table)> {
        self.written.lock().get(path).cloned()
    }
}

impl RecordStore for MemoryStore {
    fn read_table(&self, path: &Path) -> Result<Table, RecordStoreError> {
        self.tables
            .lock()
            .get(path)
            .cloned()
            .ok_or_else(|| RecordStoreError::read(path, "no such table"))
    }

    fn write_table(
        &self,
        path: &Path,
        header: &[String],
        table: &Table,
    ) -> Result<(), RecordStoreError> {
        self.written
            .lock()
            .insert(path.to_path_buf(), (header.to_vec(), table.clone()));
        Ok(())
    }
}

/// Reporter that records a compact trace of the callbacks it received.
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().push(event);
    }
}

impl DecisionReporter for RecordingReporter {
    fn purpose_checked(&self, check: &PurposeCheck) {
        self.push(format!("purpose:{}", check.is_match()));
    }

    fn contract_checked(&self, check: &ContractCheck) {
        self.push(format!("contract:{}", check.is_active()));
    }

    fn consent_resolved(&self, grants: &ConsentGrants) {
        let subjects = grants.subject_count(ConsentLevel::Partial)
            + grants.subject_count(ConsentLevel::Complete);
        self.push(format!("consent:{subjects}"));
    }

    fn released(&self, outcome: &ReleaseOutcome) {
        self.push(format!("released:{}", outcome.basis.as_str()));
    }
}

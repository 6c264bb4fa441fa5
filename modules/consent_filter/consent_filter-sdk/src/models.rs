//! Domain models for the consent filter module.
//!
//! Tables are plain ordered sequences of string-valued records. The policy
//! never interprets values beyond string equality, so no schema is attached.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::MissingFieldError;

/// A single row: field name to value, in column order.
///
/// Field names are unique within a record; [`Record::insert`] replaces the
/// value of an existing field in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful in tests and fixtures.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set `name` to `value`, keeping the original column position if the
    /// field already exists.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.fields.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.fields.push((name, value));
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Read a field the policy cannot proceed without.
    ///
    /// `row` is the zero-based position of this record in its table and is
    /// only used for error reporting.
    ///
    /// # Errors
    ///
    /// Returns [`MissingFieldError`] if the record has no such field.
    pub fn require(&self, name: &str, row: usize) -> Result<&str, MissingFieldError> {
        self.get(name).ok_or_else(|| MissingFieldError {
            field: name.to_owned(),
            row,
        })
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Keep only the fields named in `header`, in header order.
    ///
    /// Header fields the record lacks are skipped, not filled in.
    #[must_use]
    pub fn project(&self, header: &[String]) -> Self {
        header
            .iter()
            .filter_map(|name| self.get(name).map(|value| (name.clone(), value.to_owned())))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

/// An ordered sequence of records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Field names of the first record; empty for an empty table.
    #[must_use]
    pub fn header(&self) -> Vec<String> {
        self.records
            .first()
            .map(|first| first.field_names().map(str::to_owned).collect())
            .unwrap_or_default()
    }

    /// Project every row onto `header` (see [`Record::project`]).
    #[must_use]
    pub fn project(&self, header: &[String]) -> Self {
        self.records.iter().map(|r| r.project(header)).collect()
    }
}

impl From<Vec<Record>> for Table {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl FromIterator<Record> for Table {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Table {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// One entry of a consent-info list.
///
/// A specifier may itself name several fields joined by `,`
/// (e.g. `"nome,email"`); they are expanded by [`FieldSpec::field_names`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FieldSpec(String);

impl FieldSpec {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Individual field names: split on `,`, trimmed, blanks dropped.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.0.split(',').map(str::trim).filter(|name| !name.is_empty())
    }
}

impl From<&str> for FieldSpec {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Granularity of a subject's consent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentLevel {
    Partial,
    Complete,
}

impl ConsentLevel {
    /// Both levels are applied, partial first.
    pub const ALL: [Self; 2] = [Self::Partial, Self::Complete];

    /// Parse a registry value case-insensitively.
    ///
    /// Accepts the Portuguese (`parcial`, `completo`) and English
    /// (`partial`, `complete`) spellings. Anything else yields `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "parcial" | "partial" => Some(Self::Partial),
            "completo" | "complete" => Some(Self::Complete),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Partial => "partial",
            Self::Complete => "complete",
        }
    }
}

/// Subject-to-fields authorization, one map per consent level.
///
/// Built fresh for every run. A later grant for the same subject and level
/// replaces the earlier one; grants are never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConsentGrants {
    partial: HashMap<String, Vec<FieldSpec>>,
    complete: HashMap<String, Vec<FieldSpec>>,
    ignored_rows: Vec<usize>,
}

impl ConsentGrants {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `specs` for `subject` at `level`, returning the grant it replaced.
    pub fn grant(
        &mut self,
        level: ConsentLevel,
        subject: impl Into<String>,
        specs: Vec<FieldSpec>,
    ) -> Option<Vec<FieldSpec>> {
        self.level_mut(level).insert(subject.into(), specs)
    }

    /// Note a registry row whose level was not recognized.
    pub fn ignore_row(&mut self, row: usize) {
        self.ignored_rows.push(row);
    }

    #[must_use]
    pub fn specs_for(&self, level: ConsentLevel, subject: &str) -> Option<&[FieldSpec]> {
        self.level(level).get(subject).map(Vec::as_slice)
    }

    #[must_use]
    pub fn partial(&self, subject: &str) -> Option<&[FieldSpec]> {
        self.specs_for(ConsentLevel::Partial, subject)
    }

    #[must_use]
    pub fn complete(&self, subject: &str) -> Option<&[FieldSpec]> {
        self.specs_for(ConsentLevel::Complete, subject)
    }

    /// Number of subjects holding a grant at `level`.
    #[must_use]
    pub fn subject_count(&self, level: ConsentLevel) -> usize {
        self.level(level).len()
    }

    /// Zero-based registry rows dropped for an unrecognized level.
    #[must_use]
    pub fn ignored_rows(&self) -> &[usize] {
        &self.ignored_rows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.partial.is_empty() && self.complete.is_empty()
    }

    fn level(&self, level: ConsentLevel) -> &HashMap<String, Vec<FieldSpec>> {
        match level {
            ConsentLevel::Partial => &self.partial,
            ConsentLevel::Complete => &self.complete,
        }
    }

    fn level_mut(&mut self, level: ConsentLevel) -> &mut HashMap<String, Vec<FieldSpec>> {
        match level {
            ConsentLevel::Partial => &mut self.partial,
            ConsentLevel::Complete => &mut self.complete,
        }
    }
}

/// Outcome of matching the query purpose against the purpose catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurposeCheck {
    /// The purpose the query was made for.
    pub requested: String,
    /// First catalog row whose purpose equals `requested`.
    pub matched_row: Option<usize>,
    /// Number of catalog rows available.
    pub catalog_rows: usize,
}

impl PurposeCheck {
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.matched_row.is_some()
    }
}

/// Outcome of scanning the contract registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContractCheck {
    /// First row whose status is `true` (case-insensitive).
    pub active_row: Option<usize>,
    /// Rows read before the scan stopped.
    pub inspected_rows: usize,
}

impl ContractCheck {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active_row.is_some()
    }
}

/// Which tier of the policy released the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseBasis {
    /// Query purpose is in the catalog; full dataset released.
    PurposeMatch,
    /// An active contract overrides consent; full dataset released.
    ActiveContract,
    /// Fields restricted per subject consent.
    Consent,
}

impl ReleaseBasis {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PurposeMatch => "purpose_match",
            Self::ActiveContract => "active_contract",
            Self::Consent => "consent",
        }
    }
}

/// The four tables a policy run consumes, fully loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyInputs {
    pub purpose_catalog: Table,
    pub dataset: Table,
    pub contracts: Table,
    pub consents: Table,
}

/// Released data together with the decisions that produced it.
///
/// Serializes as the decision trail only; released rows are left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseOutcome {
    pub basis: ReleaseBasis,
    /// Output header, captured from the unfiltered dataset.
    pub header: Vec<String>,
    /// Released rows, already projected onto `header`.
    #[serde(skip)]
    pub table: Table,
    pub purpose: PurposeCheck,
    /// Absent when the purpose tier already released the data.
    pub contract: Option<ContractCheck>,
    /// Present only for the consent tier.
    pub grants: Option<ConsentGrants>,
}

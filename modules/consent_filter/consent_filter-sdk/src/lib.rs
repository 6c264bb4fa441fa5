//! Consent Filter SDK
//!
//! This crate provides the public surface of the `consent_filter` module:
//!
//! - [`Record`], [`Table`] - Tabular data exchanged with record stores
//! - [`ConsentGrants`], [`FieldSpec`], [`ConsentLevel`] - Resolved consent
//! - [`PurposeCheck`], [`ContractCheck`], [`ReleaseOutcome`] - Decision trail
//! - [`RecordStore`] - Plugin API for table I/O
//! - [`DecisionReporter`] - Observer for policy decisions
//! - [`MissingFieldError`], [`RecordStoreError`] - Error types
//!
//! ## Usage
//!
//! ```
//! use consent_filter_sdk::{Record, Table};
//!
//! let dataset: Table = vec![
//!     Record::new().with_field("cpf", "123").with_field("nome", "Ana"),
//! ]
//! .into();
//! assert_eq!(dataset.header(), vec!["cpf".to_owned(), "nome".to_owned()]);
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod error;
pub mod models;

pub use api::{DecisionReporter, NoOpReporter, RecordStore};
pub use error::{MissingFieldError, RecordStoreError};
pub use models::{
    ConsentGrants, ConsentLevel, ContractCheck, FieldSpec, PolicyInputs, PurposeCheck, Record,
    ReleaseBasis, ReleaseOutcome, Table,
};

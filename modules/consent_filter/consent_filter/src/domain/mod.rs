//! Domain layer for the consent filter.
//!
//! Leaf checks first, orchestration last:
//! - [`purpose`] - query purpose against the purpose catalog
//! - [`contract`] - active contract override
//! - [`consent`] - consent registry into per-level grants
//! - [`access`] - per-record field selection from grants
//! - [`service`] - the three-tier decision and the load/decide/write run

pub mod access;
pub mod consent;
pub mod contract;
pub mod error;
pub mod purpose;
pub mod report;
pub mod service;

pub use error::DomainError;
pub use report::LoggingReporter;
pub use service::Service;

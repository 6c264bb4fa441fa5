#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;

#[cfg(test)]
mod test_support;

pub use config::ConsentFilterConfig;
pub use domain::{DomainError, LoggingReporter, Service};

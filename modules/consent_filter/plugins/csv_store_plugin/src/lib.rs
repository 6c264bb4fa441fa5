#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;

pub use config::CsvStorePluginConfig;
pub use domain::Service;

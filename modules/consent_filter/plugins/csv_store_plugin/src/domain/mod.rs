//! Domain layer for the CSV record store.

pub mod client;
pub mod service;

pub use service::Service;

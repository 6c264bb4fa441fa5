//! Error types for the consent filter SDK.

use std::path::PathBuf;

/// A record lacks a field the policy must read.
///
/// Never defaulted: treating a missing status or identifier as "absent"
/// would itself be an access decision.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("record {row} has no field `{field}`")]
pub struct MissingFieldError {
    /// The field that was looked up.
    pub field: String,
    /// Zero-based position of the record in its table.
    pub row: usize,
}

/// Errors raised by [`RecordStore`](crate::RecordStore) implementations.
#[derive(Debug, thiserror::Error)]
pub enum RecordStoreError {
    /// The table at `path` could not be read or parsed.
    #[error("failed to read table {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The table could not be written to `path`.
    #[error("failed to write table {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The store was configured with unusable settings.
    #[error("invalid record store configuration: {0}")]
    InvalidConfig(String),
}

impl RecordStoreError {
    #[must_use]
    pub fn read(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Read {
            path: path.into(),
            source: source.into(),
        }
    }

    #[must_use]
    pub fn write(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Write {
            path: path.into(),
            source: source.into(),
        }
    }
}

//! Service implementation for the CSV record store plugin.

use std::path::Path;

use consent_filter_sdk::{Record, RecordStoreError, Table};
use tracing::debug;

use crate::config::CsvStorePluginConfig;

/// CSV record store.
///
/// Every table is a delimited file whose first row names the fields. Reads
/// are strict: a row with more or fewer cells than the header is an error.
#[derive(Debug, Clone)]
pub struct Service {
    delimiter: u8,
}

impl Service {
    /// Create a service from plugin configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::InvalidConfig`] if the delimiter is not a
    /// single ASCII character.
    pub fn from_config(cfg: &CsvStorePluginConfig) -> Result<Self, RecordStoreError> {
        if !cfg.delimiter.is_ascii() {
            return Err(RecordStoreError::InvalidConfig(format!(
                "delimiter `{}` is not an ASCII character",
                cfg.delimiter
            )));
        }
        let mut buf = [0_u8; 1];
        cfg.delimiter.encode_utf8(&mut buf);

        Ok(Self { delimiter: buf[0] })
    }

    /// Read the table at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Read`] if the file cannot be opened or a
    /// row is malformed.
    pub fn read(&self, path: &Path) -> Result<Table, RecordStoreError> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .from_path(path)
            .map_err(|e| RecordStoreError::read(path, e))?;
        let header = reader
            .headers()
            .map_err(|e| RecordStoreError::read(path, e))?
            .clone();

        let mut table = Table::new();
        for row in reader.records() {
            let row = row.map_err(|e| RecordStoreError::read(path, e))?;
            let record: Record = header.iter().zip(row.iter()).collect();
            table.push(record);
        }

        debug!(path = %path.display(), rows = table.len(), "Read table");
        Ok(table)
    }

    /// Write `table` to `path` with exactly the columns in `header`.
    ///
    /// Fields a row lacks are written as empty cells. An empty header
    /// produces an empty file.
    ///
    /// # Errors
    ///
    /// Returns [`RecordStoreError::Write`] if the file cannot be written.
    pub fn write(
        &self,
        path: &Path,
        header: &[String],
        table: &Table,
    ) -> Result<(), RecordStoreError> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_path(path)
            .map_err(|e| RecordStoreError::write(path, e))?;

        if !header.is_empty() {
            writer
                .write_record(header)
                .map_err(|e| RecordStoreError::write(path, e))?;
            for row in table {
                let cells = header
                    .iter()
                    .map(|name| row.get(name).unwrap_or_default());
                writer
                    .write_record(cells)
                    .map_err(|e| RecordStoreError::write(path, e))?;
            }
        }
        writer
            .flush()
            .map_err(|e| RecordStoreError::write(path, e))?;

        debug!(path = %path.display(), rows = table.len(), columns = header.len(), "Wrote table");
        Ok(())
    }
}

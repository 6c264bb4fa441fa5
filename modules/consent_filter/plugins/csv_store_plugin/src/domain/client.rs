//! [`RecordStore`] implementation for the CSV record store.

use std::path::Path;

use consent_filter_sdk::{RecordStore, RecordStoreError, Table};

use super::service::Service;

impl RecordStore for Service {
    fn read_table(&self, path: &Path) -> Result<Table, RecordStoreError> {
        self.read(path)
    }

    fn write_table(
        &self,
        path: &Path,
        header: &[String],
        table: &Table,
    ) -> Result<(), RecordStoreError> {
        self.write(path, header, table)
    }
}

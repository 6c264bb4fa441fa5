#![allow(clippy::unwrap_used, clippy::expect_used)]

//! The plugin exercised purely through the SDK trait.

use std::fs;

use consent_filter_sdk::{Record, RecordStore, RecordStoreError, Table};
use csv_store_plugin::{CsvStorePluginConfig, Service};

fn store_from_yaml(yaml: &str) -> Box<dyn RecordStore> {
    let cfg: CsvStorePluginConfig = serde_saphyr::from_str(yaml).unwrap();
    Box::new(Service::from_config(&cfg).unwrap())
}

#[test]
fn quoted_cells_survive_a_rewrite() {
    let store = store_from_yaml("delimiter: ','\n");
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("consentimento.csv");
    let dst = dir.path().join("copia.csv");
    fs::write(
        &src,
        "cpf,consent_level,consent_info\n123,completo,\"nome, email\"\n456,parcial,\"linha\nquebrada\"\n",
    )
    .unwrap();

    let table = store.read_table(&src).unwrap();
    assert_eq!(table.records()[0].get("consent_info"), Some("nome, email"));
    assert_eq!(table.records()[1].get("consent_info"), Some("linha\nquebrada"));

    store.write_table(&dst, &table.header(), &table).unwrap();
    assert_eq!(store.read_table(&dst).unwrap(), table);
}

#[test]
fn header_selects_and_orders_written_columns() {
    let store = store_from_yaml("{}");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.tsv");
    let table = Table::from(vec![
        Record::new()
            .with_field("nome", "Ana")
            .with_field("cpf", "123")
            .with_field("extra", "ignored"),
    ]);
    let header = vec!["cpf".to_owned(), "nome".to_owned(), "email".to_owned()];

    store.write_table(&path, &header, &table).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "cpf,nome,email\n123,Ana,\n");
}

#[test]
fn unwritable_destination_is_a_write_error() {
    let store = store_from_yaml("{}");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("out.csv");

    let err = store
        .write_table(&path, &["cpf".to_owned()], &Table::new())
        .unwrap_err();

    assert!(matches!(err, RecordStoreError::Write { ref path, .. } if path.ends_with("out.csv")));
}

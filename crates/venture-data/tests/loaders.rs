//! Integration tests for the CSV sample data loaders.

use std::fs;
use std::path::{Path, PathBuf};

use venture_data::loaders::{load_deals, load_users};
use venture_data::{DataError, RecordSource, SampleCatalog};
use venture_model::{DealStage, UserRole};

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "venture-data-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

fn shipped_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../sample-data")
}

#[test]
fn shipped_sample_data_loads() {
    let catalog = SampleCatalog::load(&shipped_root()).expect("load sample data");

    assert_eq!(catalog.users.len(), 10);
    assert_eq!(catalog.deals.len(), 8);
    assert_eq!(catalog.ventures.len(), 8);

    let founders = catalog
        .users
        .records()
        .iter()
        .filter(|user| user.role == UserRole::Founder)
        .count();
    assert_eq!(founders, 4);

    let deal = catalog.deals.find("d-102").expect("deal d-102");
    assert_eq!(deal.stage, DealStage::Sourcing);
    assert_eq!(deal.valuation, None);
    assert_eq!(deal.expected_close, None);
    assert_eq!(deal.tags, vec!["climate".to_string(), "hardware".to_string()]);
}

#[test]
fn empty_company_is_absent() {
    let catalog = SampleCatalog::load(&shipped_root()).expect("load sample data");
    let expert = catalog.users.find("u-003").expect("user u-003");
    assert_eq!(expert.company, None);
}

#[test]
fn invalid_enum_reports_line_and_column() {
    let dir = unique_temp_dir("bad-role");
    let path = dir.join("users.csv");
    write(
        &path,
        "id,name,email,role,status,company,joined\n\
         u-1,Ada,ada@example.com,founder,active,,2024-01-01\n\
         u-2,Bob,bob@example.com,wizard,active,,2024-01-02\n",
    );

    let error = load_users(&path).unwrap_err();
    match error {
        DataError::InvalidValue { line, column, .. } => {
            assert_eq!(line, 3);
            assert_eq!(column, "role");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_column_is_rejected() {
    let dir = unique_temp_dir("missing-column");
    let path = dir.join("deals.csv");
    write(&path, "id,company,sector,stage,amount\nd-1,Acme,Retail,closed,10\n");

    let error = load_deals(&path).unwrap_err();
    assert!(
        matches!(error, DataError::MissingColumn { ref column, .. } if column == "valuation"),
        "unexpected error: {error}"
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = unique_temp_dir("missing-file");
    let error = SampleCatalog::load(&dir).unwrap_err();
    assert!(matches!(error, DataError::Io { .. }), "unexpected error: {error}");
}

#[test]
fn duplicate_ids_fail_catalog_load() {
    let dir = unique_temp_dir("duplicates");
    fs::copy(shipped_root().join("deals.csv"), dir.join("deals.csv")).unwrap();
    fs::copy(shipped_root().join("ventures.csv"), dir.join("ventures.csv")).unwrap();
    write(
        &dir.join("users.csv"),
        "id,name,email,role,status,company,joined\n\
         u-1,Ada,ada@example.com,founder,active,,2024-01-01\n\
         u-1,Bob,bob@example.com,expert,active,,2024-01-02\n",
    );

    let error = SampleCatalog::load(&dir).unwrap_err();
    assert!(
        matches!(error, DataError::DuplicateId { kind: "user", .. }),
        "unexpected error: {error}"
    );
}

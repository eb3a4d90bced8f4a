//! Tests for claim parsing and profiling.

use std::fs;

use chrono::NaiveDate;
use claim_ingest::{
    ColumnKind, CsvTable, IngestError, SchemaError, parse_claims, profile_table, read_csv_table,
};
use rust_decimal::Decimal;

const HEADER: &str = "MemberFirstName,MemberLastName,MemberDOB,MemberID,SubscriberAddress,\
SubscriberCity,SubscriberState,SubscriberZip,SubscriberGender,ProviderName,ProviderNPI,\
DiagnosisCode,ChargeAmount,ServiceStartDate";

fn table(body: &str) -> CsvTable {
    CsvTable::from_reader(format!("{HEADER}\n{body}").as_bytes()).expect("read csv")
}

#[test]
fn parses_typed_record() {
    let table = table(
        "Jon,Smith,1980-04-02,M100,12 Main St,Springfield,IL,62701,M,Acme Clinic,1234567890,J45,125.50,2024-01-15\n",
    );
    let dataset = parse_claims(&table).expect("parse claims");
    assert_eq!(dataset.len(), 1);

    let record = &dataset[0];
    assert_eq!(record.member_first_name.as_deref(), Some("Jon"));
    assert_eq!(record.member_last_name, "Smith");
    assert_eq!(record.member_dob, NaiveDate::from_ymd_opt(1980, 4, 2));
    assert_eq!(record.subscriber_zip, "62701");
    assert_eq!(record.provider_npi, "1234567890");
    assert_eq!(record.charge_amount, Some(Decimal::new(12550, 2)));
    assert_eq!(record.adjusted_charge_amount, None);
    assert_eq!(
        record.service_start_date,
        NaiveDate::from_ymd_opt(2024, 1, 15)
    );
}

#[test]
fn bad_values_become_null_without_failing() {
    let table = table(
        ",Smith,not-a-date,M100,,,,,,Acme,1,J45,abc,someday\n\
         Ann,Lee,01/31/1975,M101,,,,,,Acme,1,J45,-5,2024-02-01\n",
    );
    let dataset = parse_claims(&table).expect("parse claims");
    assert_eq!(dataset.len(), 2);
    assert_eq!(dataset[0].member_first_name, None);
    assert_eq!(dataset[0].member_dob, None);
    assert_eq!(dataset[0].charge_amount, None);
    assert_eq!(dataset[0].service_start_date, None);
    assert_eq!(dataset[1].member_dob, NaiveDate::from_ymd_opt(1975, 1, 31));
    assert_eq!(dataset[1].charge_amount, Some(Decimal::new(-5, 0)));
}

#[test]
fn missing_provider_npi_is_schema_error() {
    let header = HEADER.replace("ProviderNPI,", "");
    let table = CsvTable::from_reader(format!("{header}\n").as_bytes()).expect("read csv");
    let err = parse_claims(&table).unwrap_err();
    assert_eq!(
        err,
        SchemaError {
            missing: vec!["ProviderNPI".to_string()]
        }
    );
}

#[test]
fn empty_input_reports_every_column() {
    let table = CsvTable::from_reader("".as_bytes()).expect("read csv");
    let err = parse_claims(&table).unwrap_err();
    assert_eq!(err.missing.len(), 14);
}

#[test]
fn headers_match_case_insensitively() {
    let header = HEADER.to_lowercase();
    let table = CsvTable::from_reader(
        format!("{header}\nJon,Smith,,M1,,,,,,Acme,1,J45,10,\n").as_bytes(),
    )
    .expect("read csv");
    let dataset = parse_claims(&table).expect("parse claims");
    assert_eq!(dataset[0].member_id, "M1");
    assert_eq!(dataset[0].charge_amount, Some(Decimal::new(10, 0)));
}

#[test]
fn reordered_and_extra_columns_are_accepted() {
    let header = format!("Extra,{}", HEADER);
    let table = CsvTable::from_reader(
        format!("{header}\nx,Jon,Smith,,M1,,,,,,Acme,1,J45,10,\n").as_bytes(),
    )
    .expect("read csv");
    let dataset = parse_claims(&table).expect("parse claims");
    assert_eq!(dataset[0].member_first_name.as_deref(), Some("Jon"));
}

#[test]
fn reads_table_from_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("claims.csv");
    fs::write(
        &path,
        format!("{HEADER}\nJon,Smith,,M1,,,,,,Acme,1,J45,10,2024-01-01\n"),
    )
    .expect("write csv");
    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(table.headers.len(), 14);
    assert_eq!(table.len(), 1);
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = read_csv_table(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn profiles_numeric_and_text_columns() {
    let table = table(
        "Jon,Smith,,M1,,,,,,Acme,1,J45,10,2024-01-01\n\
         Ann,Lee,,M2,,,,,,Beta,2,J46,30,2024-01-02\n\
         ,Ray,,M3,,,,,,Beta,3,J47,,2024-01-03\n",
    );
    let profile = profile_table(&table).expect("profile");
    assert_eq!(profile.row_count, 3);
    assert_eq!(profile.columns.len(), 14);

    let charge = profile.column("ChargeAmount").expect("charge column");
    assert_eq!(charge.kind, ColumnKind::Numeric);
    assert_eq!(charge.non_null, 2);
    assert_eq!(charge.null_count, 1);
    let summary = charge.summary.expect("numeric summary");
    assert_eq!(summary.count, 2);
    assert_eq!(summary.mean, Some(20.0));
    assert_eq!(summary.min, Some(10.0));
    assert_eq!(summary.max, Some(30.0));

    let first = profile.column("MemberFirstName").expect("first name column");
    assert_eq!(first.kind, ColumnKind::Text);
    assert_eq!(first.null_count, 1);
    assert!(first.summary.is_none());

    let dob = profile.column("MemberDOB").expect("dob column");
    assert_eq!(dob.kind, ColumnKind::Text);
    assert_eq!(dob.non_null, 0);
}

#[test]
fn profiles_tables_with_blank_and_repeated_headers() {
    let table = CsvTable::from_reader(
        format!("{HEADER},,,ChargeAmount\nJon,Smith,,M1,,,,,,Acme,1,J45,10,2024-01-01,,,5\n")
            .as_bytes(),
    )
    .expect("read csv");

    let dataset = parse_claims(&table).expect("parse claims");
    assert_eq!(dataset[0].charge_amount, Some(Decimal::new(10, 0)));

    let profile = profile_table(&table).expect("profile");
    assert_eq!(profile.columns.len(), 17);
    assert!(profile.column("Unnamed: 14").is_some());
    assert!(profile.column("Unnamed: 15").is_some());
    let repeated = profile.column("ChargeAmount.1").expect("repeated charge column");
    assert_eq!(repeated.kind, ColumnKind::Numeric);
}

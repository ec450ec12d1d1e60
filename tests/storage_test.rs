//! On-disk persistence tests for the salary database.

use wagewatch::storage::{PlayerRecord, SalaryDatabase};

#[test]
fn records_survive_reopening_the_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("salaries.db");

    let record = PlayerRecord {
        name: "Mauro Icardi".to_string(),
        club: "Galatasaray".to_string(),
        league: "Super Lig".to_string(),
        weekly_salary: 100_000.0,
        last_fetched: 1_700_000_000,
    };

    {
        let mut db = SalaryDatabase::open(&path).unwrap();
        db.upsert_player(&record).unwrap();
    }

    let db = SalaryDatabase::open(&path).unwrap();
    assert_eq!(db.find_player("Mauro Icardi").unwrap().unwrap(), record);
}

#[test]
fn schema_initialization_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("salaries.db");

    let _first = SalaryDatabase::open(&path).unwrap();
    let _second = SalaryDatabase::open(&path).unwrap();
}

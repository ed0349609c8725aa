//! Integration tests for the CSV table store.
//!
//! These tests verify that:
//! - load/save round-trips are content-equal
//! - legacy columns are dropped on the first write
//! - appends assign serial numbers and scrub denylisted rows
//! - validation failures are reported per-entry without aborting the batch

use faultbook_core::{Error, NewEntry, Table};
use faultbook_store::TableStore;
use tempfile::TempDir;

fn entry(keyword: &str, problem: &str) -> NewEntry {
    NewEntry {
        author: "asha".to_string(),
        project: "aurora".to_string(),
        keyword: keyword.to_string(),
        asic_module: "SerDes".to_string(),
        problem: problem.to_string(),
        root_cause: "clock gating".to_string(),
        solution: "disable gating".to_string(),
    }
}

fn store_in(dir: &TempDir) -> TableStore {
    TableStore::new(dir.path().join("knowledge.csv"))
}

#[test]
fn load_save_round_trip_is_content_equal() {
    let dir = TempDir::new().expect("temp dir");
    let store = store_in(&dir);

    let mut table = Table::default();
    store
        .append_entries(&mut table, vec![entry("timeout", "Device hangs")])
        .expect("append");

    let loaded = store.load().expect("load");
    store.save(&loaded).expect("save");
    let reloaded = store.load().expect("reload");

    assert_eq!(loaded, reloaded);
}

#[test]
fn missing_file_is_store_unavailable() {
    let dir = TempDir::new().expect("temp dir");
    let store = TableStore::new(dir.path().join("nope.csv"));

    let err = store.load().expect_err("load should fail");
    assert!(matches!(err, Error::StoreUnavailable { .. }));
}

#[test]
fn malformed_serial_is_store_unavailable() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("knowledge.csv");
    std::fs::write(
        &path,
        "Sr. No,Year,Author,Project,Keywords(One word),ASIC/Module,Problem,Root cause,Solution\n\
         not-a-number,2024-03-01 10:00:00,asha,aurora,timeout,SerDes,p,r,s\n",
    )
    .expect("write");

    let err = TableStore::new(path).load().expect_err("load should fail");
    assert!(matches!(err, Error::StoreUnavailable { .. }));
}

#[test]
fn legacy_columns_vanish_on_first_write() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("knowledge.csv");
    std::fs::write(
        &path,
        "Sr. No,Year,Author,Project,Keywords(One word),ASIC/Module,Problem,Root cause,Solution,Updated By,Date,Serial Number\n\
         1,2024-03-01 10:00:00,asha,aurora,timeout,SerDes,Device hangs,clock gating,disable gating,old,2020,1\n",
    )
    .expect("write");

    let store = TableStore::new(&path);
    let mut table = store.load().expect("load tolerates legacy columns");
    store
        .append_entries(&mut table, vec![entry("reset", "Lock never acquired")])
        .expect("append");

    let contents = std::fs::read_to_string(&path).expect("read back");
    let header = contents.lines().next().expect("header row");
    assert!(!header.contains("Updated By"));
    assert!(!header.contains("Date"));
    assert!(!header.contains("Serial Number"));
    assert!(header.contains("Keywords(One word)"));
}

#[test]
fn append_to_empty_table_starts_at_one() {
    let dir = TempDir::new().expect("temp dir");
    let store = store_in(&dir);

    let mut table = Table::default();
    let report = store
        .append_entries(&mut table, vec![entry("timeout", "Device hangs")])
        .expect("append");

    assert_eq!(report.appended, [1]);
    assert_eq!(table.records()[0].serial, 1);
}

#[test]
fn append_assigns_previous_max_plus_one() {
    let dir = TempDir::new().expect("temp dir");
    let store = store_in(&dir);

    let mut table = Table::default();
    store
        .append_entries(&mut table, vec![entry("timeout", "Device hangs")])
        .expect("first append");
    let report = store
        .append_entries(&mut table, vec![entry("reset", "Lock never acquired")])
        .expect("second append");

    assert_eq!(report.appended, [2]);
}

#[test]
fn batch_serials_strictly_increase() {
    let dir = TempDir::new().expect("temp dir");
    let store = store_in(&dir);

    let mut table = Table::default();
    let report = store
        .append_entries(
            &mut table,
            vec![
                entry("timeout", "Device hangs"),
                entry("reset", "Lock never acquired"),
                entry("voltage", "Eye diagram collapsed"),
            ],
        )
        .expect("append");

    assert_eq!(report.appended, [1, 2, 3]);
}

#[test]
fn empty_required_field_is_rejected_without_aborting_batch() {
    let dir = TempDir::new().expect("temp dir");
    let store = store_in(&dir);

    let mut bad = entry("reset", "Lock never acquired");
    bad.root_cause = "   ".to_string();

    let mut table = Table::default();
    let report = store
        .append_entries(&mut table, vec![entry("timeout", "Device hangs"), bad])
        .expect("append");

    assert_eq!(report.appended, [1]);
    assert_eq!(report.rejected.len(), 1);
    assert!(matches!(
        report.rejected[0],
        Error::InvalidEntry {
            index: 1,
            field: "root_cause"
        }
    ));
    assert_eq!(table.len(), 1);
}

#[test]
fn fields_are_trimmed_on_append() {
    let dir = TempDir::new().expect("temp dir");
    let store = store_in(&dir);

    let mut padded = entry("timeout", "Device hangs");
    padded.keyword = "  timeout  ".to_string();

    let mut table = Table::default();
    store
        .append_entries(&mut table, vec![padded])
        .expect("append");

    assert_eq!(table.records()[0].keyword, "timeout");
}

#[test]
fn denylist_marker_is_scrubbed_from_any_row() {
    let dir = TempDir::new().expect("temp dir");
    let store = store_in(&dir);

    let poisoned = entry("reset", "garbage dlkd'als row");
    let mut table = Table::default();
    store
        .append_entries(
            &mut table,
            vec![entry("timeout", "Device hangs"), poisoned],
        )
        .expect("seed append");

    // The poisoned row is gone after the cycle that introduced it, and stays
    // gone on subsequent cycles regardless of which rows are new.
    let mut reloaded = store.load().expect("load");
    assert_eq!(reloaded.len(), 1);

    let report = store
        .append_entries(&mut reloaded, vec![entry("voltage", "Eye diagram collapsed")])
        .expect("append");
    assert_eq!(report.scrubbed, 0);
    assert!(
        reloaded
            .records()
            .iter()
            .all(|record| !record.problem.contains("dlkd'als"))
    );
}

#[test]
fn new_row_with_marker_never_persists() {
    let dir = TempDir::new().expect("temp dir");
    let store = store_in(&dir);

    let mut poisoned = entry("reset", "ok");
    poisoned.solution = "W219E-=210= paste".to_string();

    let mut table = Table::default();
    let report = store
        .append_entries(&mut table, vec![poisoned])
        .expect("append");

    // The entry passed validation and got a serial, then the scrub removed it.
    assert_eq!(report.appended, [1]);
    assert_eq!(report.scrubbed, 1);
    assert!(store.load().expect("load").is_empty());
}

//! Knowledge-base records and the in-memory table.
//!
//! A [`Record`] is one row of the known-issues sheet; a [`Table`] is the full
//! ordered sheet held in memory. The table is append-only: rows are added by
//! the store's appender and never updated in place.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Timestamp format stamped into the `Year` column at append time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Column headers of the persisted sheet, in order.
pub const HEADERS: [&str; 9] = [
    "Sr. No",
    "Year",
    "Author",
    "Project",
    "Keywords(One word)",
    "ASIC/Module",
    "Problem",
    "Root cause",
    "Solution",
];

/// Garbage strings that identify known-bad injected rows.
///
/// Any row whose fields contain one of these markers (case-insensitive) is
/// purged from the table on every append cycle.
pub const DENYLIST_MARKERS: [&str; 5] = [
    "dlkd'als",
    "fhpiq[oe[",
    "oqpoeq-2pw",
    "w219e-=210=",
    "1ue2oqwp",
];

/// One knowledge-base row.
///
/// Field names are serde-renamed to the historical CSV headers. The creation
/// timestamp lives in a column named `Year`; the sheet has carried that
/// header since its first revision, so it is preserved as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Sr. No")]
    pub serial: u32,

    /// Creation time, `YYYY-MM-DD HH:MM:SS`.
    #[serde(rename = "Year")]
    pub created: String,

    #[serde(rename = "Author")]
    pub author: String,

    #[serde(rename = "Project")]
    pub project: String,

    /// One-word search keyword.
    #[serde(rename = "Keywords(One word)")]
    pub keyword: String,

    /// ASIC or module the problem was seen on. Searched alongside `keyword`.
    #[serde(rename = "ASIC/Module")]
    pub asic_module: String,

    #[serde(rename = "Problem")]
    pub problem: String,

    #[serde(rename = "Root cause")]
    pub root_cause: String,

    #[serde(rename = "Solution")]
    pub solution: String,
}

impl Record {
    /// All text fields, in column order.
    fn text_fields(&self) -> [&str; 8] {
        [
            &self.created,
            &self.author,
            &self.project,
            &self.keyword,
            &self.asic_module,
            &self.problem,
            &self.root_cause,
            &self.solution,
        ]
    }

    /// Whether any field carries a denylist marker.
    #[must_use]
    pub fn is_corrupt(&self) -> bool {
        self.text_fields().iter().any(|field| {
            let lower = field.to_lowercase();
            DENYLIST_MARKERS.iter().any(|marker| lower.contains(marker))
        })
    }
}

/// The seven user-supplied fields of a prospective record.
///
/// Serial number and timestamp are assigned by the appender, never by the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub author: String,
    pub project: String,
    pub keyword: String,
    pub asic_module: String,
    pub problem: String,
    pub root_cause: String,
    pub solution: String,
}

impl NewEntry {
    /// Copy with every field trimmed.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            author: self.author.trim().to_string(),
            project: self.project.trim().to_string(),
            keyword: self.keyword.trim().to_string(),
            asic_module: self.asic_module.trim().to_string(),
            problem: self.problem.trim().to_string(),
            root_cause: self.root_cause.trim().to_string(),
            solution: self.solution.trim().to_string(),
        }
    }

    /// Name of the first empty field, if any. All seven are required.
    #[must_use]
    pub fn first_empty_field(&self) -> Option<&'static str> {
        let fields = [
            (self.author.as_str(), "author"),
            (self.project.as_str(), "project"),
            (self.keyword.as_str(), "keyword"),
            (self.asic_module.as_str(), "asic_module"),
            (self.problem.as_str(), "problem"),
            (self.root_cause.as_str(), "root_cause"),
            (self.solution.as_str(), "solution"),
        ];
        fields
            .into_iter()
            .find(|(value, _)| value.trim().is_empty())
            .map(|(_, name)| name)
    }

    /// Turn the entry into a record, stamping the serial and the current
    /// local time.
    #[must_use]
    pub fn into_record(self, serial: u32) -> Record {
        Record {
            serial,
            created: Local::now().format(TIMESTAMP_FORMAT).to_string(),
            author: self.author,
            project: self.project,
            keyword: self.keyword,
            asic_module: self.asic_module,
            problem: self.problem,
            root_cause: self.root_cause,
            solution: self.solution,
        }
    }
}

/// The full knowledge base, ordered by insertion.
///
/// Invariant: serial numbers are unique and non-decreasing in row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    records: Vec<Record>,
}

impl Table {
    #[must_use]
    pub const fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serial number for the next appended row: `max + 1`, or 1 when empty.
    #[must_use]
    pub fn next_serial(&self) -> u32 {
        self.records
            .iter()
            .map(|record| record.serial)
            .max()
            .map_or(1, |max| max + 1)
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Drop every row carrying a denylist marker, over the whole table.
    ///
    /// Returns the number of rows removed.
    pub fn scrub(&mut self) -> usize {
        let before = self.records.len();
        self.records.retain(|record| !record.is_corrupt());
        before - self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(serial: u32, keyword: &str, problem: &str) -> Record {
        Record {
            serial,
            created: "2024-03-01 10:00:00".to_string(),
            author: "asha".to_string(),
            project: "aurora".to_string(),
            keyword: keyword.to_string(),
            asic_module: "SerDes".to_string(),
            problem: problem.to_string(),
            root_cause: "clock gating".to_string(),
            solution: "disable gating".to_string(),
        }
    }

    fn entry() -> NewEntry {
        NewEntry {
            author: "asha".to_string(),
            project: "aurora".to_string(),
            keyword: "timeout".to_string(),
            asic_module: "SerDes".to_string(),
            problem: "Device hangs".to_string(),
            root_cause: "clock gating".to_string(),
            solution: "disable gating".to_string(),
        }
    }

    #[test]
    fn next_serial_is_max_plus_one() {
        let table = Table::new(vec![record(3, "timeout", "a"), record(7, "reset", "b")]);
        assert_eq!(table.next_serial(), 8);
    }

    #[test]
    fn next_serial_on_empty_table_is_one() {
        assert_eq!(Table::default().next_serial(), 1);
    }

    #[test]
    fn trimmed_strips_whitespace() {
        let mut raw = entry();
        raw.keyword = "  timeout  ".to_string();
        assert_eq!(raw.trimmed().keyword, "timeout");
    }

    #[test]
    fn first_empty_field_reports_in_order() {
        let mut raw = entry();
        raw.project = "  ".to_string();
        raw.solution = String::new();
        assert_eq!(raw.first_empty_field(), Some("project"));
    }

    #[test]
    fn complete_entry_has_no_empty_field() {
        assert_eq!(entry().first_empty_field(), None);
    }

    #[test]
    fn into_record_stamps_serial_and_timestamp() {
        let record = entry().into_record(42);
        assert_eq!(record.serial, 42);
        assert!(chrono::NaiveDateTime::parse_from_str(&record.created, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(record.problem, "Device hangs");
    }

    #[test]
    fn scrub_removes_marked_rows_anywhere() {
        let mut poisoned = record(2, "reset", "ok row");
        poisoned.solution = "see DLKD'ALS notes".to_string();
        let mut table = Table::new(vec![record(1, "timeout", "fine"), poisoned]);

        assert_eq!(table.scrub(), 1);
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].serial, 1);
    }

    #[test]
    fn scrub_keeps_clean_rows() {
        let mut table = Table::new(vec![record(1, "timeout", "fine")]);
        assert_eq!(table.scrub(), 0);
        assert_eq!(table.len(), 1);
    }
}

//! Batch append with validation and denylist scrub.

use faultbook_core::{Error, NewEntry, Result, Table};
use tracing::{info, warn};

use crate::store::TableStore;

/// What happened to one batch of submitted entries.
#[derive(Debug, Default)]
pub struct AppendReport {
    /// Serial numbers assigned to accepted entries, in submission order.
    pub appended: Vec<u32>,
    /// Per-entry validation failures ([`Error::InvalidEntry`]); the rest of
    /// the batch proceeds regardless.
    pub rejected: Vec<Error>,
    /// Rows removed by the denylist scrub, counted over the whole table.
    pub scrubbed: usize,
}

impl AppendReport {
    #[must_use]
    pub fn accepted_all(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl TableStore {
    /// Validate and append a batch of entries, then scrub and persist.
    ///
    /// Every field of every entry is trimmed; an entry with any empty field
    /// is rejected in the report without aborting the batch. Accepted entries
    /// get successive serial numbers and a fresh timestamp. The denylist
    /// scrub runs over the WHOLE table, pre-existing rows included, before
    /// the file is rewritten.
    pub fn append_entries(&self, table: &mut Table, entries: Vec<NewEntry>) -> Result<AppendReport> {
        let mut report = AppendReport::default();

        for (index, entry) in entries.into_iter().enumerate() {
            let entry = entry.trimmed();
            if let Some(field) = entry.first_empty_field() {
                warn!("rejecting entry {index}: `{field}` is empty");
                report.rejected.push(Error::InvalidEntry { index, field });
                continue;
            }

            let serial = table.next_serial();
            table.push(entry.into_record(serial));
            report.appended.push(serial);
        }

        report.scrubbed = table.scrub();
        if report.scrubbed > 0 {
            info!("scrubbed {} corrupt rows", report.scrubbed);
        }

        self.save(table)?;
        info!(
            "appended {} entries ({} rejected)",
            report.appended.len(),
            report.rejected.len()
        );
        Ok(report)
    }
}

//! CSV-backed persistence for the knowledge base.
//!
//! The table lives in one delimited file. It is read wholesale at startup and
//! rewritten wholesale on every mutation. There are no incremental writes and
//! no locking, so concurrent writers race. Legacy columns (`Updated By`,
//! `Date`, `Serial Number`) still present in old files are ignored at load and
//! therefore vanish on the next write; the format only evolves forward.

use std::path::{Path, PathBuf};

use faultbook_core::{Error, HEADERS, Record, Result, Table};
use tracing::info;

/// Handle on the persisted table file.
pub struct TableStore {
    path: PathBuf,
}

impl TableStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full table.
    ///
    /// Fails with [`Error::StoreUnavailable`] when the file is unreachable or
    /// any row is malformed; callers are expected to abort startup on that.
    pub fn load(&self) -> Result<Table> {
        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| self.unavailable(e))?;

        let mut records = Vec::new();
        for row in reader.deserialize::<Record>() {
            records.push(row.map_err(|e| self.unavailable(e))?);
        }

        info!("loaded {} records from {}", records.len(), self.path.display());
        Ok(Table::new(records))
    }

    /// Serialize the full table over the prior file contents.
    ///
    /// No partial-write recovery: a crash mid-write leaves a truncated file.
    pub fn save(&self, table: &Table) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path).map_err(|e| self.unavailable(e))?;

        // Serializing a record emits the header row first; a scrubbed-empty
        // table still needs one.
        if table.is_empty() {
            writer
                .write_record(HEADERS)
                .map_err(|e| self.unavailable(e))?;
        }
        for record in table.records() {
            writer.serialize(record).map_err(|e| self.unavailable(e))?;
        }
        writer
            .flush()
            .map_err(|e| self.unavailable(csv::Error::from(e)))?;

        info!("wrote {} records to {}", table.len(), self.path.display());
        Ok(())
    }

    fn unavailable(&self, source: csv::Error) -> Error {
        Error::StoreUnavailable {
            path: self.path.clone(),
            source: anyhow::Error::new(source),
        }
    }
}

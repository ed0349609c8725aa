//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy with its own input type, dispatched
//! statically: no trait objects, no runtime overhead.

use std::io::{self, Write};

use faultbook_config::Config;
use faultbook_core::{NewEntry, Table};
use faultbook_store::{AppendReport, TableStore};

mod add;
mod ask;
mod chat;
mod info;
mod init;
mod version;

pub use add::{AddInput, AddStrategy};
pub use ask::{AskInput, AskStrategy};
pub use chat::ChatStrategy;
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// Each strategy defines its own input type via an associated type, enabling
/// type-safe parameter passing without runtime casting or boxing.
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Open the configured store and load the table.
///
/// A load failure aborts the command; nothing can run without the table.
fn open_table(config: &Config) -> anyhow::Result<(TableStore, Table)> {
    let store = TableStore::new(&config.storage.csv_path);
    let table = store.load()?;
    Ok((store, table))
}

/// Read one trimmed line, showing `label` as the prompt.
fn prompt_line(label: &str) -> anyhow::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Prompt for the seven fields of one entry.
fn prompt_entry(number: usize) -> anyhow::Result<NewEntry> {
    println!("--- Entry {number} ---");
    Ok(NewEntry {
        author: prompt_line("Your name")?,
        keyword: prompt_line("Keyword (e.g. Error Code 123)")?,
        asic_module: prompt_line("ASIC/Module (e.g. Module XYZ)")?,
        problem: prompt_line("Problem (describe the issue)")?,
        root_cause: prompt_line("Root cause")?,
        solution: prompt_line("Solution")?,
        project: prompt_line("Project (e.g. Project ABC)")?,
    })
}

/// Prompt for a batch of entries, capped at 1-10 per submission.
fn collect_entries(count: usize) -> anyhow::Result<Vec<NewEntry>> {
    let count = count.clamp(1, 10);
    (1..=count).map(prompt_entry).collect()
}

/// Print the outcome of an append batch.
fn print_report(report: &AppendReport) {
    for rejection in &report.rejected {
        println!("Please fill in all fields: {rejection}");
    }
    if !report.appended.is_empty() {
        let serials: Vec<String> = report.appended.iter().map(ToString::to_string).collect();
        println!(
            "All entries added successfully! Assigned Sr. No: {}",
            serials.join(", ")
        );
    }
}

//! Configuration and table statistics command.

use faultbook_config::Config;

use super::open_table;

/// Strategy for displaying configuration and knowledge-base statistics.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    fn execute(&self, (): Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        println!("=== faultbook Configuration ===\n");

        println!("Storage:");
        println!("  CSV path: {}", config.storage.csv_path.display());

        match open_table(&config) {
            Ok((_store, table)) => {
                println!("  Status: Available");
                println!();
                println!("Knowledge base:");
                println!("  Rows: {}", table.len());
                if let Some(max) = table.records().iter().map(|r| r.serial).max() {
                    println!("  Highest Sr. No: {max}");
                }
                println!("  Next Sr. No: {}", table.next_serial());
            }
            Err(e) => {
                println!("  Status: Unavailable");
                println!("  Error: {e}");
            }
        }
        println!();

        println!("Phrases:");
        let book = config.phrase_book();
        println!("  Greetings: {}", book.greetings.len());
        println!("  Data-entry phrases: {}", book.data_entry.len());
        println!("  Add-data phrases: {}", book.add_data.len());
        println!("  Delete-data phrases: {}", book.delete_data.len());
        if config.phrases.is_some() {
            println!("  Source: config override");
        } else {
            println!("  Source: built-in defaults");
        }

        Ok(())
    }
}

//! Guided batch entry command.

use faultbook_config::Config;

use super::{collect_entries, open_table, print_report};

/// Input parameters for the Add command strategy.
#[derive(Debug, Clone, Copy)]
pub struct AddInput {
    /// Number of entries to collect, clamped to 1-10.
    pub count: usize,
}

/// Strategy for appending entries through guided prompts.
#[derive(Debug, Clone, Copy)]
pub struct AddStrategy;

impl super::CommandStrategy for AddStrategy {
    type Input = AddInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let (store, mut table) = open_table(&config)?;

        let entries = collect_entries(input.count)?;
        let report = store.append_entries(&mut table, entries)?;
        print_report(&report);
        Ok(())
    }
}

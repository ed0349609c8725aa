//! Configuration bootstrap command.

use faultbook_config::Config;

/// Strategy for creating the initial configuration file.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ();

    fn execute(&self, (): Self::Input) -> anyhow::Result<()> {
        Config::create_config()
    }
}

//! One-shot question command.

use faultbook_config::Config;
use faultbook_query::{QueryEngine, QueryResult};

use super::open_table;

/// Input parameters for the Ask command strategy.
#[derive(Debug, Clone)]
pub struct AskInput {
    /// The question text.
    pub message: String,
}

/// Strategy for answering a single question without a session.
#[derive(Debug, Clone, Copy)]
pub struct AskStrategy;

impl super::CommandStrategy for AskStrategy {
    type Input = AskInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let (_store, table) = open_table(&config)?;
        let engine = QueryEngine::new(config.phrase_book());

        match engine.resolve(&table, &input.message) {
            QueryResult::CannedReply(reply)
            | QueryResult::NoMatch(reply)
            | QueryResult::Fallback(reply) => println!("{reply}"),
            QueryResult::ProblemList(problems) => {
                for (index, problem) in problems.iter().enumerate() {
                    println!("{}. {problem}", index + 1);
                }
            }
            QueryResult::PromptForEntry | QueryResult::PromptAddData => {
                println!("Please run 'faultbook add' to add new entries.");
            }
            QueryResult::PromptDeleteData => {
                println!("Deletion feature is not yet implemented.");
            }
        }
        Ok(())
    }
}

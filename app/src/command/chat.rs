//! Interactive chat session against the knowledge base.
//!
//! Each input line runs through the query pipeline; problem lists offer a
//! follow-up selection for root cause and solution, and add-data intents
//! switch into the guided entry flow.

use std::io::{self, Write};

use faultbook_config::Config;
use faultbook_core::Table;
use faultbook_query::{QueryEngine, QueryResult, lookup_root_cause_and_solution};
use faultbook_store::TableStore;
use tracing::info;

use super::{collect_entries, open_table, print_report, prompt_line};

/// Strategy for the interactive chat command.
///
/// Maintains an in-memory transcript for the session; `clear` wipes it,
/// `exit`/`quit`/`q` ends the session. Nothing about the conversation is
/// persisted.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = ();

    fn execute(&self, (): Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let (store, mut table) = open_table(&config)?;
        let engine = QueryEngine::new(config.phrase_book());
        let mut transcript: Vec<String> = Vec::new();

        println!("=== faultbook ===");
        println!("Ask about known issues, or say you want to add data.");
        println!("Type 'clear' to wipe the transcript; 'exit', 'quit', or 'q' to end.\n");

        loop {
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                break;
            }
            let input = line.trim();

            if matches!(input, "exit" | "quit" | "q") {
                println!("\nSession ended. {} transcript lines.", transcript.len());
                break;
            }
            if input.is_empty() {
                continue;
            }
            if input == "clear" {
                transcript.clear();
                println!("Chat cleared successfully!");
                continue;
            }

            transcript.push(format!("you: {input}"));
            Self::handle_turn(&engine, &store, &mut table, input, &mut transcript)?;
        }

        info!("chat session ended with {} transcript lines", transcript.len());
        Ok(())
    }
}

impl ChatStrategy {
    fn handle_turn(
        engine: &QueryEngine,
        store: &TableStore,
        table: &mut Table,
        input: &str,
        transcript: &mut Vec<String>,
    ) -> anyhow::Result<()> {
        match engine.resolve(table, input) {
            QueryResult::CannedReply(reply)
            | QueryResult::NoMatch(reply)
            | QueryResult::Fallback(reply) => {
                println!("\n{reply}\n");
                transcript.push(format!("bot: {reply}"));
            }
            QueryResult::ProblemList(problems) => {
                Self::present_problems(table, &problems, transcript)?;
            }
            QueryResult::PromptForEntry => {
                println!("\nPlease provide the information to add a new data entry.\n");
                Self::entry_flow(store, table)?;
            }
            QueryResult::PromptAddData => {
                println!("\nPlease provide the information to add new data.\n");
                Self::entry_flow(store, table)?;
            }
            QueryResult::PromptDeleteData => {
                println!("\nPlease specify which entry you want to delete.");
                println!("Deletion feature is not yet implemented.\n");
            }
        }
        Ok(())
    }

    /// List matched problems and offer a root-cause/solution follow-up.
    fn present_problems(
        table: &Table,
        problems: &[String],
        transcript: &mut Vec<String>,
    ) -> anyhow::Result<()> {
        println!();
        for (index, problem) in problems.iter().enumerate() {
            println!("  {}. {problem}", index + 1);
        }
        println!();

        let choice = prompt_line("Select a problem number for root cause and solution (Enter to skip)")?;
        if choice.is_empty() {
            return Ok(());
        }

        let selected = choice
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| problems.get(i));

        let Some(problem) = selected else {
            println!("No such problem number.\n");
            return Ok(());
        };

        if let Some((root_cause, solution)) = lookup_root_cause_and_solution(table, problem) {
            println!("\nRoot Cause: {root_cause}");
            println!("Solution: {solution}\n");
            transcript.push(format!("bot: Root Cause: {root_cause}\nSolution: {solution}"));
        } else {
            println!("\nNo root cause and solution found.\n");
        }
        Ok(())
    }

    /// Guided batch entry: how many, then seven fields per entry.
    fn entry_flow(store: &TableStore, table: &mut Table) -> anyhow::Result<()> {
        let count_input = prompt_line("How many entries do you want to add? (1-10)")?;
        let count = count_input.parse::<usize>().unwrap_or(1);

        let entries = collect_entries(count)?;
        let report = store.append_entries(table, entries)?;
        print_report(&report);
        println!();
        Ok(())
    }
}

//! The ordered query resolution pipeline.
//!
//! Free text goes through a fixed sequence of stages: greeting, data-entry
//! start, keyword lookup, and only then the add/delete fallbacks. Lookup
//! running BEFORE the add/delete checks is a load-bearing contract: a query
//! that happens to contain an add-data phrase but also matches keywords
//! returns the matches, not the add prompt.

use std::collections::HashSet;

use faultbook_core::Table;
use tracing::debug;

use crate::intent::PhraseBook;
use crate::search::search_by_keyword;
use crate::tokenize::tokenize;

/// Reply when a single keyword finds nothing.
pub const NO_MATCH_REPLY: &str = "No related problems found for that keyword.";

/// Reply when no stage recognizes the input.
pub const FALLBACK_REPLY: &str = "What do you want to know about this?";

/// Outcome of resolving one user query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryResult {
    /// Canned greeting reply.
    CannedReply(String),
    /// Start the guided entry flow.
    PromptForEntry,
    /// Deduplicated problems matching the query keywords.
    ProblemList(Vec<String>),
    /// A single keyword found nothing.
    NoMatch(String),
    /// Ask the user for the data they want to add.
    PromptAddData,
    /// Ask the user which entry to delete (deletion itself is unimplemented).
    PromptDeleteData,
    /// Nothing recognized.
    Fallback(String),
}

/// Resolves free-text queries against a table.
pub struct QueryEngine {
    phrases: PhraseBook,
}

impl QueryEngine {
    #[must_use]
    pub const fn new(phrases: PhraseBook) -> Self {
        Self { phrases }
    }

    /// Engine with the built-in phrase lists.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(PhraseBook::default())
    }

    #[must_use]
    pub const fn phrases(&self) -> &PhraseBook {
        &self.phrases
    }

    /// Run `text` through the resolution pipeline.
    #[must_use]
    pub fn resolve(&self, table: &Table, text: &str) -> QueryResult {
        // Stage 1: greetings, first phrase in list order wins.
        if let Some(reply) = self.phrases.greeting_reply(text) {
            return QueryResult::CannedReply(reply.to_string());
        }

        let keywords = tokenize(text);
        debug!("query reduced to {} keywords", keywords.len());

        // Stage 2: explicit data-entry start.
        if self.phrases.is_data_entry_query(text) {
            return QueryResult::PromptForEntry;
        }

        // Stage 3: single keyword. A miss answers immediately; the add/delete
        // fallbacks are not consulted on this path.
        if let [keyword] = keywords.as_slice() {
            let problems = dedup(search_by_keyword(table, keyword));
            if problems.is_empty() {
                return QueryResult::NoMatch(NO_MATCH_REPLY.to_string());
            }
            return QueryResult::ProblemList(problems);
        }

        // Stage 4: zero or many keywords, union of per-keyword matches.
        let mut problems = Vec::new();
        for keyword in &keywords {
            problems.extend(search_by_keyword(table, keyword));
        }
        let problems = dedup(problems);
        if !problems.is_empty() {
            return QueryResult::ProblemList(problems);
        }

        // Stages 5-6: add/delete fallbacks, only after lookup came up empty.
        if self.phrases.is_add_data_query(text) {
            return QueryResult::PromptAddData;
        }
        if self.phrases.is_delete_data_query(text) {
            return QueryResult::PromptDeleteData;
        }

        QueryResult::Fallback(FALLBACK_REPLY.to_string())
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Drop duplicates, keeping first occurrences in order.
fn dedup(problems: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    problems
        .into_iter()
        .filter(|problem| seen.insert(problem.clone()))
        .collect()
}

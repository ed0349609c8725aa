#![warn(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod intent;
pub mod resolve;
pub mod search;
pub mod tokenize;

pub use intent::{Greeting, Intent, PhraseBook};
pub use resolve::{FALLBACK_REPLY, NO_MATCH_REPLY, QueryEngine, QueryResult};
pub use search::{lookup_root_cause_and_solution, search_by_keyword};
pub use tokenize::tokenize;

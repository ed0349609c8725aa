//! Phrase-based intent classification.
//!
//! Intent is decided by ordered, case-insensitive substring checks against the
//! raw input text, deliberately without any NLU. The phrase lists are plain
//! configuration data so a deployment can override them without touching code;
//! [`PhraseBook::default`] carries the built-in lists.

use serde::{Deserialize, Serialize};

/// Classified purpose of a user's free-text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A greeting, with its canned reply.
    Greeting(String),
    /// The user wants to start a guided data entry.
    DataEntryStart,
    /// The user asked to add data (fallback wording).
    AddData,
    /// The user asked to delete data. Deletion is not implemented; this only
    /// selects a stub reply.
    DeleteData,
    /// Default: treat the text as a keyword lookup.
    Lookup,
}

/// A greeting phrase and the reply it triggers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub phrase: String,
    pub reply: String,
}

/// Ordered phrase lists driving intent detection.
///
/// List order matters for greetings: the first phrase found in the input wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseBook {
    #[serde(default = "default_greetings")]
    pub greetings: Vec<Greeting>,

    #[serde(default = "default_data_entry_phrases")]
    pub data_entry: Vec<String>,

    #[serde(default = "default_add_data_phrases")]
    pub add_data: Vec<String>,

    #[serde(default = "default_delete_data_phrases")]
    pub delete_data: Vec<String>,
}

impl Default for PhraseBook {
    fn default() -> Self {
        Self {
            greetings: default_greetings(),
            data_entry: default_data_entry_phrases(),
            add_data: default_add_data_phrases(),
            delete_data: default_delete_data_phrases(),
        }
    }
}

fn default_greetings() -> Vec<Greeting> {
    [
        ("hi", "Hello! How can I assist you today?"),
        ("good morning", "Good morning! Have a nice day."),
        ("good afternoon", "Good afternoon! Have a great day."),
        ("good evening", "Good evening! Go and have snacks."),
        ("good night", "Good night! Sleep well."),
    ]
    .into_iter()
    .map(|(phrase, reply)| Greeting {
        phrase: phrase.to_string(),
        reply: reply.to_string(),
    })
    .collect()
}

fn default_data_entry_phrases() -> Vec<String> {
    [
        "do a new data entry",
        "make a new entry",
        "create a new entry",
        "want to add an entry",
        "i want to input",
        "can i add",
        "i need to do data entry",
        "new data entry",
    ]
    .into_iter()
    .map(ToString::to_string)
    .collect()
}

fn default_add_data_phrases() -> Vec<String> {
    [
        "add data",
        "i want to add",
        "please add",
        "let's add",
        "adding data",
        "i need to add",
        "can you add",
        "add new entry",
        "new entry",
        "submit data",
        "want to input",
        "enter data",
        "i would like to do data entry",
        "i would like to add",
        "i want to input data",
        "can you help me add",
        "how do i add data",
        "i need to do data entry",
        "need to add information",
        "i want to submit",
        "can i",
        "can we add",
    ]
    .into_iter()
    .map(ToString::to_string)
    .collect()
}

fn default_delete_data_phrases() -> Vec<String> {
    [
        "delete data",
        "remove entry",
        "can you delete",
        "please remove",
        "i want to delete",
        "how do i delete",
        "remove record",
    ]
    .into_iter()
    .map(ToString::to_string)
    .collect()
}

impl PhraseBook {
    /// Book with the built-in phrase lists.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Canned reply for the first greeting phrase found in `text`, if any.
    #[must_use]
    pub fn greeting_reply(&self, text: &str) -> Option<&str> {
        let lower = text.to_lowercase();
        self.greetings
            .iter()
            .find(|greeting| lower.contains(&greeting.phrase))
            .map(|greeting| greeting.reply.as_str())
    }

    /// Whether `text` asks to start a guided data entry.
    #[must_use]
    pub fn is_data_entry_query(&self, text: &str) -> bool {
        Self::contains_any(&self.data_entry, text)
    }

    /// Whether `text` asks to add data.
    #[must_use]
    pub fn is_add_data_query(&self, text: &str) -> bool {
        Self::contains_any(&self.add_data, text)
    }

    /// Whether `text` asks to delete data.
    #[must_use]
    pub fn is_delete_data_query(&self, text: &str) -> bool {
        Self::contains_any(&self.delete_data, text)
    }

    /// Classify `text` in strict priority order.
    ///
    /// Note the binding precedence for a full query is the resolve pipeline,
    /// which attempts a lookup BEFORE falling back to add/delete; this method
    /// is the pure phrase-level classification.
    #[must_use]
    pub fn classify(&self, text: &str) -> Intent {
        if let Some(reply) = self.greeting_reply(text) {
            return Intent::Greeting(reply.to_string());
        }
        if self.is_data_entry_query(text) {
            return Intent::DataEntryStart;
        }
        if self.is_add_data_query(text) {
            return Intent::AddData;
        }
        if self.is_delete_data_query(text) {
            return Intent::DeleteData;
        }
        Intent::Lookup
    }

    fn contains_any(phrases: &[String], text: &str) -> bool {
        let lower = text.to_lowercase();
        phrases.iter().any(|phrase| lower.contains(phrase.as_str()))
    }
}

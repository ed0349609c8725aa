use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("knowledge base unavailable at {path}: {source}")]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("entry {index}: required field `{field}` is empty")]
    InvalidEntry { index: usize, field: &'static str },
}

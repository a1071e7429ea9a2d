//! Error types for mushaf operations.

use thiserror::Error;

use crate::corpus::VerseKey;

/// Errors that can occur while loading a corpus or answering layout queries.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("page {0} not found")]
    PageNotFound(u16),

    #[error("verse {0} not found")]
    VerseNotFound(VerseKey),

    #[error("word {0} not found")]
    WordNotFound(u32),

    #[error("surah {0} not found")]
    SurahNotFound(u16),

    #[error("invalid word range: first id {first} exceeds last id {last}")]
    InvalidRange { first: u32, last: u32 },

    #[error("inconsistent layout data at page {page} line {line}: {detail}")]
    DataInconsistency { page: u16, line: u16, detail: String },

    #[error("invalid corpus: {0}")]
    InvalidCorpus(String),
}

pub type Result<T> = std::result::Result<T, Error>;

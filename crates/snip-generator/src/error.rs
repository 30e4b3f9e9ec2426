use std::path::PathBuf;
use thiserror::Error;

/// Errors returned while building a generator or loading word lists.
#[derive(Debug, Error)]
pub enum Error {
    #[error("charset must contain at least one character")]
    EmptyCharset,
    #[error("invalid id length {length}; ids must be 1..={max} bytes")]
    InvalidLength { length: usize, max: usize },
    #[error("{list} word list is empty")]
    EmptyWordList { list: &'static str },
    #[error("longest word pair is {length} bytes; ids are limited to {max}")]
    WordPairTooLong { length: usize, max: usize },
    #[error("failed to read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

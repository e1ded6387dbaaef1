use std::io;

/// Errors that can occur while loading a word list.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum DictionaryError {
    /// The word list could not be read.
    #[display("failed to read word list: {_0}")]
    #[from]
    Io(io::Error),
    /// A frequency table line has no count column.
    #[display("line {line}: missing frequency count")]
    MissingCount {
        /// One-based line number.
        line: usize,
    },
    /// A frequency table line has a count that is not a non-negative integer.
    #[display("line {line}: invalid frequency count {count:?}")]
    InvalidCount {
        /// One-based line number.
        line: usize,
        /// The offending column text.
        count: String,
    },
}

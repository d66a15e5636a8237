//! Error types for the nickname crate.
//!
//! Nickname generation itself cannot fail. The errors here cover loading and
//! validating replacement word lists, following the project's error handling
//! conventions with `thiserror`.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Identifies which of the two word lists an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordListKind {
    /// The adjective list, indexed by the hash remainder.
    Adjectives,
    /// The animal list, indexed by the hash quotient.
    Animals,
}

impl fmt::Display for WordListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Adjectives => f.write_str("adjectives"),
            Self::Animals => f.write_str("animals"),
        }
    }
}

/// Errors that can occur when building, parsing, or loading word lists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordListError {
    /// The word list file could not be read.
    #[error("failed to read word list file at '{path}': {message}")]
    IoError {
        /// Path to the word list file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The word list JSON is malformed or missing required fields.
    #[error("invalid word list JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The word list document version is not supported.
    #[error("unsupported word list version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the document.
        actual: u32,
    },

    /// A list contains no words.
    #[error("{list} list must contain at least one word")]
    EmptyList {
        /// The list that was empty.
        list: WordListKind,
    },

    /// A list contains more words than a 32-bit hash can address.
    #[error("{list} list contains {count} words; at most {max} are supported")]
    TooManyWords {
        /// The list that was too long.
        list: WordListKind,
        /// Number of words supplied.
        count: usize,
        /// Maximum number of words supported.
        max: u32,
    },

    /// A word contains characters that are not allowed in display names.
    #[error("invalid word in {list} list at index {index}: '{value}'")]
    InvalidWord {
        /// The list holding the invalid word.
        list: WordListKind,
        /// Index of the invalid word in the list.
        index: usize,
        /// The invalid word.
        value: String,
    },

    /// The longest possible nickname would exceed the display name limit.
    #[error("longest nickname would be {length} characters; at most {max} are allowed")]
    NicknameTooLong {
        /// Length of the longest nickname the lists can produce.
        length: usize,
        /// Maximum display name length.
        max: usize,
    },
}

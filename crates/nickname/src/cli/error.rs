//! Error types for the nickname CLI.

use thiserror::Error;

use crate::error::WordListError;

/// Errors surfaced by the CLI configuration and output flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Settings could not be loaded from the environment.
    #[error("failed to load settings: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },
    /// Reading identifiers or writing nicknames failed.
    #[error("i/o error while {action}: {message}")]
    Io {
        /// What the CLI was doing when the error occurred.
        action: &'static str,
        /// Description of the I/O error.
        message: String,
    },
    /// A nickname record could not be encoded as JSON.
    #[error("failed to encode nickname record: {message}")]
    Encode {
        /// Serializer error message.
        message: String,
    },
    /// The configured word lists could not be loaded.
    #[error("word list error: {source}")]
    WordList {
        /// Underlying word list error.
        #[from]
        #[source]
        source: WordListError,
    },
}

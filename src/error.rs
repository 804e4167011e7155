//! Error types for the wordgraph library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`WordGraphError`] enum. Lookups that can legitimately find nothing (bridge
//! words, shortest paths) return `Option` instead; the `UnknownWord` and
//! `Unreachable` variants exist for callers that want the reason.
//!
//! # Examples
//!
//! ```
//! use wordgraph::error::{Result, WordGraphError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordGraphError::invalid_input("no words in input text"))
//! }
//!
//! assert!(example_operation().is_err());
//! ```

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The main error type for wordgraph operations.
#[derive(Error, Debug)]
pub enum WordGraphError {
    /// I/O errors while reading source text or writing output.
    #[error("I/O error: {source} (path: {})", path.display())]
    Io {
        #[source]
        source: io::Error,
        path: PathBuf,
    },

    /// Analysis errors (invalid token pattern, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A queried word is not a node of the graph.
    #[error("Unknown word: \"{0}\" is not in the graph")]
    UnknownWord(String),

    /// Both words exist but no directed path connects them.
    #[error("No path from \"{from}\" to \"{to}\"")]
    Unreachable { from: String, to: String },

    /// Degenerate input, e.g. text without any words.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An operation that needs at least one node ran on an empty graph.
    #[error("Graph is empty")]
    EmptyGraph,

    /// Configuration errors.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with WordGraphError.
pub type Result<T> = std::result::Result<T, WordGraphError>;

impl WordGraphError {
    /// Wrap an I/O error together with the path it happened on.
    pub fn io<P: Into<PathBuf>>(source: io::Error, path: P) -> Self {
        WordGraphError::Io {
            source,
            path: path.into(),
        }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        WordGraphError::Analysis(msg.into())
    }

    /// Create a new unknown word error.
    pub fn unknown_word<S: Into<String>>(word: S) -> Self {
        WordGraphError::UnknownWord(word.into())
    }

    /// Create a new unreachable error.
    pub fn unreachable<S: Into<String>, T: Into<String>>(from: S, to: T) -> Self {
        WordGraphError::Unreachable {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        WordGraphError::InvalidInput(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        WordGraphError::InvalidConfig(msg.into())
    }

    /// Whether this error means "nothing to return" rather than a failure.
    pub fn is_absent(&self) -> bool {
        matches!(
            self,
            WordGraphError::UnknownWord(_) | WordGraphError::Unreachable { .. }
        )
    }
}

impl From<anyhow::Error> for WordGraphError {
    fn from(err: anyhow::Error) -> Self {
        WordGraphError::Other(format!("{err:#}"))
    }
}

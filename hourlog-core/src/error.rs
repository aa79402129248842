use std::path::PathBuf;
use thiserror::Error;

/// Input that cannot be scored or stored.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("entry '{id}' has no text")]
    MissingText { id: String },

    #[error("entry text is empty")]
    EmptyText,
}

/// Represents a non-critical issue that occurred during a query.
///
/// This is used to report problems (e.g., malformed lines, invalid input)
/// without stopping a larger query operation.
#[derive(Debug)]
pub enum QueryError {
    InvalidDate { input: String, error: String },
    FileError { path: PathBuf, error: anyhow::Error },
    InvalidEntry { path: PathBuf, line: usize, error: anyhow::Error },
}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::InvalidDate { input, error } => {
                write!(f, "Could not process '{input}': {error}")
            }
            QueryError::FileError { path, error } => {
                write!(f, "Could not process '{}': {error}", path.display())
            }
            QueryError::InvalidEntry { path, line, error } => {
                write!(f, "Skipped line {line} of '{}': {error}", path.display())
            }
        }
    }
}

//! Error types for SetForge

use thiserror::Error;

use crate::domain::ItemId;

/// Main error type for SetForge input handling.
///
/// These are input-contract violations. Search outcomes such as an
/// unreachable target are not errors and never appear here.
#[derive(Debug, Error)]
pub enum SetForgeError {
    /// Malformed line in the instance text
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Two problems share an identifier
    #[error("Duplicate problem id: {0}")]
    DuplicateItem(ItemId),

    /// The preference list names a topic twice
    #[error("Duplicate topic in preference list: {0}")]
    DuplicateTopic(String),

    /// Reading the instance failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SetForgeError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        SetForgeError::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result type alias for SetForge operations
pub type Result<T> = std::result::Result<T, SetForgeError>;

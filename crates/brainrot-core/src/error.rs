//! Error types for brainrot-core

use thiserror::Error;

/// Domain error raised by collection operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Base '{0}' not found")]
    BaseNotFound(String),

    #[error("Brainrot '{id}' not found in base '{base}'")]
    InstanceNotFound { base: String, id: String },

    #[error("No other base to move into besides '{0}'")]
    NoOtherBase(String),

    #[error("Move target {choice} is out of range ({available} bases available)")]
    NoSuchTarget { choice: usize, available: usize },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for collection store operations.

use crate::document::DocumentError;
use thiserror::Error;

/// Errors that can occur during collection store operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The bases document could not be read or written.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// A base or instance the operation needs does not exist.
    #[error(transparent)]
    Collection(#[from] brainrot_core::Error),
}

impl Error {
    /// The domain error, if this is one
    pub fn as_collection(&self) -> Option<&brainrot_core::Error> {
        match self {
            Error::Collection(e) => Some(e),
            Error::Document(_) => None,
        }
    }
}

/// Result type for collection store operations.
pub type Result<T> = std::result::Result<T, Error>;

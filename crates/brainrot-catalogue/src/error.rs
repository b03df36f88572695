//! Error types for brainrot-catalogue

use brainrot_store::DocumentError;
use thiserror::Error;

/// Catalogue loading error type
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("No {kind} named '{name}' in the catalogue")]
    NotFound { kind: &'static str, name: String },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

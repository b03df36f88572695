//! Error types for brainrot-app

use crate::router::RouteError;
use brainrot_store::DocumentError;
use thiserror::Error;

/// Anything that stops an action
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Catalogue(#[from] brainrot_catalogue::Error),

    #[error(transparent)]
    Store(#[from] brainrot_store::Error),

    #[error(transparent)]
    Route(#[from] RouteError),
}

impl AppError {
    /// Heading of the dialog reporting this error
    pub fn heading(&self) -> &'static str {
        if matches!(self.document(), Some(DocumentError::Parse { .. })) {
            return "JSON Error";
        }
        match self {
            AppError::Store(e) => match e.as_collection() {
                Some(brainrot_core::Error::NoOtherBase(_)) => "No other base",
                _ => "Error",
            },
            _ => "Error",
        }
    }

    fn document(&self) -> Option<&DocumentError> {
        match self {
            AppError::Catalogue(brainrot_catalogue::Error::Document(e))
            | AppError::Store(brainrot_store::Error::Document(e)) => Some(e),
            _ => None,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, AppError>;

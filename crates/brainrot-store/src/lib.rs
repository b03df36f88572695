//! Brainrot Store - JSON document storage
//!
//! Provides:
//! - Strict reading of JSON array documents (`document`)
//! - Atomic whole-file writes (temporary file, then rename)
//! - The collection store: read-modify-write over the bases document

pub mod document;
mod error;
mod queries;
mod store;

pub use document::DocumentError;
pub use error::{Error, Result};
pub use queries::sort_by_income;
pub use store::CollectionStore;

/// Default file name of the bases document
pub const BASES_FILE: &str = "Bases.json";

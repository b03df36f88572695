//! Brainrot Catalogue - reference data loader
//!
//! Loads the read-only reference documents:
//! - The brainrot catalogue (`BrainrotsCatalogue.json`)
//! - Traits (`Traits.json`)
//! - Mutations (`Mutations.json`)
//!
//! Every call reads the document again; nothing is cached.

mod error;
mod loader;

pub use error::{Error, Result};
pub use loader::{Catalogue, CataloguePaths, CATALOGUE_FILE, MUTATIONS_FILE, TRAITS_FILE};

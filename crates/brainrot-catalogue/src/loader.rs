//! JSON catalogue loader

use crate::error::{Error, Result};
use brainrot_core::{CatalogueCreature, Mutation, Trait};
use brainrot_store::document;
use std::path::{Path, PathBuf};

/// Default file name of the brainrot catalogue
pub const CATALOGUE_FILE: &str = "BrainrotsCatalogue.json";
/// Default file name of the traits list
pub const TRAITS_FILE: &str = "Traits.json";
/// Default file name of the mutations list
pub const MUTATIONS_FILE: &str = "Mutations.json";

/// Locations of the three reference documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CataloguePaths {
    pub creatures: PathBuf,
    pub traits: PathBuf,
    pub mutations: PathBuf,
}

impl CataloguePaths {
    /// Default file names inside a data directory
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            creatures: dir.join(CATALOGUE_FILE),
            traits: dir.join(TRAITS_FILE),
            mutations: dir.join(MUTATIONS_FILE),
        }
    }
}

/// Read-only access to the reference documents
#[derive(Debug, Clone)]
pub struct Catalogue {
    paths: CataloguePaths,
}

impl Catalogue {
    /// Create a catalogue reading from the given documents
    pub fn new(paths: CataloguePaths) -> Self {
        Self { paths }
    }

    /// Where the documents are read from
    pub fn paths(&self) -> &CataloguePaths {
        &self.paths
    }

    /// Load every creature of the catalogue
    pub fn load_catalogue(&self) -> Result<Vec<CatalogueCreature>> {
        Ok(document::read_array(&self.paths.creatures)?)
    }

    /// Load every trait
    pub fn load_traits(&self) -> Result<Vec<Trait>> {
        Ok(document::read_array(&self.paths.traits)?)
    }

    /// Load every mutation
    pub fn load_mutations(&self) -> Result<Vec<Mutation>> {
        Ok(document::read_array(&self.paths.mutations)?)
    }

    /// Find a creature by name or by id
    pub fn find_creature(&self, name: &str) -> Result<CatalogueCreature> {
        self.load_catalogue()?
            .into_iter()
            .find(|c| c.profile.name == name || c.id.as_deref() == Some(name))
            .ok_or_else(|| not_found("brainrot", name))
    }

    /// Find several traits by name, in the order given
    pub fn find_traits<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<Trait>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let traits = self.load_traits()?;
        names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                traits
                    .iter()
                    .find(|t| t.name == name)
                    .cloned()
                    .ok_or_else(|| not_found("trait", name))
            })
            .collect()
    }

    /// Find a mutation by name
    pub fn find_mutation(&self, name: &str) -> Result<Mutation> {
        self.load_mutations()?
            .into_iter()
            .find(|m| m.name == name)
            .ok_or_else(|| not_found("mutation", name))
    }
}

fn not_found(kind: &'static str, name: &str) -> Error {
    tracing::debug!(kind, name, "catalogue lookup failed");
    Error::NotFound {
        kind,
        name: name.to_string(),
    }
}

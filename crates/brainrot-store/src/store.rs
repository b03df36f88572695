//! Collection store over the bases document.

use crate::document;
use crate::error::Result;
use brainrot_core::{
    Base, CatalogueCreature, Collection, CreatureInstance, DeleteOutcome, MovePlan, Mutation,
    Trait,
};
use std::path::{Path, PathBuf};

/// Read-modify-write access to the user's collection of bases.
///
/// Nothing is cached: each operation loads the whole document, works on the
/// loaded copy and, if it changes anything, writes the whole document back.
/// Operations that fail write nothing.
#[derive(Debug, Clone)]
pub struct CollectionStore {
    path: PathBuf,
}

impl CollectionStore {
    /// Create a store backed by the given bases document.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the bases document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the collection, failing if the document is missing or malformed.
    pub fn load(&self) -> Result<Collection> {
        let bases: Vec<Base> = document::read_array(&self.path)?;
        Ok(Collection::from(bases))
    }

    /// Load the collection, starting over from empty if the document is
    /// missing or malformed.
    fn load_or_empty(&self) -> Result<Collection> {
        match self.load() {
            Ok(collection) => Ok(collection),
            Err(crate::Error::Document(e)) if e.is_missing_or_corrupt() => {
                tracing::warn!(error = %e, "bases document unusable, starting from an empty collection");
                Ok(Collection::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Write the whole collection back.
    pub fn save(&self, collection: &Collection) -> Result<()> {
        document::write_pretty(&self.path, collection)?;
        Ok(())
    }

    /// All bases, in document order.
    pub fn list_bases(&self) -> Result<Vec<Base>> {
        Ok(self.load()?.into_bases())
    }

    /// The first base with the given name.
    pub fn find_base(&self, name: &str) -> Result<Base> {
        let collection = self.load()?;
        collection
            .find_base(name)
            .cloned()
            .ok_or_else(|| brainrot_core::Error::BaseNotFound(name.to_string()).into())
    }

    /// Append a new empty base.
    ///
    /// Returns `false` without touching the document when the name is blank.
    pub fn add_base(&self, name: &str) -> Result<bool> {
        if name.trim().is_empty() {
            return Ok(false);
        }

        let mut collection = self.load_or_empty()?;
        collection.add_base(name);
        self.save(&collection)?;

        tracing::info!(base = name, "base added");
        Ok(true)
    }

    /// Rename the first base called `old`, updating its instances.
    ///
    /// A blank new name is ignored. An unknown `old` name rewrites the
    /// document unchanged and returns `false`.
    pub fn rename_base(&self, old: &str, new: &str) -> Result<bool> {
        if new.trim().is_empty() {
            return Ok(false);
        }

        let mut collection = self.load()?;
        let renamed = collection.rename_base(old, new);
        self.save(&collection)?;

        if renamed {
            tracing::info!(from = old, to = new, "base renamed");
        }
        Ok(renamed)
    }

    /// Delete every base called `name` along with its instances.
    pub fn delete_base(&self, name: &str) -> Result<usize> {
        let mut collection = self.load()?;
        let removed = collection.delete_base(name);
        self.save(&collection)?;

        tracing::info!(base = name, removed, "base deleted");
        Ok(removed)
    }

    /// Copy a catalogue creature into a base with a mutation and traits.
    pub fn add_creature_instance(
        &self,
        base_name: &str,
        creature: &CatalogueCreature,
        mutation: Mutation,
        traits: Vec<Trait>,
    ) -> Result<CreatureInstance> {
        let mut collection = self.load()?;
        let instance = collection
            .add_instance(base_name, creature, mutation, traits)?
            .clone();
        self.save(&collection)?;

        tracing::info!(base = base_name, id = %instance.id, "brainrot added");
        Ok(instance)
    }

    /// Delete every instance with the given id from a base.
    ///
    /// `NoChange` leaves the document untouched.
    pub fn delete_creature_instance(&self, base_name: &str, id: &str) -> Result<DeleteOutcome> {
        let mut collection = self.load()?;
        let outcome = collection.delete_instance(base_name, id)?;

        match outcome {
            DeleteOutcome::Deleted(count) => {
                self.save(&collection)?;
                tracing::info!(base = base_name, id, count, "brainrot deleted");
            }
            DeleteOutcome::NoChange => {
                tracing::warn!(base = base_name, id, "no brainrot with this id");
            }
        }
        Ok(outcome)
    }

    /// Validate a move and list the bases it could go to.
    pub fn move_candidates(&self, base_name: &str, id: &str) -> Result<MovePlan> {
        Ok(self.load()?.plan_move(base_name, id)?)
    }

    /// Transfer an instance to the `choice`-th entry of `MovePlan::targets`.
    pub fn move_creature_instance(
        &self,
        base_name: &str,
        id: &str,
        choice: usize,
    ) -> Result<CreatureInstance> {
        let mut collection = self.load()?;
        let instance = collection.move_instance(base_name, id, choice)?.clone();
        self.save(&collection)?;

        tracing::info!(from = base_name, to = %instance.base_name, id, "brainrot moved");
        Ok(instance)
    }
}

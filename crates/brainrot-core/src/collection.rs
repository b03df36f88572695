//! In-memory operations on the user's collection of bases
//!
//! Every operation here works on a loaded `Collection`; the store is
//! responsible for loading it beforehand and writing it back afterwards.
//! Base names are matched exactly and are unique only by convention, so
//! lookups take the first match.

use crate::error::{Error, Result};
use crate::model::{Base, CatalogueCreature, CreatureInstance, Mutation, Trait};
use serde::{Deserialize, Serialize};

/// The ordered list of bases; one document on disk
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    bases: Vec<Base>,
}

/// Result of deleting creature instances by id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// This many instances were removed
    Deleted(usize),
    /// No instance had that id; nothing changed
    NoChange,
}

/// A validated move, before the target base is chosen
#[derive(Debug, Clone, PartialEq)]
pub struct MovePlan {
    /// The instance that would move
    pub instance: CreatureInstance,
    /// Names of every base other than the source, in collection order
    pub targets: Vec<String>,
}

impl Collection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// All bases in order
    pub fn bases(&self) -> &[Base] {
        &self.bases
    }

    /// Consume the collection, returning its bases
    pub fn into_bases(self) -> Vec<Base> {
        self.bases
    }

    /// Number of bases
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    /// Check if there are no bases
    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    /// Find the first base with the given name
    pub fn find_base(&self, name: &str) -> Option<&Base> {
        self.bases.iter().find(|b| b.name == name)
    }

    fn find_base_mut(&mut self, name: &str) -> Result<&mut Base> {
        self.bases
            .iter_mut()
            .find(|b| b.name == name)
            .ok_or_else(|| Error::BaseNotFound(name.to_string()))
    }

    /// Append a new empty base
    ///
    /// Blank names are ignored and return `false`. Names already in use are
    /// accepted.
    pub fn add_base(&mut self, name: &str) -> bool {
        if name.trim().is_empty() {
            return false;
        }
        self.bases.push(Base::new(name));
        true
    }

    /// Rename the first base called `old` and update its instances
    ///
    /// Returns `false` when `new` is blank or no base is called `old`.
    pub fn rename_base(&mut self, old: &str, new: &str) -> bool {
        if new.trim().is_empty() {
            return false;
        }
        let Some(base) = self.bases.iter_mut().find(|b| b.name == old) else {
            return false;
        };

        for instance in &mut base.brainrots {
            instance.base_name = new.to_string();
        }
        base.name = new.to_string();
        true
    }

    /// Remove every base called `name`, returning how many were removed
    pub fn delete_base(&mut self, name: &str) -> usize {
        let before = self.bases.len();
        self.bases.retain(|b| b.name != name);
        before - self.bases.len()
    }

    /// Copy a catalogue creature into a base
    pub fn add_instance(
        &mut self,
        base_name: &str,
        creature: &CatalogueCreature,
        mutation: Mutation,
        traits: Vec<Trait>,
    ) -> Result<&CreatureInstance> {
        let base = self.find_base_mut(base_name)?;
        base.brainrots
            .push(creature.instantiate(mutation, traits, base_name));
        Ok(&base.brainrots[base.brainrots.len() - 1])
    }

    /// Remove every instance with the given id from a base
    pub fn delete_instance(&mut self, base_name: &str, id: &str) -> Result<DeleteOutcome> {
        let base = self.find_base_mut(base_name)?;
        let before = base.brainrots.len();
        base.brainrots.retain(|b| b.id != id);
        let removed = before - base.brainrots.len();

        Ok(if removed == 0 {
            DeleteOutcome::NoChange
        } else {
            DeleteOutcome::Deleted(removed)
        })
    }

    /// Check that an instance can be moved out of its base
    pub fn plan_move(&self, base_name: &str, id: &str) -> Result<MovePlan> {
        let base = self
            .find_base(base_name)
            .ok_or_else(|| Error::BaseNotFound(base_name.to_string()))?;
        let instance = base.instance(id).ok_or_else(|| Error::InstanceNotFound {
            base: base_name.to_string(),
            id: id.to_string(),
        })?;

        let targets: Vec<String> = self
            .bases
            .iter()
            .filter(|b| b.name != base_name)
            .map(|b| b.name.clone())
            .collect();
        if targets.is_empty() {
            return Err(Error::NoOtherBase(base_name.to_string()));
        }

        Ok(MovePlan {
            instance: instance.clone(),
            targets,
        })
    }

    /// Transfer an instance to one of the targets listed by `plan_move`
    ///
    /// `choice` indexes `MovePlan::targets`, so bases sharing a name are told
    /// apart by position. Only the first instance with the id moves.
    pub fn move_instance(
        &mut self,
        base_name: &str,
        id: &str,
        choice: usize,
    ) -> Result<&CreatureInstance> {
        let plan = self.plan_move(base_name, id)?;
        let target = self
            .bases
            .iter()
            .enumerate()
            .filter(|(_, b)| b.name != base_name)
            .map(|(i, _)| i)
            .nth(choice)
            .ok_or(Error::NoSuchTarget {
                choice,
                available: plan.targets.len(),
            })?;

        let source = self.find_base_mut(base_name)?;
        let position = source
            .brainrots
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| Error::InstanceNotFound {
                base: base_name.to_string(),
                id: id.to_string(),
            })?;
        let mut instance = source.brainrots.remove(position);

        let destination = &mut self.bases[target];
        instance.base_name = destination.name.clone();
        destination.brainrots.push(instance);
        Ok(&destination.brainrots[destination.brainrots.len() - 1])
    }
}

impl From<Vec<Base>> for Collection {
    fn from(bases: Vec<Base>) -> Self {
        Self { bases }
    }
}

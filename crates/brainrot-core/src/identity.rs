//! Identity of creature instances

use crate::model::{CatalogueCreature, Mutation, Trait};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a creature instance inside its base
///
/// Derived from the source creature, its mutation and its traits. Two
/// instances with the same combination share an id; uniqueness is a
/// convention, not something this type enforces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstanceId(pub String);

impl InstanceId {
    /// Wrap an existing id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive the id for a creature with the given mutation and traits
    ///
    /// `<creature>-<mutation>[-<trait>-<trait>...]`, each part lowercased with
    /// spaces removed. The creature part uses `Id` and falls back to `Name`.
    pub fn derive(creature: &CatalogueCreature, mutation: &Mutation, traits: &[Trait]) -> Self {
        let source = creature.id.as_deref().unwrap_or(&creature.profile.name);
        let mut id = format!(
            "{}-{}",
            normalize_id_part(source),
            normalize_id_part(&mutation.name)
        );

        let trait_part = traits
            .iter()
            .map(|t| normalize_id_part(&t.name))
            .collect::<Vec<_>>()
            .join("-");
        if !trait_part.is_empty() {
            id.push('-');
            id.push_str(&trait_part);
        }

        Self(id)
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for InstanceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for InstanceId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<str> for InstanceId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for InstanceId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Lowercase a name and strip its spaces
pub fn normalize_id_part(part: &str) -> String {
    part.replace(' ', "").to_lowercase()
}

//! Records stored in the catalogue and collection documents
//!
//! Field names on disk are PascalCase. Fields this crate does not know about
//! are kept in `extra` so that copying a catalogue creature into a base, or
//! rewriting the collection, never drops data.

use crate::identity::InstanceId;
use crate::income::compute_effective_income;
use crate::serde_helpers::{is_false, is_null, lenient_amount, null_as_default};
use serde::{Deserialize, Serialize};

/// Unknown fields carried through unchanged
pub type Extra = serde_json::Map<String, serde_json::Value>;

/// A trait: an income modifier with an icon and a description
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Trait {
    /// Display name, unique within the traits file
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Income multiplier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
    /// Image file name under the traits image folder
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub image: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Trait {
    /// Create a trait with a multiplier
    pub fn new(name: impl Into<String>, multiplier: f64) -> Self {
        Self {
            name: name.into(),
            multiplier: Some(multiplier),
            ..Default::default()
        }
    }
}

/// A mutation: a single income modifier applied to a creature
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Mutation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Mutation {
    /// Create a mutation with a multiplier
    pub fn new(name: impl Into<String>, multiplier: f64) -> Self {
        Self {
            name: name.into(),
            multiplier: Some(multiplier),
            extra: Extra::new(),
        }
    }
}

/// How a creature can be obtained
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Acquisition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steal: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Acquisition {
    /// Whether nothing at all is recorded
    pub fn is_empty(&self) -> bool {
        self.purchase.is_none()
            && self.steal.is_none()
            && self.strategy.is_none()
            && self.extra.is_empty()
    }
}

/// Everything a creature carries apart from its id
///
/// Shared by catalogue entries and the instances copied from them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatureProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub rarity: String,
    /// Purchase price
    #[serde(default, deserialize_with = "lenient_amount")]
    pub cost: f64,
    /// Income per second before mutation and traits
    #[serde(default, deserialize_with = "lenient_amount")]
    pub base_income_per_second: f64,
    #[serde(default, skip_serializing_if = "is_null")]
    pub spawn_rate: serde_json::Value,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_false")]
    pub secret: bool,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub controversy: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub event: String,
    /// Release date as `YYYY-MM-DD`, or empty
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub added_at: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Acquisition::is_empty")]
    pub acquisition: Acquisition,
    /// Image file name under the creatures image folder
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub image: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// A creature from the read-only catalogue
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CatalogueCreature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub profile: CreatureProfile,
}

impl CatalogueCreature {
    /// Create a catalogue entry with only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            profile: CreatureProfile {
                name: name.into(),
                ..Default::default()
            },
        }
    }

    /// Copy this creature into a base with the chosen mutation and traits
    pub fn instantiate(
        &self,
        mutation: Mutation,
        traits: Vec<Trait>,
        base_name: impl Into<String>,
    ) -> CreatureInstance {
        CreatureInstance {
            id: InstanceId::derive(self, &mutation, &traits),
            profile: self.profile.clone(),
            mutation: Some(mutation),
            traits,
            base_name: base_name.into(),
        }
    }
}

/// A user-owned copy of a catalogue creature living in a base
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreatureInstance {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: InstanceId,
    #[serde(flatten)]
    pub profile: CreatureProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mutation: Option<Mutation>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub traits: Vec<Trait>,
    /// Name of the owning base
    #[serde(default, deserialize_with = "null_as_default")]
    pub base_name: String,
}

impl CreatureInstance {
    /// Display name of the creature
    pub fn name(&self) -> &str {
        &self.profile.name
    }

    /// Income per second after mutation and traits
    pub fn effective_income(&self) -> f64 {
        compute_effective_income(
            self.profile.base_income_per_second,
            self.mutation.as_ref(),
            &self.traits,
        )
    }
}

/// A named container of creature instances
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Base {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub brainrots: Vec<CreatureInstance>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Base {
    /// Create an empty base
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            brainrots: Vec::new(),
            extra: Extra::new(),
        }
    }

    /// Sum of the effective incomes of every instance
    pub fn total_income(&self) -> f64 {
        self.brainrots.iter().map(CreatureInstance::effective_income).sum()
    }

    /// Find the first instance with the given id
    pub fn instance(&self, id: &str) -> Option<&CreatureInstance> {
        self.brainrots.iter().find(|b| b.id == id)
    }
}

//! Brainrot Core - data model and collection logic
//!
//! This crate holds everything that does not touch the disk:
//! - Reference records (`Trait`, `Mutation`, `CatalogueCreature`)
//! - The user's `Collection` of `Base`s and their `CreatureInstance`s
//! - Deterministic instance identifiers
//! - The income calculator and money formatting
//!
//! Persistence lives in `brainrot-store`, catalogue loading in
//! `brainrot-catalogue`.

mod collection;
mod error;
mod identity;
pub mod income;
mod model;
pub mod money;
mod serde_helpers;

pub use collection::{Collection, DeleteOutcome, MovePlan};
pub use error::{Error, Result};
pub use identity::{normalize_id_part, InstanceId};
pub use income::{compute_effective_income, effective_multiplier};
pub use model::{
    Acquisition, Base, CatalogueCreature, CreatureInstance, CreatureProfile, Extra, Mutation,
    Trait,
};
pub use money::{format_money, format_money_str, format_money_value};

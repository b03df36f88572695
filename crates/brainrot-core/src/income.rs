//! Income calculator
//!
//! Mutation and trait multipliers combine additively above a baseline of 1:
//! each applied effect contributes `multiplier - 1`. A single x2 mutation
//! with a single x3 trait gives x4, not x6.

use crate::model::{Mutation, Trait};

/// Combined multiplier of a mutation and a set of traits
///
/// Effects without a multiplier are ignored. With no effects the result is
/// 1.0. Multipliers below 1 are not clamped, so the result can drop below 1
/// or go negative.
pub fn effective_multiplier(mutation: Option<&Mutation>, traits: &[Trait]) -> f64 {
    let multipliers: Vec<f64> = mutation
        .and_then(|m| m.multiplier)
        .into_iter()
        .chain(traits.iter().filter_map(|t| t.multiplier))
        .collect();

    if multipliers.is_empty() {
        return 1.0;
    }

    let count = multipliers.len() as f64;
    multipliers.iter().sum::<f64>() - (count - 1.0)
}

/// Income per second after applying a mutation and traits
pub fn compute_effective_income(base_income: f64, mutation: Option<&Mutation>, traits: &[Trait]) -> f64 {
    base_income * effective_multiplier(mutation, traits)
}

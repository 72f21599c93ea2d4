//! Per-actor acceptance odds.
//!
//! Odds are data rather than closures so catalogues can be loaded from JSON
//! and compared in tests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use isle_actor::{Actor, AgeClass};

/// An actor attribute a [`ChanceStrategy::Predicate`] can test.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "trait", rename_all = "snake_case")]
pub enum Trait {
    Age { class: AgeClass },
    SociallyAnxious,
    Pessimistic,
    /// Every listed trait holds.
    All { of: Vec<Trait> },
}

impl Trait {
    pub fn holds(&self, actor: &dyn Actor) -> bool {
        match self {
            Trait::Age { class } => actor.age() == *class,
            Trait::SociallyAnxious => actor.personality().socially_anxious,
            Trait::Pessimistic => actor.personality().pessimistic,
            Trait::All { of } => of.iter().all(|t| t.holds(actor)),
        }
    }
}

/// How likely an actor is to accept an activity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChanceStrategy {
    Constant { chance: f64 },
    Predicate { when: Trait, chance: f64, otherwise: f64 },
    /// Per-name odds; names match ignoring case.
    Table { entries: BTreeMap<String, f64>, otherwise: f64 },
}

impl ChanceStrategy {
    pub fn chance_for(&self, actor: &dyn Actor) -> f64 {
        match self {
            ChanceStrategy::Constant { chance } => *chance,
            ChanceStrategy::Predicate { when, chance, otherwise } => {
                if when.holds(actor) { *chance } else { *otherwise }
            }
            ChanceStrategy::Table { entries, otherwise } => entries
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(actor.name()))
                .map_or(*otherwise, |(_, chance)| *chance),
        }
    }

    /// One named actor gets `chance`, everyone else `otherwise`.
    pub fn for_name(name: &str, chance: f64, otherwise: f64) -> Self {
        ChanceStrategy::Table {
            entries: BTreeMap::from([(name.to_string(), chance)]),
            otherwise,
        }
    }

    /// Every probability this strategy can yield.
    pub(crate) fn probabilities(&self) -> Vec<f64> {
        match self {
            ChanceStrategy::Constant { chance } => vec![*chance],
            ChanceStrategy::Predicate { chance, otherwise, .. } => vec![*chance, *otherwise],
            ChanceStrategy::Table { entries, otherwise } => {
                entries.values().copied().chain([*otherwise]).collect()
            }
        }
    }
}

//! `ActivityDefinition`: an immutable placement template.

use serde::{Deserialize, Serialize};

use isle_actor::{Actor, AnimationCatalog};
use isle_core::{ActorId, ClockTime, Facing, SessionRng, Tile};

use crate::{AnimationLog, Assignment, ChanceStrategy, UsedPoints};

/// Acceptance multiplier when an actor would repeat last slot's animation.
const REPEAT_DAMPING: f64 = 0.5;

fn certain() -> f64 {
    1.0
}

/// A family of interchangeable points and the rules for using them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityDefinition {
    pub name: String,
    pub points: Vec<Tile>,
    #[serde(default = "certain")]
    pub base_chance: f64,
    /// Per-actor odds; replaces `base_chance` when set.
    #[serde(default)]
    pub chance: Option<ChanceStrategy>,
    #[serde(default)]
    pub animation: Option<String>,
    /// Skip actors who cannot perform `animation`.
    #[serde(default)]
    pub animation_required: bool,
    #[serde(default)]
    pub dialogue_key: Option<String>,
    /// Defaults to the event's home map.
    #[serde(default)]
    pub map: Option<String>,
    #[serde(default)]
    pub facing: Option<Facing>,
}

/// Shared inputs of one timeslot's `try_assign` calls.
#[derive(Clone, Copy, Debug)]
pub struct AssignContext<'a> {
    pub time:       ClockTime,
    pub home_map:   &'a str,
    pub used:       &'a UsedPoints,
    /// Animations of the previous timeslot.
    pub previous:   &'a AnimationLog,
    pub animations: &'a AnimationCatalog,
}

impl ActivityDefinition {
    pub fn new(name: impl Into<String>, points: Vec<Tile>) -> Self {
        Self {
            name: name.into(),
            points,
            base_chance: 1.0,
            chance: None,
            animation: None,
            animation_required: false,
            dialogue_key: None,
            map: None,
            facing: None,
        }
    }

    pub fn with_base_chance(mut self, chance: f64) -> Self {
        self.base_chance = chance;
        self
    }

    pub fn with_chance(mut self, chance: ChanceStrategy) -> Self {
        self.chance = Some(chance);
        self
    }

    pub fn with_animation(mut self, animation: impl Into<String>, required: bool) -> Self {
        self.animation = Some(animation.into());
        self.animation_required = required;
        self
    }

    pub fn with_dialogue(mut self, key: impl Into<String>) -> Self {
        self.dialogue_key = Some(key.into());
        self
    }

    pub fn on_map(mut self, map: impl Into<String>) -> Self {
        self.map = Some(map.into());
        self
    }

    pub fn facing(mut self, facing: Facing) -> Self {
        self.facing = Some(facing);
        self
    }

    /// `false` when the required animation is missing for `actor_name`.
    pub fn eligible(&self, actor_name: &str, animations: &AnimationCatalog) -> bool {
        match (&self.animation, self.animation_required) {
            (Some(animation), true) => animations.has(actor_name, animation),
            _ => true,
        }
    }

    /// Probability `actor` accepts.  An override wins outright; otherwise a
    /// repeat of last slot's animation halves the odds.
    pub fn acceptance_chance(
        &self,
        id: ActorId,
        actor: &dyn Actor,
        previous: &AnimationLog,
        chance_override: Option<f64>,
    ) -> f64 {
        if let Some(forced) = chance_override {
            return forced;
        }
        let chance = self
            .chance
            .as_ref()
            .map_or(self.base_chance, |c| c.chance_for(actor));
        let repeating = self
            .animation
            .as_deref()
            .is_some_and(|a| previous.get(id) == Some(a));
        if repeating { chance * REPEAT_DAMPING } else { chance }
    }

    /// Try to place `actor` at one of this definition's free points.
    ///
    /// Ineligible actors and exhausted point sets fail without drawing from
    /// `rng`.  Otherwise one free point is drawn uniformly and kept iff a
    /// uniform roll falls below the acceptance chance.
    pub fn try_assign(
        &self,
        rng: &mut SessionRng,
        id: ActorId,
        actor: &dyn Actor,
        ctx: &AssignContext<'_>,
        chance_override: Option<f64>,
    ) -> Option<Assignment> {
        if !self.eligible(actor.name(), ctx.animations) {
            return None;
        }
        let free: Vec<Tile> = self
            .points
            .iter()
            .copied()
            .filter(|t| !ctx.used.contains(*t))
            .collect();
        let tile = *rng.choose(&free)?;

        let chance = self.acceptance_chance(id, actor, ctx.previous, chance_override);
        if rng.random::<f64>() >= chance {
            return None;
        }

        Some(Assignment {
            activity: self.name.clone(),
            time: ctx.time,
            map: self.map.clone().unwrap_or_else(|| ctx.home_map.to_string()),
            tile,
            facing: self.facing.unwrap_or_default(),
            animation: self.animation.clone(),
            dialogue_key: self.dialogue_key.clone(),
        })
    }

    /// Every probability this definition can yield, for validation.
    pub(crate) fn probabilities(&self) -> Vec<f64> {
        let mut out = vec![self.base_chance];
        if let Some(chance) = &self.chance {
            out.extend(chance.probabilities());
        }
        out
    }
}

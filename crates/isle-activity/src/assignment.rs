//! Per-timeslot placement records.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use isle_core::{ActorId, ClockTime, Facing, Tile};

// ── Assignment ────────────────────────────────────────────────────────────────

/// One actor placed at one point for one timeslot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// Name of the activity definition that produced this placement.
    pub activity:     String,
    pub time:         ClockTime,
    pub map:          String,
    pub tile:         Tile,
    pub facing:       Facing,
    pub animation:    Option<String>,
    pub dialogue_key: Option<String>,
}

impl Assignment {
    /// Render as one waypoint of a raw schedule string:
    /// `<time> <map> <x> <y> <facing> [<animation>] ["<dialogue>"]`.
    pub fn waypoint(&self) -> String {
        let mut out = format!(
            "{} {} {} {} {}",
            self.time,
            self.map,
            self.tile.x,
            self.tile.y,
            self.facing.digit()
        );
        if let Some(animation) = &self.animation {
            out.push(' ');
            out.push_str(animation);
        }
        if let Some(key) = &self.dialogue_key {
            out.push_str(" \"");
            out.push_str(key);
            out.push('"');
        }
        out
    }

    /// Whether `other` puts the actor in the same spot doing the same thing.
    pub fn same_spot(&self, other: &Assignment) -> bool {
        self.map == other.map
            && self.tile == other.tile
            && self.facing == other.facing
            && self.animation == other.animation
    }
}

// ── UsedPoints ────────────────────────────────────────────────────────────────

/// Tiles claimed in the current timeslot.
///
/// Not keyed by map: candidate sets of different maps do not overlap in
/// practice.
#[derive(Clone, Debug, Default)]
pub struct UsedPoints(FxHashSet<Tile>);

impl UsedPoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, tile: Tile) -> bool {
        self.0.contains(&tile)
    }

    /// Returns `false` if the tile was already claimed.
    pub fn claim(&mut self, tile: Tile) -> bool {
        self.0.insert(tile)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ── AnimationLog ──────────────────────────────────────────────────────────────

/// Animation each actor took on in a timeslot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnimationLog(BTreeMap<ActorId, String>);

impl AnimationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, actor: ActorId) -> Option<&str> {
        self.0.get(&actor).map(String::as_str)
    }

    pub fn record(&mut self, actor: ActorId, animation: impl Into<String>) {
        self.0.insert(actor, animation.into());
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &str)> + '_ {
        self.0.iter().map(|(id, a)| (*id, a.as_str()))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

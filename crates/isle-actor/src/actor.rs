//! The `Actor` trait: the engine's only view of a host character.

use serde::{Deserialize, Serialize};

use isle_core::{ResolvedSchedule, Tile};

/// Coarse age bracket.  The host encodes these as 0 / 1 / 2.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeClass {
    #[default]
    Adult,
    Teen,
    Child,
}

impl AgeClass {
    pub fn from_code(code: u8) -> Option<AgeClass> {
        match code {
            0 => Some(AgeClass::Adult),
            1 => Some(AgeClass::Teen),
            2 => Some(AgeClass::Child),
            _ => None,
        }
    }
}

/// The two personality flags activity chances can key on.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Personality {
    pub socially_anxious: bool,
    pub pessimistic: bool,
}

/// An actor's registered home map and tile.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Home {
    pub map: String,
    pub tile: Tile,
}

impl Home {
    pub fn new(map: impl Into<String>, tile: Tile) -> Self {
        Self { map: map.into(), tile }
    }
}

/// Read/write capability over a host-owned character.
///
/// Only [`has_schedule_entry`][Self::has_schedule_entry] and
/// [`is_invisible`][Self::is_invisible] have defaults.
pub trait Actor {
    /// Stable display name; also the prefix of its animation keys.
    fn name(&self) -> &str;

    fn age(&self) -> AgeClass;

    fn personality(&self) -> Personality;

    fn is_married(&self) -> bool;

    /// Friendship score with the player for the current date.
    fn friendship_points(&self) -> u32;

    /// Raw entry from the actor's named schedule table.
    fn schedule_entry(&self, key: &str) -> Option<&str>;

    fn has_schedule_entry(&self, key: &str) -> bool {
        self.schedule_entry(key).is_some()
    }

    /// Map the actor is currently on.
    fn current_location(&self) -> &str;

    fn default_home(&self) -> Home;

    fn set_default_home(&mut self, home: Home);

    /// Name of the island schedule the host assigned today, if the actor is
    /// visiting.
    fn island_schedule_name(&self) -> Option<&str>;

    fn is_invisible(&self) -> bool {
        false
    }

    /// The live schedule the host is executing.
    fn schedule(&self) -> Option<&ResolvedSchedule>;

    /// Replace the live schedule wholesale.
    fn set_schedule(&mut self, schedule: Option<ResolvedSchedule>);

    /// Zero the actor's movement/animation delay counter.
    fn reset_schedule_delay(&mut self);
}

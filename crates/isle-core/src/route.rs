//! Route types shared by the parser, the host actors and the session.
//!
//! A [`ResolvedSchedule`] is the executable form of a schedule: clock time →
//! [`PathDescription`].  The host installs it as the actor's live schedule;
//! the return-schedule editor merges a parsed remainder into it.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

use crate::{ClockTime, Facing, Tile};

// ── PathDescription ───────────────────────────────────────────────────────────

/// One leg of a schedule: how to get to a waypoint and what to do there.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathDescription {
    /// Map the actor ends up on.
    pub location: String,
    /// Tiles to walk, starting at the departure tile.  May be empty for a
    /// host that only tracks endpoints.
    pub route: Vec<Tile>,
    /// Where the actor stops.
    pub target: Tile,
    pub facing: Facing,
    pub animation: Option<String>,
    pub dialogue: Option<String>,
    /// Expected traversal duration, in schedule time units.
    pub expected_route_time: u32,
}

impl PathDescription {
    /// First tile of the route, i.e. where this leg departs from.
    pub fn start_tile(&self) -> Option<Tile> {
        self.route.first().copied()
    }
}

// ── ResolvedSchedule ──────────────────────────────────────────────────────────

/// A time-keyed sequence of path descriptions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedSchedule {
    entries: BTreeMap<ClockTime, PathDescription>,
}

impl ResolvedSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, time: ClockTime) -> Option<&PathDescription> {
        self.entries.get(&time)
    }

    /// Departure tile of the leg keyed at `time`.
    pub fn first_tile_at(&self, time: ClockTime) -> Option<Tile> {
        self.entries.get(&time).and_then(PathDescription::start_tile)
    }

    /// Latest key, if any.
    pub fn last_time(&self) -> Option<ClockTime> {
        self.entries.keys().next_back().copied()
    }

    /// Keys in ascending order.
    pub fn times(&self) -> impl Iterator<Item = ClockTime> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, ClockTime, PathDescription> {
        self.entries.iter()
    }

    /// Insert unconditionally, replacing any entry at `time`.
    pub fn insert(&mut self, time: ClockTime, path: PathDescription) -> Option<PathDescription> {
        self.entries.insert(time, path)
    }

    /// Append `path` only if `time` is strictly later than every existing
    /// key.  Returns `false` (and leaves the schedule untouched) otherwise.
    pub fn insert_after(&mut self, time: ClockTime, path: PathDescription) -> bool {
        if self.last_time().is_some_and(|last| time <= last) {
            return false;
        }
        self.entries.insert(time, path);
        true
    }

    /// Overlay `other` onto `self`; keys present in both take `other`'s entry.
    pub fn merge(&mut self, other: ResolvedSchedule) {
        self.entries.extend(other.entries);
    }
}

impl<'a> IntoIterator for &'a ResolvedSchedule {
    type Item = (&'a ClockTime, &'a PathDescription);
    type IntoIter = btree_map::Iter<'a, ClockTime, PathDescription>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

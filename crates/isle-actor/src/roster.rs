//! `Roster<A>`: id-indexed storage for the actors of one session.
//!
//! # Why ids instead of names?
//!
//! Per-timeslot maps (assignments, the animation log) are keyed by
//! [`ActorId`] so they are `Copy`-keyed `BTreeMap`s with a stable iteration
//! order.  Names stay the external identity: [`Roster::id_of`] resolves them
//! case-insensitively.

use rustc_hash::FxHashMap;

use isle_core::ActorId;

use crate::{Actor, ActorError, ActorResult};

/// Owns the actors the engine may touch, indexed by [`ActorId`].
pub struct Roster<A: Actor> {
    actors: Vec<A>,
    by_name: FxHashMap<String, ActorId>,
}

impl<A: Actor> Default for Roster<A> {
    fn default() -> Self {
        Self { actors: Vec::new(), by_name: FxHashMap::default() }
    }
}

impl<A: Actor> Roster<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from actors in order; ids follow insertion order.
    pub fn from_actors(actors: impl IntoIterator<Item = A>) -> ActorResult<Self> {
        let mut roster = Self::new();
        for actor in actors {
            roster.push(actor)?;
        }
        Ok(roster)
    }

    /// Add `actor`, returning its id.  Names must be unique ignoring case.
    pub fn push(&mut self, actor: A) -> ActorResult<ActorId> {
        let key = actor.name().to_lowercase();
        if self.by_name.contains_key(&key) {
            return Err(ActorError::DuplicateName(actor.name().to_string()));
        }
        let id = ActorId(self.actors.len() as u32);
        self.by_name.insert(key, id);
        self.actors.push(actor);
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    #[inline]
    pub fn get(&self, id: ActorId) -> Option<&A> {
        self.actors.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut A> {
        self.actors.get_mut(id.index())
    }

    /// Case-insensitive name lookup.
    pub fn id_of(&self, name: &str) -> Option<ActorId> {
        self.by_name.get(&name.to_lowercase()).copied()
    }

    pub fn name_of(&self, id: ActorId) -> Option<&str> {
        self.get(id).map(Actor::name)
    }

    pub fn ids(&self) -> impl Iterator<Item = ActorId> + use<A> {
        (0..self.actors.len() as u32).map(ActorId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &A)> {
        self.actors
            .iter()
            .enumerate()
            .map(|(i, a)| (ActorId(i as u32), a))
    }
}

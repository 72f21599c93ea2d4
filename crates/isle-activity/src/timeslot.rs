//! One timeslot of activity assignment.

use std::collections::{BTreeMap, BTreeSet};

use isle_actor::{Actor, AgeClass, AnimationCatalog, Roster};
use isle_core::{ActorId, ClockTime, Facing, SessionRng};
use tracing::{debug, trace};

use crate::{ActivityCatalog, ActivityDefinition, AnimationLog, AssignContext, Assignment, UsedPoints};

// ── SlotRoles ─────────────────────────────────────────────────────────────────

/// Who plays which part during the event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlotRoles {
    pub bartender: Option<ActorId>,
    pub musician:  Option<ActorId>,
    /// Everyone else present, in input order.
    pub visitors:  Vec<ActorId>,
}

impl SlotRoles {
    /// Pick the first present candidate (in candidate order) for each role.
    /// Nobody holds two roles; names match ignoring case.
    pub fn classify<A: Actor>(
        roster: &Roster<A>,
        present: &[ActorId],
        bartenders: &[String],
        musicians: &[String],
    ) -> SlotRoles {
        let pick = |names: &[String], taken: Option<ActorId>| {
            names
                .iter()
                .filter_map(|n| roster.id_of(n))
                .find(|id| present.contains(id) && Some(*id) != taken)
        };
        let bartender = pick(bartenders, None);
        let musician = pick(musicians, bartender);
        let visitors = present
            .iter()
            .copied()
            .filter(|id| Some(*id) != bartender && Some(*id) != musician)
            .collect();
        SlotRoles { bartender, musician, visitors }
    }

    pub fn len(&self) -> usize {
        self.visitors.len() + usize::from(self.bartender.is_some()) + usize::from(self.musician.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── TimeslotPlan ──────────────────────────────────────────────────────────────

/// The outcome of one timeslot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimeslotPlan {
    pub time:         ClockTime,
    pub assignments:  BTreeMap<ActorId, Assignment>,
    /// Fed into the next timeslot.
    pub animations:   AnimationLog,
    /// Actors whose schedule delay must be reset so they move in step
    /// (a dancer and the musician they dance beside).
    pub synchronized: BTreeSet<ActorId>,
}

impl TimeslotPlan {
    fn new(time: ClockTime) -> Self {
        Self { time, ..Self::default() }
    }

    pub fn get(&self, actor: ActorId) -> Option<&Assignment> {
        self.assignments.get(&actor)
    }

    pub fn is_assigned(&self, actor: ActorId) -> bool {
        self.assignments.contains_key(&actor)
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

// ── TimeslotAssigner ──────────────────────────────────────────────────────────

struct SlotState {
    used: UsedPoints,
    plan: TimeslotPlan,
}

impl SlotState {
    fn place(&mut self, id: ActorId, assignment: Assignment) {
        self.used.claim(assignment.tile);
        if let Some(animation) = &assignment.animation {
            self.plan.animations.record(id, animation.clone());
        }
        self.plan.assignments.insert(id, assignment);
    }
}

/// Assigns the actors of one timeslot.
///
/// The visitor order is shuffled once at construction with the session's
/// random source; the same seed and input order therefore reproduce the
/// same plan.
pub struct TimeslotAssigner<'a, A: Actor> {
    time:       ClockTime,
    roster:     &'a Roster<A>,
    catalog:    &'a ActivityCatalog,
    animations: &'a AnimationCatalog,
    home_map:   &'a str,
    bartender:  Option<ActorId>,
    musician:   Option<ActorId>,
    visitors:   Vec<ActorId>,
}

impl<'a, A: Actor> TimeslotAssigner<'a, A> {
    pub fn new(
        time: ClockTime,
        roster: &'a Roster<A>,
        roles: &SlotRoles,
        catalog: &'a ActivityCatalog,
        animations: &'a AnimationCatalog,
        home_map: &'a str,
        rng: &mut SessionRng,
    ) -> Self {
        let mut visitors = roles.visitors.clone();
        rng.shuffle(&mut visitors);
        Self {
            time,
            roster,
            catalog,
            animations,
            home_map,
            bartender: roles.bartender,
            musician: roles.musician,
            visitors,
        }
    }

    /// Visitor order after the construction-time shuffle.
    pub fn visitors(&self) -> &[ActorId] {
        &self.visitors
    }

    /// Run every pass.  `previous` is the prior timeslot's animation log.
    pub fn assign(&self, rng: &mut SessionRng, previous: &AnimationLog) -> TimeslotPlan {
        let mut state = SlotState { used: UsedPoints::new(), plan: TimeslotPlan::new(self.time) };

        let dancers: BTreeSet<ActorId> = match self.musician {
            Some(_) => self
                .visitors
                .iter()
                .copied()
                .filter(|id| self.can_dance(*id))
                .collect(),
            None => BTreeSet::new(),
        };

        if let Some(bartender) = self.bartender.filter(|id| self.roster.get(*id).is_some()) {
            self.serve_bar(&mut state, bartender);
            self.offer_drinks(&mut state, rng, previous, &dancers);
        }

        if let Some(musician) = self.musician {
            self.play_music(&mut state, rng, previous, musician, &dancers);
        }

        for &id in &self.visitors {
            if state.plan.is_assigned(id) {
                continue;
            }
            for def in &self.catalog.general {
                if self.offer(&mut state, rng, previous, id, def, None) {
                    break;
                }
            }
        }

        for &id in &self.visitors {
            if state.plan.is_assigned(id) {
                continue;
            }
            for def in self.catalog.general.iter().rev() {
                if self.offer(&mut state, rng, previous, id, def, Some(1.0)) {
                    break;
                }
            }
        }

        debug!(
            time = %self.time,
            assigned = state.plan.len(),
            present = self.visitors.len() + usize::from(self.bartender.is_some()) + usize::from(self.musician.is_some()),
            "timeslot assigned"
        );
        state.plan
    }

    fn can_dance(&self, id: ActorId) -> bool {
        self.roster
            .get(id)
            .is_some_and(|a| self.animations.has(a.name(), &self.catalog.close_dance.animation))
    }

    fn serve_bar(&self, state: &mut SlotState, bartender: ActorId) {
        let assignment = Assignment {
            activity: "bar".into(),
            time: self.time,
            map: self.home_map.to_string(),
            tile: self.catalog.bar_point,
            facing: Facing::default(),
            animation: None,
            dialogue_key: self.catalog.bar_dialogue.clone(),
        };
        trace!(actor = ?bartender, tile = %assignment.tile, "bartender placed");
        state.place(bartender, assignment);
    }

    fn offer_drinks(
        &self,
        state: &mut SlotState,
        rng: &mut SessionRng,
        previous: &AnimationLog,
        dancers: &BTreeSet<ActorId>,
    ) {
        for &id in &self.visitors {
            if state.plan.is_assigned(id) || dancers.contains(&id) || Some(id) == self.musician {
                continue;
            }
            if self.roster.get(id).is_none_or(|a| a.age() == AgeClass::Child) {
                continue;
            }
            self.offer(state, rng, previous, id, &self.catalog.drinking, None);
        }
    }

    fn play_music(
        &self,
        state: &mut SlotState,
        rng: &mut SessionRng,
        previous: &AnimationLog,
        musician: ActorId,
        dancers: &BTreeSet<ActorId>,
    ) {
        if state.plan.is_assigned(musician)
            || !self.offer(state, rng, previous, musician, &self.catalog.music, None)
        {
            return;
        }
        let Some(centre) = state.plan.get(musician).map(|a| a.tile) else {
            return;
        };
        let close = self.catalog.close_dance.around(centre);

        for &id in self.visitors.iter().filter(|id| dancers.contains(id)) {
            if state.plan.is_assigned(id) {
                continue;
            }
            let placed = self.offer(state, rng, previous, id, &close, None)
                || self.offer(state, rng, previous, id, &self.catalog.dance, None);
            if placed {
                state.plan.synchronized.insert(id);
                state.plan.synchronized.insert(musician);
            }
        }
    }

    /// Offer `def` to `id`; on acceptance the placement is recorded.
    fn offer(
        &self,
        state: &mut SlotState,
        rng: &mut SessionRng,
        previous: &AnimationLog,
        id: ActorId,
        def: &ActivityDefinition,
        chance_override: Option<f64>,
    ) -> bool {
        let Some(actor) = self.roster.get(id) else {
            return false;
        };
        let ctx = AssignContext {
            time: self.time,
            home_map: self.home_map,
            used: &state.used,
            previous,
            animations: self.animations,
        };
        match def.try_assign(rng, id, actor, &ctx, chance_override) {
            Some(assignment) => {
                trace!(actor = actor.name(), activity = %def.name, tile = %assignment.tile, "placed");
                state.place(id, assignment);
                true
            }
            None => false,
        }
    }
}

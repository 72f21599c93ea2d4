//! Mid-day return-schedule adjustment.
//!
//! The editor is driven by the host's clock.  On each tick before the
//! configured cutoff it adjusts at most one not-yet-altered visitor, so the
//! parsing cost is spread across the morning.

use rustc_hash::FxHashSet;

use isle_actor::{Actor, Roster};
use isle_core::{ActorId, ClockTime, GameDate};
use tracing::trace;

use crate::{AdjustOutcome, GotoExpander, Pathfinder, ReturnPlanner, World};

/// Tracks which visitors have been adjusted today.
#[derive(Clone, Debug, Default)]
pub struct ReturnScheduleEditor {
    altered: FxHashSet<ActorId>,
}

impl ReturnScheduleEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn was_altered(&self, id: ActorId) -> bool {
        self.altered.contains(&id)
    }

    pub fn altered_count(&self) -> usize {
        self.altered.len()
    }

    /// Forget every alteration; called at day start and session end.
    pub fn reset(&mut self) {
        self.altered.clear();
    }

    /// Adjust the first eligible visitor, if any.
    ///
    /// Visitors named in the config's exemption list are never touched.  A
    /// visitor is marked altered before the adjustment runs, so a failed
    /// attempt is not retried on the next tick.
    pub fn on_time_changed<A, G, P>(
        &mut self,
        time: ClockTime,
        date: GameDate,
        roster: &mut Roster<A>,
        visitors: &[ActorId],
        planner: &ReturnPlanner<G, P>,
        world: &dyn World,
    ) -> Option<(ActorId, AdjustOutcome)>
    where
        A: Actor,
        G: GotoExpander,
        P: Pathfinder,
    {
        let config = planner.config();
        if time >= config.midday_cutoff {
            return None;
        }
        for &id in visitors {
            let Some(actor) = roster.get_mut(id) else {
                continue;
            };
            if config.is_exempt(actor.name()) || !self.altered.insert(id) {
                continue;
            }
            trace!(actor = actor.name(), %time, "adjusting return schedule");
            let outcome = planner.adjust_actor(actor, date, world);
            return Some((id, outcome));
        }
        None
    }
}

//! Return-schedule key cascade.
//!
//! Keys are tried from most to least specific.  With base `k` (the
//! configured base key, plus the married suffix for married actors), heart
//! levels `h` (even, descending, above zero), season `s`, day `d` and
//! weekday `w`:
//!
//! ```text
//!  k_s_d
//!  k_d_h …
//!  k_d
//!  k_rain            only when it is raining where the actor stands
//!  k_s_wh …
//!  k_s_w
//!  k_wh …
//!  k_w
//!  k_h …
//!  k_s
//!  k
//! ```
//!
//! The first key whose entry exists, expands, and starts with the
//! configured return prefix wins.

use isle_actor::Actor;
use isle_core::{GameDate, SchedulerConfig};
use tracing::{debug, info, trace};

use crate::{GotoExpander, World};

/// Picks the raw return-schedule string for an actor and date.
#[derive(Clone, Debug)]
pub struct KeyResolver<G: GotoExpander> {
    expander:             G,
    base_key:             String,
    married_suffix:       String,
    return_prefix:        String,
    friendship_per_heart: u32,
}

impl<G: GotoExpander> KeyResolver<G> {
    pub fn new(expander: G, config: &SchedulerConfig) -> Self {
        Self {
            expander,
            base_key: config.base_key.clone(),
            married_suffix: config.married_suffix.clone(),
            return_prefix: config.return_prefix.clone(),
            friendship_per_heart: config.friendship_per_heart,
        }
    }

    pub fn expander(&self) -> &G {
        &self.expander
    }

    /// Even heart levels from the actor's rounded-down level to 2.
    pub fn heart_levels(&self, friendship_points: u32) -> Vec<u32> {
        let hearts = friendship_points
            .checked_div(self.friendship_per_heart)
            .unwrap_or(0);
        let top = hearts / 2 * 2;
        (1..=top / 2).rev().map(|step| step * 2).collect()
    }

    /// Every key the cascade would try, in order.
    pub fn candidate_keys(&self, actor: &dyn Actor, date: GameDate, raining: bool) -> Vec<String> {
        let base = if actor.is_married() {
            format!("{}{}", self.base_key, self.married_suffix)
        } else {
            self.base_key.clone()
        };
        let hearts = self.heart_levels(actor.friendship_points());
        let season = date.season.name();
        let day = date.day;
        let weekday = date.weekday().short_name();

        let mut keys = Vec::with_capacity(7 + 3 * hearts.len());
        keys.push(format!("{base}_{season}_{day}"));
        keys.extend(hearts.iter().map(|h| format!("{base}_{day}_{h}")));
        keys.push(format!("{base}_{day}"));
        if raining {
            keys.push(format!("{base}_rain"));
        }
        keys.extend(hearts.iter().map(|h| format!("{base}_{season}_{weekday}{h}")));
        keys.push(format!("{base}_{season}_{weekday}"));
        keys.extend(hearts.iter().map(|h| format!("{base}_{weekday}{h}")));
        keys.push(format!("{base}_{weekday}"));
        keys.extend(hearts.iter().map(|h| format!("{base}_{h}")));
        keys.push(format!("{base}_{season}"));
        keys.push(base);
        keys
    }

    /// The expanded return schedule for `actor`, or `None` when no tier
    /// yields one.
    pub fn resolve(&self, actor: &dyn Actor, date: GameDate, world: &dyn World) -> Option<String> {
        let raining = world.is_raining_at(actor.current_location());
        for key in self.candidate_keys(actor, date, raining) {
            let Some(entry) = actor.schedule_entry(&key) else {
                continue;
            };
            let Some(expanded) = self.expander.expand(actor, date, entry) else {
                debug!(actor = actor.name(), key = %key, "entry did not expand");
                continue;
            };
            if expanded.starts_with(&self.return_prefix) {
                trace!(actor = actor.name(), key = %key, "return schedule key chosen");
                return Some(expanded);
            }
            debug!(
                actor = actor.name(),
                key = %key,
                prefix = %self.return_prefix,
                "entry does not start at the event end"
            );
        }
        info!(actor = actor.name(), "no return schedule found");
        None
    }
}

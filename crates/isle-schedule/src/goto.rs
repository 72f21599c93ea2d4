//! Schedule indirection (`GOTO <key>`).
//!
//! A schedule entry may consist of `GOTO <key>`, meaning "use the entry
//! stored under `<key>` instead".  `GOTO season` names the current season's
//! entry.  The resolver applies an expander before checking an entry's
//! prefix, so an indirection that lands on a valid return schedule counts.

use isle_actor::Actor;
use isle_core::GameDate;
use tracing::debug;

/// Expands indirections in a raw schedule string.
pub trait GotoExpander {
    /// The fully expanded string, or `None` if it cannot be expanded.
    fn expand(&self, actor: &dyn Actor, date: GameDate, raw: &str) -> Option<String>;
}

/// Passes every string through unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoIndirection;

impl GotoExpander for NoIndirection {
    fn expand(&self, _actor: &dyn Actor, _date: GameDate, raw: &str) -> Option<String> {
        Some(raw.to_string())
    }
}

/// Follows `GOTO` chains through the actor's own entry table.
#[derive(Clone, Copy, Debug)]
pub struct EntryGotoExpander {
    pub max_depth: usize,
}

impl Default for EntryGotoExpander {
    fn default() -> Self {
        Self { max_depth: 8 }
    }
}

fn goto_target(raw: &str) -> Option<&str> {
    raw.trim_start().strip_prefix("GOTO ")?.split_whitespace().next()
}

impl GotoExpander for EntryGotoExpander {
    fn expand(&self, actor: &dyn Actor, date: GameDate, raw: &str) -> Option<String> {
        let mut current = raw;
        for _ in 0..=self.max_depth {
            let Some(target) = goto_target(current) else {
                return Some(current.to_string());
            };
            let key = if target.eq_ignore_ascii_case("season") {
                date.season.name()
            } else {
                target
            };
            match actor.schedule_entry(key) {
                Some(next) => current = next,
                None => {
                    debug!(actor = actor.name(), key, "GOTO target missing");
                    return None;
                }
            }
        }
        debug!(actor = actor.name(), depth = self.max_depth, "GOTO chain too deep");
        None
    }
}

//! Per-actor return planning and full-schedule installation.

use isle_actor::{Actor, Home};
use isle_core::{GameDate, ResolvedSchedule, SchedulerConfig};
use tracing::{debug, error, info, warn};

use crate::{GotoExpander, KeyResolver, ParseOrigin, Pathfinder, ScheduleParser, World};

/// Default map of actors whose home is the player's house.
const FARMHOUSE_MAP: &str = "FarmHouse";

/// Trailing command that sends an actor to bed in their home.
const BED_SUFFIX: &str = "bed";

/// What [`ReturnPlanner::adjust_actor`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdjustOutcome {
    /// The remainder was merged into the live schedule.
    Adjusted { waypoints: usize },
    NotIslander,
    Invisible,
    NoLiveSchedule,
    /// The live schedule's last key is not the event end.
    NotEndingAtEvent,
    NoReturnSchedule,
    /// A return schedule was found but no waypoint survived parsing.
    NothingParsed,
}

impl AdjustOutcome {
    pub fn is_adjusted(&self) -> bool {
        matches!(self, AdjustOutcome::Adjusted { .. })
    }
}

/// Resolver + parser bound to one configuration.
#[derive(Clone, Debug)]
pub struct ReturnPlanner<G: GotoExpander, P: Pathfinder> {
    config:   SchedulerConfig,
    resolver: KeyResolver<G>,
    parser:   ScheduleParser<P>,
}

impl<G: GotoExpander, P: Pathfinder> ReturnPlanner<G, P> {
    pub fn new(config: &SchedulerConfig, expander: G, pathfinder: P) -> Self {
        Self {
            config: config.clone(),
            resolver: KeyResolver::new(expander, config),
            parser: ScheduleParser::new(pathfinder, config),
        }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn resolver(&self) -> &KeyResolver<G> {
        &self.resolver
    }

    pub fn parser(&self) -> &ScheduleParser<P> {
        &self.parser
    }

    /// The raw return-schedule string for `actor` on `date`.
    pub fn resolve(&self, actor: &dyn Actor, date: GameDate, world: &dyn World) -> Option<String> {
        self.resolver.resolve(actor, date, world)
    }

    /// Resolve and parse the post-event remainder without touching the
    /// actor.
    pub fn plan_return(&self, actor: &dyn Actor, date: GameDate, world: &dyn World) -> Option<ResolvedSchedule> {
        let raw = self.resolver.resolve(actor, date, world)?;
        let origin = ParseOrigin::after_event(actor, &self.config);
        self.parser.parse(&raw, actor, &origin, world)
    }

    /// Replace everything after the event end in the actor's live schedule
    /// with their return schedule.
    pub fn adjust_actor(&self, actor: &mut dyn Actor, date: GameDate, world: &dyn World) -> AdjustOutcome {
        if actor.island_schedule_name().is_none_or(str::is_empty) {
            self.refuse(actor.name(), "not visiting the island today");
            return AdjustOutcome::NotIslander;
        }
        if actor.is_invisible() {
            debug!(actor = actor.name(), "invisible; not adjusted");
            return AdjustOutcome::Invisible;
        }
        let Some(live) = actor.schedule() else {
            self.refuse(actor.name(), "no live schedule");
            return AdjustOutcome::NoLiveSchedule;
        };
        if live.last_time() != Some(self.config.event_end) {
            debug!(actor = actor.name(), last = ?live.last_time(), "schedule does not end at the event end");
            return AdjustOutcome::NotEndingAtEvent;
        }
        let mut updated = live.clone();

        let Some(raw) = self.resolver.resolve(&*actor, date, world) else {
            return AdjustOutcome::NoReturnSchedule;
        };
        let origin = ParseOrigin::after_event(&*actor, &self.config);
        let Some(remainder) = self.parser.parse(&raw, &*actor, &origin, world) else {
            warn!(actor = actor.name(), raw = %raw, "return schedule produced no waypoints");
            return AdjustOutcome::NothingParsed;
        };

        let waypoints = remainder.len();
        updated.merge(remainder);
        actor.set_schedule(Some(updated));
        info!(actor = actor.name(), waypoints, "return schedule installed");
        AdjustOutcome::Adjusted { waypoints }
    }

    /// Parse and install a full day's schedule.
    ///
    /// Unmarried actors living in the farmhouse are parsed as if they lived
    /// at the configured fictitious home, and a trailing `bed` command is
    /// swapped for the configured replacement.  Their real home is restored
    /// whether or not parsing succeeds.  On failure the prior schedule is
    /// kept.
    pub fn install_full_schedule(&self, actor: &mut dyn Actor, raw: &str, world: &dyn World) -> Option<ResolvedSchedule> {
        let home = actor.default_home();
        let in_farmhouse = home.map.eq_ignore_ascii_case(FARMHOUSE_MAP) && !actor.is_married();

        let parsed = if in_farmhouse {
            let raw = match raw.strip_suffix(BED_SUFFIX) {
                Some(head) => format!("{head}{}", self.config.bed_replacement),
                None => raw.to_string(),
            };
            let fictitious = &self.config.fictitious_home;
            actor.set_default_home(Home::new(fictitious.map.clone(), fictitious.tile));
            let parsed = self.parser.parse(&raw, &*actor, &ParseOrigin::from_home(&*actor), world);
            actor.set_default_home(home);
            parsed
        } else {
            self.parser.parse(raw, &*actor, &ParseOrigin::from_home(&*actor), world)
        };

        match parsed {
            Some(schedule) => {
                actor.set_schedule(Some(schedule.clone()));
                Some(schedule)
            }
            None => {
                error!(actor = actor.name(), raw, "ran into issues parsing schedule; keeping the previous one");
                None
            }
        }
    }

    fn refuse(&self, actor: &str, reason: &str) {
        if self.config.enforce_timing {
            warn!(actor, reason, "return schedule not adjusted");
        } else {
            debug!(actor, reason, "return schedule not adjusted");
        }
    }
}

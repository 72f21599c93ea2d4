//! The `SchedulerSession` and its per-day state.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;
use tracing::{debug, info, warn};

use isle_activity::{ActivityCatalog, AnimationLog, Assignment, SlotRoles, TimeslotAssigner, TimeslotPlan};
use isle_actor::{Actor, AnimationCatalog, Roster};
use isle_core::{ActorId, ClockTime, GameDate, ResolvedSchedule, SchedulerConfig, SessionRng};
use isle_schedule::{
    AdjustOutcome, GotoExpander, ParseOrigin, Pathfinder, ReturnPlanner, ReturnScheduleEditor, World,
};

use crate::{ExclusionRules, SessionError, SessionObserver, SessionResult};

// ── DayState ──────────────────────────────────────────────────────────────────

/// Everything that lives for exactly one simulated day.
pub(crate) struct DayState {
    date:            GameDate,
    rng:             SessionRng,
    last_animations: AnimationLog,
    roles:           Option<SlotRoles>,
    plans:           Vec<TimeslotPlan>,
    visit_cache:     FxHashMap<ActorId, bool>,
    resolved:        FxHashMap<ActorId, Option<String>>,
    /// Full-day schedules installed today, kept for `fix_up_schedules`.
    installed:       FxHashMap<ActorId, ResolvedSchedule>,
    fixed_up:        bool,
}

impl DayState {
    fn new(date: GameDate, seed: u64) -> Self {
        Self {
            date,
            rng: SessionRng::for_day(seed, date),
            last_animations: AnimationLog::new(),
            roles: None,
            plans: Vec::new(),
            visit_cache: FxHashMap::default(),
            resolved: FxHashMap::default(),
            installed: FxHashMap::default(),
            fixed_up: false,
        }
    }
}

// ── SchedulerSession ──────────────────────────────────────────────────────────

/// Owns the roster, the collaborators and all per-day caches.
///
/// Create via [`SessionBuilder`][crate::SessionBuilder].  Every day-scoped
/// operation fails with [`SessionError::NoDay`] until
/// [`begin_day`][Self::begin_day] is called.
pub struct SchedulerSession<A: Actor, W: World, G: GotoExpander, P: Pathfinder> {
    pub(crate) config:     SchedulerConfig,
    pub(crate) roster:     Roster<A>,
    pub(crate) world:      W,
    pub(crate) planner:    ReturnPlanner<G, P>,
    pub(crate) activities: ActivityCatalog,
    pub(crate) animations: AnimationCatalog,
    pub(crate) exclusions: ExclusionRules,
    pub(crate) bartenders: Vec<String>,
    pub(crate) musicians:  Vec<String>,
    pub(crate) editor:     ReturnScheduleEditor,
    pub(crate) day:        Option<DayState>,
}

impl<A: Actor, W: World, G: GotoExpander, P: Pathfinder> SchedulerSession<A, W, G, P> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster<A> {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster<A> {
        &mut self.roster
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    pub fn planner(&self) -> &ReturnPlanner<G, P> {
        &self.planner
    }

    /// The current day, if one has begun.
    pub fn date(&self) -> Option<GameDate> {
        self.day.as_ref().map(|d| d.date)
    }

    /// Plans produced so far today, in slot order.
    pub fn plans(&self) -> &[TimeslotPlan] {
        self.day.as_ref().map_or(&[], |d| d.plans.as_slice())
    }

    // ── Day lifecycle ─────────────────────────────────────────────────────

    /// Start `date` with fresh caches and an RNG seeded from the config seed
    /// and the date.
    pub fn begin_day(&mut self, date: GameDate) {
        self.reset_for_new_day();
        info!(season = %date.season, day = date.day, year = date.year, "day begins");
        self.day = Some(DayState::new(date, self.config.seed));
    }

    /// Drop every per-day cache and the mid-day editor's memory.
    pub fn reset_for_new_day(&mut self) {
        self.editor.reset();
        self.day = None;
    }

    pub fn reset_for_session_end(&mut self) {
        self.reset_for_new_day();
        debug!("scheduler session ended");
    }

    // ── Visitors and roles ────────────────────────────────────────────────

    /// Whether `id` may visit today; answers are cached until the fix-up
    /// tick.
    pub fn can_visit_today(&mut self, id: ActorId) -> SessionResult<bool> {
        let day = self.day.as_mut().ok_or(SessionError::NoDay)?;
        if let Some(&cached) = day.visit_cache.get(&id) {
            return Ok(cached);
        }
        let actor = self.roster.get(id).ok_or(SessionError::UnknownActor(id))?;
        let allowed = !self.exclusions.excludes(actor.name(), day.date);
        if !allowed {
            debug!(actor = actor.name(), "excluded from visiting today");
        }
        day.visit_cache.insert(id, allowed);
        Ok(allowed)
    }

    /// Names of actors designated to visit today, sorted.
    pub fn islanders(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .islander_ids()
            .into_iter()
            .filter_map(|id| self.roster.name_of(id).map(str::to_string))
            .collect();
        names.sort();
        names
    }

    fn islander_ids(&self) -> Vec<ActorId> {
        self.roster
            .ids()
            .filter(|id| {
                self.roster
                    .get(*id)
                    .and_then(|a| a.island_schedule_name())
                    .is_some_and(|n| !n.is_empty())
            })
            .collect()
    }

    /// Classify today's permitted islanders into roles and keep the result
    /// for the rest of the day.
    pub fn classify_roles(&mut self) -> SessionResult<SlotRoles> {
        let mut present = Vec::new();
        for id in self.islander_ids() {
            if self.can_visit_today(id)? {
                present.push(id);
            }
        }
        let roles = SlotRoles::classify(&self.roster, &present, &self.bartenders, &self.musicians);
        debug!(
            bartender = ?roles.bartender,
            musician = ?roles.musician,
            visitors = roles.visitors.len(),
            "roles classified"
        );
        self.set_roles(roles.clone())?;
        Ok(roles)
    }

    /// Override today's roles.
    pub fn set_roles(&mut self, roles: SlotRoles) -> SessionResult<()> {
        let day = self.day.as_mut().ok_or(SessionError::NoDay)?;
        day.roles = Some(roles);
        Ok(())
    }

    // ── Event loop ────────────────────────────────────────────────────────

    /// Assign one timeslot.  Roles are classified on first use.
    pub fn run_timeslot(&mut self, time: ClockTime) -> SessionResult<TimeslotPlan> {
        if self.day.as_ref().ok_or(SessionError::NoDay)?.roles.is_none() {
            self.classify_roles()?;
        }
        let day = self.day.as_mut().ok_or(SessionError::NoDay)?;
        let roles = day.roles.clone().unwrap_or_default();

        let assigner = TimeslotAssigner::new(
            time,
            &self.roster,
            &roles,
            &self.activities,
            &self.animations,
            &self.config.home_map,
            &mut day.rng,
        );
        let plan = assigner.assign(&mut day.rng, &day.last_animations);

        for &id in &plan.synchronized {
            if let Some(actor) = self.roster.get_mut(id) {
                actor.reset_schedule_delay();
            }
        }
        day.last_animations = plan.animations.clone();
        day.plans.push(plan.clone());
        Ok(plan)
    }

    /// Run every slot from `event_start` up to `event_end`.  Returns the
    /// number of slots run.
    pub fn run_event<O: SessionObserver>(&mut self, observer: &mut O) -> SessionResult<usize> {
        let slots = ClockTime::slots(self.config.event_start, self.config.event_end, self.config.slot_minutes);
        let mut count = 0;
        for time in slots {
            observer.on_slot_start(time);
            let plan = self.run_timeslot(time)?;
            observer.on_slot_end(&plan);
            count += 1;
        }
        observer.on_event_end(count);
        info!(slots = count, "event assigned");
        Ok(count)
    }

    /// `id`'s placements today as a raw schedule string, closed by a
    /// waypoint at `event_end` on the final spot.  `None` if `id` was never
    /// placed.
    pub fn compile_island_schedule(&self, id: ActorId) -> SessionResult<Option<String>> {
        let day = self.day.as_ref().ok_or(SessionError::NoDay)?;
        let mut waypoints = Vec::new();
        let mut last: Option<&Assignment> = None;
        for assignment in day.plans.iter().filter_map(|p| p.get(id)) {
            if last.is_some_and(|l| l.same_spot(assignment)) {
                continue;
            }
            waypoints.push(assignment.waypoint());
            last = Some(assignment);
        }
        let Some(last) = last else {
            return Ok(None);
        };
        waypoints.push(format!(
            "{} {} {} {} {}",
            self.config.event_end,
            last.map,
            last.tile.x,
            last.tile.y,
            last.facing.digit()
        ));
        Ok(Some(waypoints.join("/")))
    }

    /// Parse every placed actor's compiled island schedule and install it.
    /// Returns how many were installed.
    pub fn install_island_schedules(&mut self) -> SessionResult<usize> {
        let placed: BTreeSet<ActorId> = self
            .plans()
            .iter()
            .flat_map(|p| p.assignments.keys().copied())
            .collect();
        let mut installed = 0;
        for id in placed {
            let Some(raw) = self.compile_island_schedule(id)? else {
                continue;
            };
            let actor = self.roster.get_mut(id).ok_or(SessionError::UnknownActor(id))?;
            let origin = ParseOrigin::from_home(&*actor);
            match self.planner.parser().parse(&raw, &*actor, &origin, &self.world) {
                Some(schedule) => {
                    actor.set_schedule(Some(schedule));
                    installed += 1;
                }
                None => warn!(actor = actor.name(), raw = %raw, "island schedule did not parse"),
            }
        }
        Ok(installed)
    }

    // ── Return schedules ──────────────────────────────────────────────────

    /// Host clock hook.  Runs the once-a-day fix-up after `fixup_after`,
    /// then lets the mid-day editor adjust at most one islander.
    pub fn on_time_changed(&mut self, time: ClockTime) -> SessionResult<Option<(ActorId, AdjustOutcome)>> {
        let day = self.day.as_mut().ok_or(SessionError::NoDay)?;
        if time > self.config.fixup_after && !day.fixed_up {
            day.fixed_up = true;
            day.visit_cache.clear();
            self.fix_up_schedules()?;
        }

        let date = self.date().ok_or(SessionError::NoDay)?;
        let visitors = self.islander_ids();
        Ok(self
            .editor
            .on_time_changed(time, date, &mut self.roster, &visitors, &self.planner, &self.world))
    }

    /// Replace `id`'s post-event schedule with their return schedule.
    pub fn adjust_return_schedule(&mut self, id: ActorId) -> SessionResult<AdjustOutcome> {
        let date = self.date().ok_or(SessionError::NoDay)?;
        let actor = self.roster.get_mut(id).ok_or(SessionError::UnknownActor(id))?;
        Ok(self.planner.adjust_actor(actor, date, &self.world))
    }

    /// The raw return-schedule string for `id`, cached for the day.
    pub fn resolve_return_schedule(&mut self, id: ActorId) -> SessionResult<Option<String>> {
        let day = self.day.as_mut().ok_or(SessionError::NoDay)?;
        if let Some(hit) = day.resolved.get(&id) {
            return Ok(hit.clone());
        }
        let actor = self.roster.get(id).ok_or(SessionError::UnknownActor(id))?;
        let raw = self.planner.resolve(actor, day.date, &self.world);
        day.resolved.insert(id, raw.clone());
        Ok(raw)
    }

    /// Parse and install a full day's schedule for `id`, remembering it for
    /// [`fix_up_schedules`][Self::fix_up_schedules].  Returns whether a
    /// schedule was installed.
    pub fn install_full_schedule(&mut self, id: ActorId, raw: &str) -> SessionResult<bool> {
        let day = self.day.as_mut().ok_or(SessionError::NoDay)?;
        let actor = self.roster.get_mut(id).ok_or(SessionError::UnknownActor(id))?;
        match self.planner.install_full_schedule(actor, raw, &self.world) {
            Some(schedule) => {
                day.installed.insert(id, schedule);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Restore installed schedules the host has since nulled.  Each restored
    /// schedule is forgotten afterwards.  Returns how many were restored.
    pub fn fix_up_schedules(&mut self) -> SessionResult<usize> {
        let day = self.day.as_mut().ok_or(SessionError::NoDay)?;
        let mut restored = Vec::new();
        for (&id, schedule) in &day.installed {
            let Some(actor) = self.roster.get_mut(id) else {
                continue;
            };
            if actor.schedule().is_none() {
                warn!(actor = actor.name(), "schedule was nulled; restoring");
                actor.set_schedule(Some(schedule.clone()));
                restored.push(id);
            }
        }
        for id in &restored {
            day.installed.remove(id);
        }
        Ok(restored.len())
    }
}

//! Fluent builder for [`SchedulerSession`].

use isle_activity::ActivityCatalog;
use isle_actor::{Actor, AnimationCatalog, Roster};
use isle_core::SchedulerConfig;
use isle_schedule::{GotoExpander, Pathfinder, ReturnPlanner, ReturnScheduleEditor, World};

use crate::{ExclusionRules, SchedulerSession, SessionResult};

/// Fluent builder for [`SchedulerSession<A, W, G, P>`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                      |
/// |---------------------|------------------------------|
/// | `.activities(c)`    | `ActivityCatalog::resort()`  |
/// | `.animations(c)`    | empty catalogue              |
/// | `.exclusions(r)`    | no exclusions                |
/// | `.bartenders(v)`    | `["Gus"]`                    |
/// | `.musicians(v)`     | `["Sam"]`                    |
pub struct SessionBuilder<A: Actor, W: World, G: GotoExpander, P: Pathfinder> {
    config:     SchedulerConfig,
    roster:     Roster<A>,
    world:      W,
    expander:   G,
    pathfinder: P,
    activities: Option<ActivityCatalog>,
    animations: Option<AnimationCatalog>,
    exclusions: Option<ExclusionRules>,
    bartenders: Vec<String>,
    musicians:  Vec<String>,
}

impl<A: Actor, W: World, G: GotoExpander, P: Pathfinder> SessionBuilder<A, W, G, P> {
    pub fn new(config: SchedulerConfig, roster: Roster<A>, world: W, expander: G, pathfinder: P) -> Self {
        Self {
            config,
            roster,
            world,
            expander,
            pathfinder,
            activities: None,
            animations: None,
            exclusions: None,
            bartenders: vec!["Gus".into()],
            musicians: vec!["Sam".into()],
        }
    }

    pub fn activities(mut self, catalog: ActivityCatalog) -> Self {
        self.activities = Some(catalog);
        self
    }

    pub fn animations(mut self, catalog: AnimationCatalog) -> Self {
        self.animations = Some(catalog);
        self
    }

    pub fn exclusions(mut self, rules: ExclusionRules) -> Self {
        self.exclusions = Some(rules);
        self
    }

    /// Bartender candidates, most preferred first.
    pub fn bartenders(mut self, names: Vec<String>) -> Self {
        self.bartenders = names;
        self
    }

    /// Musician candidates, most preferred first.
    pub fn musicians(mut self, names: Vec<String>) -> Self {
        self.musicians = names;
        self
    }

    /// Validate the configuration and catalogue and assemble the session.
    pub fn build(self) -> SessionResult<SchedulerSession<A, W, G, P>> {
        self.config.validate()?;
        let activities = self.activities.unwrap_or_else(ActivityCatalog::resort);
        activities.validate()?;

        Ok(SchedulerSession {
            planner: ReturnPlanner::new(&self.config, self.expander, self.pathfinder),
            config: self.config,
            roster: self.roster,
            world: self.world,
            activities,
            animations: self.animations.unwrap_or_default(),
            exclusions: self.exclusions.unwrap_or_default(),
            bartenders: self.bartenders,
            musicians: self.musicians,
            editor: ReturnScheduleEditor::new(),
            day: None,
        })
    }
}

//! A plain-data [`Actor`] implementation.

use std::collections::BTreeMap;

use isle_core::{ResolvedSchedule, Tile};

use crate::{Actor, AgeClass, Home, Personality};

/// A self-contained actor whose state lives in public fields.
///
/// Construct with [`Villager::new`] and chain the `with_*` setters:
///
/// ```rust
/// use isle_actor::{AgeClass, Villager};
///
/// let v = Villager::new("Leah")
///     .with_age(AgeClass::Adult)
///     .with_friendship(1_500)
///     .with_entry("GIRemainder", "1800 Town 10 10");
/// assert_eq!(v.entries.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Villager {
    pub name: String,
    pub age: AgeClass,
    pub personality: Personality,
    pub married: bool,
    pub friendship: u32,
    pub entries: BTreeMap<String, String>,
    pub location: String,
    pub home: Home,
    pub island_schedule: Option<String>,
    pub invisible: bool,
    pub schedule: Option<ResolvedSchedule>,
    /// Seconds of lag the host applies before the next schedule step.
    pub schedule_delay: f32,
}

impl Villager {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: AgeClass::Adult,
            personality: Personality::default(),
            married: false,
            friendship: 0,
            entries: BTreeMap::new(),
            location: "Town".into(),
            home: Home::new("Town", Tile::new(0, 0)),
            island_schedule: None,
            invisible: false,
            schedule: None,
            schedule_delay: 0.0,
        }
    }

    pub fn with_age(mut self, age: AgeClass) -> Self {
        self.age = age;
        self
    }

    pub fn with_personality(mut self, socially_anxious: bool, pessimistic: bool) -> Self {
        self.personality = Personality { socially_anxious, pessimistic };
        self
    }

    pub fn married(mut self) -> Self {
        self.married = true;
        self
    }

    pub fn with_friendship(mut self, points: u32) -> Self {
        self.friendship = points;
        self
    }

    pub fn with_entry(mut self, key: impl Into<String>, entry: impl Into<String>) -> Self {
        self.entries.insert(key.into(), entry.into());
        self
    }

    pub fn with_entries(mut self, entries: BTreeMap<String, String>) -> Self {
        self.entries.extend(entries);
        self
    }

    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_home(mut self, map: impl Into<String>, tile: Tile) -> Self {
        self.home = Home::new(map, tile);
        self
    }

    /// Mark the villager as visiting today under `schedule_name`.
    pub fn islander(mut self, schedule_name: impl Into<String>) -> Self {
        self.island_schedule = Some(schedule_name.into());
        self
    }

    pub fn with_schedule(mut self, schedule: ResolvedSchedule) -> Self {
        self.schedule = Some(schedule);
        self
    }
}

impl Actor for Villager {
    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> AgeClass {
        self.age
    }

    fn personality(&self) -> Personality {
        self.personality
    }

    fn is_married(&self) -> bool {
        self.married
    }

    fn friendship_points(&self) -> u32 {
        self.friendship
    }

    fn schedule_entry(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    fn current_location(&self) -> &str {
        &self.location
    }

    fn default_home(&self) -> Home {
        self.home.clone()
    }

    fn set_default_home(&mut self, home: Home) {
        self.home = home;
    }

    fn island_schedule_name(&self) -> Option<&str> {
        self.island_schedule.as_deref()
    }

    fn is_invisible(&self) -> bool {
        self.invisible
    }

    fn schedule(&self) -> Option<&ResolvedSchedule> {
        self.schedule.as_ref()
    }

    fn set_schedule(&mut self, schedule: Option<ResolvedSchedule>) {
        self.schedule = schedule;
    }

    fn reset_schedule_delay(&mut self) {
        self.schedule_delay = 0.0;
    }
}

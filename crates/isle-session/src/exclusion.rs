//! Per-actor "does not visit on …" rules.
//!
//! Each actor maps to a comma-separated list of conditions.  The actor stays
//! home when any condition matches the date:
//!
//! | Condition     | Matches                         |
//! |---------------|---------------------------------|
//! | `13`          | day 13 of any season            |
//! | `winter`      | every day of winter             |
//! | `Sat`         | every Saturday                  |
//! | `summer Sun`  | Sundays of summer               |
//!
//! Comparisons ignore case.  Unknown conditions never match.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use isle_core::GameDate;

use crate::SessionResult;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExclusionRules(BTreeMap<String, String>);

impl ExclusionRules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, actor: impl Into<String>, conditions: impl Into<String>) {
        self.0.insert(actor.into(), conditions.into());
    }

    pub fn from_json_str(text: &str) -> SessionResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> SessionResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Trimmed, non-empty conditions for `actor` (name matched ignoring case).
    pub fn conditions_for(&self, actor: &str) -> Vec<&str> {
        self.0
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(actor))
            .map(|(_, raw)| raw.split(',').map(str::trim).filter(|c| !c.is_empty()).collect())
            .unwrap_or_default()
    }

    /// `true` when `actor` must not visit on `date`.
    pub fn excludes(&self, actor: &str, date: GameDate) -> bool {
        let day = date.day.to_string();
        let season = date.season.name();
        let weekday = date.weekday().short_name();
        let season_weekday = format!("{season} {weekday}");
        self.conditions_for(actor).into_iter().any(|c| {
            c.eq_ignore_ascii_case(&day)
                || c.eq_ignore_ascii_case(season)
                || c.eq_ignore_ascii_case(weekday)
                || c.eq_ignore_ascii_case(&season_weekday)
        })
    }
}

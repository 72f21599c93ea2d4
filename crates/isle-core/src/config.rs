//! Scheduler configuration.
//!
//! Typically loaded from a JSON file by the application and handed to the
//! session builder.  Every field has a default, so a partial file (or `{}`)
//! is valid.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{ClockTime, IsleError, IsleResult, TimeArithmetic, Tile};

/// Where actors who live in the farmhouse are pretended to start from when a
/// full-day schedule is parsed for them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FictitiousHome {
    pub map: String,
    pub tile: Tile,
}

impl Default for FictitiousHome {
    fn default() -> Self {
        Self { map: "BusStop".into(), tile: Tile::new(0, 23) }
    }
}

/// Top-level scheduler configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Master RNG seed.  Mixed with the date to seed each day.
    pub seed: u64,

    /// Map the event takes place on; the default map of activity definitions.
    pub home_map: String,

    /// First timeslot of the event window.
    pub event_start: ClockTime,

    /// End of the event window; return schedules start here.
    pub event_end: ClockTime,

    /// Width of one timeslot, in minutes.
    pub slot_minutes: u32,

    /// Literal prefix every accepted return schedule must start with.
    pub return_prefix: String,

    /// Base of every return-schedule key (`<base>_<season>_<day>`, ...).
    pub base_key: String,

    /// Appended to the base key for married actors.
    pub married_suffix: String,

    /// Friendship points per heart.
    pub friendship_per_heart: u32,

    /// Log skipped waypoints and refused actors as warnings rather than
    /// debug events.
    pub enforce_timing: bool,

    /// The mid-day editor stops adjusting actors at this time.
    pub midday_cutoff: ClockTime,

    /// Actors the mid-day editor never adjusts (compared case-insensitively).
    pub exempt_from_adjustment: Vec<String>,

    /// First tick after which nulled farmhouse schedules are restored and the
    /// exclusion cache is dropped.
    pub fixup_after: ClockTime,

    /// Interpretation of route durations during arrival back-correction.
    pub time_arithmetic: TimeArithmetic,

    pub fictitious_home: FictitiousHome,

    /// Replaces a trailing `bed` token when parsing for farmhouse residents.
    pub bed_replacement: String,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            home_map: "IslandSouth".into(),
            event_start: ClockTime(1200),
            event_end: ClockTime(1800),
            slot_minutes: 10,
            return_prefix: "1800".into(),
            base_key: "GIRemainder".into(),
            married_suffix: "_married".into(),
            friendship_per_heart: 250,
            enforce_timing: true,
            midday_cutoff: ClockTime(900),
            exempt_from_adjustment: vec!["Gus".into()],
            fixup_after: ClockTime(615),
            time_arithmetic: TimeArithmetic::Linear,
            fictitious_home: FictitiousHome::default(),
            bed_replacement: "BusStop -1 23 3".into(),
        }
    }
}

impl SchedulerConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(text: &str) -> IsleResult<Self> {
        let config: SchedulerConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: &Path) -> IsleResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> IsleResult<()> {
        if self.event_start >= self.event_end {
            return Err(IsleError::Config(format!(
                "event_start {} must be before event_end {}",
                self.event_start, self.event_end
            )));
        }
        if self.slot_minutes == 0 {
            return Err(IsleError::Config("slot_minutes must be > 0".into()));
        }
        if self.friendship_per_heart == 0 {
            return Err(IsleError::Config("friendship_per_heart must be > 0".into()));
        }
        if ClockTime::parse(&self.return_prefix).is_none() {
            return Err(IsleError::Config(format!(
                "return_prefix {:?} is not a 1-4 digit time",
                self.return_prefix
            )));
        }
        Ok(())
    }

    /// The "last accepted time" a return-schedule parse starts from: ten
    /// units before the event ends.
    pub fn return_seed_time(&self) -> ClockTime {
        ClockTime(self.event_end.0.saturating_sub(10))
    }

    pub fn is_exempt(&self, name: &str) -> bool {
        self.exempt_from_adjustment
            .iter()
            .any(|n| n.eq_ignore_ascii_case(name))
    }
}

//! Calendar dates: 4 seasons × 28 days, 7-day weeks starting on Monday.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{IsleError, IsleResult};

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    /// Lower-case name as used in schedule keys (`spring`).
    pub fn name(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }

    pub fn index(self) -> u32 {
        match self {
            Season::Spring => 0,
            Season::Summer => 1,
            Season::Fall => 2,
            Season::Winter => 3,
        }
    }

    /// Case-insensitive lookup by name.
    pub fn parse(name: &str) -> Option<Season> {
        Season::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    const ORDER: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Three-letter name as used in schedule keys (`Mon`).
    pub fn short_name(self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }

    /// Weekday of a 1-based day of season.
    pub fn of_day(day: u8) -> Weekday {
        Self::ORDER[(day.saturating_sub(1) % 7) as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

// ── GameDate ──────────────────────────────────────────────────────────────────

/// A simulated calendar date.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct GameDate {
    pub year: u32,
    pub season: Season,
    pub day: u8,
}

impl GameDate {
    pub const DAYS_PER_SEASON: u8 = 28;

    /// Build a validated date (`year >= 1`, `1 <= day <= 28`).
    pub fn new(year: u32, season: Season, day: u8) -> IsleResult<GameDate> {
        if year == 0 {
            return Err(IsleError::Date("year must be at least 1".into()));
        }
        if !(1..=Self::DAYS_PER_SEASON).contains(&day) {
            return Err(IsleError::Date(format!(
                "day {day} outside 1..={}",
                Self::DAYS_PER_SEASON
            )));
        }
        Ok(GameDate { year, season, day })
    }

    pub fn weekday(self) -> Weekday {
        Weekday::of_day(self.day)
    }

    /// Days elapsed since spring 1 of year 1, counting that day as 1.
    pub fn ordinal(self) -> u64 {
        let per_year = 4 * Self::DAYS_PER_SEASON as u64;
        (self.year as u64 - 1) * per_year
            + self.season.index() as u64 * Self::DAYS_PER_SEASON as u64
            + self.day as u64
    }

    /// The following calendar day.
    pub fn next(self) -> GameDate {
        if self.day < Self::DAYS_PER_SEASON {
            return GameDate { day: self.day + 1, ..self };
        }
        match self.season {
            Season::Spring => GameDate { season: Season::Summer, day: 1, ..self },
            Season::Summer => GameDate { season: Season::Fall, day: 1, ..self },
            Season::Fall => GameDate { season: Season::Winter, day: 1, ..self },
            Season::Winter => GameDate { year: self.year + 1, season: Season::Spring, day: 1 },
        }
    }
}

impl fmt::Display for GameDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (year {})", self.season, self.day, self.year)
    }
}

//! Schedule clock time.
//!
//! # Design
//!
//! Schedule keys are HHMM integers (`600`, `1850`, `2400`), the same values
//! that appear in raw schedule strings.  `ClockTime` keeps that encoding so a
//! parsed key compares and prints exactly like its source text.
//!
//! Two kinds of arithmetic are needed:
//!
//! - stepping through the event window uses real clock arithmetic with hour
//!   rollover (`1250 + 10 min = 1300`);
//! - arrival back-correction subtracts a route's expected duration from the
//!   declared key.  By default ([`TimeArithmetic::Linear`]) the duration is
//!   taken to be in key units and subtracted directly (`1900 - 30 = 1870`);
//!   [`TimeArithmetic::Clock`] treats it as minutes (`1900 - 30 min = 1830`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Longest accepted textual time field.
const MAX_TIME_DIGITS: usize = 4;

// ── ClockTime ─────────────────────────────────────────────────────────────────

/// An HHMM schedule key.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClockTime(pub u32);

impl ClockTime {
    /// Parse 1–4 ASCII digits.  Anything else (signs, spaces, longer runs) is
    /// rejected.
    pub fn parse(field: &str) -> Option<ClockTime> {
        if field.is_empty()
            || field.len() > MAX_TIME_DIGITS
            || !field.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }
        field.parse().ok().map(ClockTime)
    }

    #[inline]
    pub fn hour(self) -> u32 {
        self.0 / 100
    }

    #[inline]
    pub fn minute(self) -> u32 {
        self.0 % 100
    }

    /// Minutes since midnight.  Out-of-range minute fields (e.g. `1790`)
    /// simply carry into the hour.
    #[inline]
    pub fn to_minutes(self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    #[inline]
    pub fn from_minutes(minutes: u32) -> ClockTime {
        ClockTime((minutes / 60) * 100 + minutes % 60)
    }

    /// Clock arithmetic: `self + minutes` with hour rollover.
    pub fn advance_minutes(self, minutes: u32) -> ClockTime {
        ClockTime::from_minutes(self.to_minutes() + minutes)
    }

    /// Clock arithmetic: `self - minutes`, saturating at midnight.
    pub fn rewind_minutes(self, minutes: u32) -> ClockTime {
        ClockTime::from_minutes(self.to_minutes().saturating_sub(minutes))
    }

    /// Move the key earlier by a route duration, using `mode` to interpret
    /// the duration.
    pub fn shift_back(self, units: u32, mode: TimeArithmetic) -> ClockTime {
        match mode {
            TimeArithmetic::Linear => ClockTime(self.0.saturating_sub(units)),
            TimeArithmetic::Clock => self.rewind_minutes(units),
        }
    }

    /// Iterate keys from `start` (inclusive) to `end` (exclusive) every
    /// `step_minutes`.
    pub fn slots(start: ClockTime, end: ClockTime, step_minutes: u32) -> Slots {
        Slots { next: start, end, step_minutes }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Iterator returned by [`ClockTime::slots`].
#[derive(Clone, Debug)]
pub struct Slots {
    next: ClockTime,
    end: ClockTime,
    step_minutes: u32,
}

impl Iterator for Slots {
    type Item = ClockTime;

    fn next(&mut self) -> Option<ClockTime> {
        // A zero step would never terminate.
        if self.step_minutes == 0 || self.next >= self.end {
            return None;
        }
        let current = self.next;
        self.next = current.advance_minutes(self.step_minutes);
        Some(current)
    }
}

// ── TimeArithmetic ────────────────────────────────────────────────────────────

/// How arrival back-correction interprets a route's expected duration.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeArithmetic {
    /// Subtract the duration from the HHMM key as a plain integer.
    #[default]
    Linear,
    /// Treat the duration as minutes and roll hours over.
    Clock,
}

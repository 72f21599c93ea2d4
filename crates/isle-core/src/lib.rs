//! `isle-core`: foundational types for the isle visitor scheduler.
//!
//! This crate is a dependency of every other `isle-*` crate.  It has no
//! `isle-*` dependencies of its own.
//!
//! # What lives here
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`ids`]     | `ActorId`                                                  |
//! | [`tile`]    | `Tile`, `Facing`                                           |
//! | [`time`]    | `ClockTime` (HHMM schedule keys), `TimeArithmetic`         |
//! | [`date`]    | `GameDate`, `Season`, `Weekday`                            |
//! | [`rng`]     | `SessionRng` (seeded once per simulated day)               |
//! | [`route`]   | `PathDescription`, `ResolvedSchedule`                      |
//! | [`config`]  | `SchedulerConfig`, `FictitiousHome`                        |
//! | [`error`]   | `IsleError`, `IsleResult`                                  |

pub mod config;
pub mod date;
pub mod error;
pub mod ids;
pub mod rng;
pub mod route;
pub mod tile;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{FictitiousHome, SchedulerConfig};
pub use date::{GameDate, Season, Weekday};
pub use error::{IsleError, IsleResult};
pub use ids::ActorId;
pub use rng::SessionRng;
pub use route::{PathDescription, ResolvedSchedule};
pub use tile::{Facing, Tile};
pub use time::{ClockTime, Slots, TimeArithmetic};

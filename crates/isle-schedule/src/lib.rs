//! `isle-schedule`: turning raw schedule strings into executable routes.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                        |
//! |---------------|-----------------------------------------------------------------|
//! | [`world`]     | `World` trait (accessibility, map size, rain), `StaticWorld`     |
//! | [`path`]      | `Pathfinder` trait, `PathRequest`, `GridPathfinder`              |
//! | [`token`]     | `WaypointToken`, the waypoint micro-grammar                     |
//! | [`goto`]      | `GotoExpander` trait, `EntryGotoExpander`, `NoIndirection`       |
//! | [`resolver`]  | `KeyResolver`, the return-schedule key cascade                  |
//! | [`parser`]    | `ScheduleParser`, `ParseOrigin`                                  |
//! | [`planner`]   | `ReturnPlanner`, resolve + parse + install for one actor        |
//! | [`editor`]    | `ReturnScheduleEditor`, one adjustment per clock tick           |
//! | [`error`]     | `TokenError`, `PathError`                                        |
//!
//! # Pipeline
//!
//! ```text
//! actor + date ──KeyResolver──▶ raw string ──ScheduleParser──▶ ResolvedSchedule
//!                  │                              │
//!             GotoExpander                 World + Pathfinder
//! ```
//!
//! Every recoverable condition (missing tier, unparseable waypoint, closed
//! destination, too-tight timeline) is logged and skipped; callers only ever
//! see `None` or an [`AdjustOutcome`] when nothing usable came out.

pub mod editor;
pub mod error;
pub mod goto;
pub mod parser;
pub mod path;
pub mod planner;
pub mod resolver;
pub mod token;
pub mod world;

#[cfg(test)]
mod tests;

pub use editor::ReturnScheduleEditor;
pub use error::{PathError, TokenError};
pub use goto::{EntryGotoExpander, GotoExpander, NoIndirection};
pub use parser::{ParseOrigin, ScheduleParser};
pub use path::{GridPathfinder, PathRequest, Pathfinder};
pub use planner::{AdjustOutcome, ReturnPlanner};
pub use resolver::KeyResolver;
pub use token::WaypointToken;
pub use world::{StaticWorld, World};

//! `isle-activity`: placing visitors at activity points during the event.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`chance`]     | `ChanceStrategy`, `Trait`, serialisable per-actor odds       |
//! | [`definition`] | `ActivityDefinition`, `AssignContext`, `try_assign`           |
//! | [`assignment`] | `Assignment`, `UsedPoints`, `AnimationLog`                    |
//! | [`catalog`]    | `ActivityCatalog` (resort defaults, JSON loading), `CloseDance` |
//! | [`timeslot`]   | `SlotRoles`, `TimeslotAssigner`, `TimeslotPlan`               |
//! | [`error`]      | `ActivityError`, `ActivityResult<T>`                          |
//!
//! # Timeslot passes
//!
//! Each timeslot starts from nothing: no point is used and nobody is
//! assigned.  The passes run in a fixed order, each only considering actors
//! not yet placed:
//!
//! 1. bartender at the bar point;
//! 2. drinkers, if the bartender is present;
//! 3. musician, then dancers next to the musician;
//! 4. every other visitor against the general activities, by priority;
//! 5. a forced pass over the same activities in reverse, chance 1.0.
//!
//! The only state carried between timeslots is the [`AnimationLog`].

pub mod assignment;
pub mod catalog;
pub mod chance;
pub mod definition;
pub mod error;
pub mod timeslot;


pub use assignment::{AnimationLog, Assignment, UsedPoints};
pub use catalog::{ActivityCatalog, CloseDance};
pub use chance::{ChanceStrategy, Trait};
pub use definition::{ActivityDefinition, AssignContext};
pub use error::{ActivityError, ActivityResult};
pub use timeslot::{SlotRoles, TimeslotAssigner, TimeslotPlan};

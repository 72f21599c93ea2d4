//! `isle-session`: one owner for every per-day cache.
//!
//! # Day lifecycle
//!
//! ```text
//! begin_day(date)
//!   ├─ install_full_schedule(id, raw)      host loads the day's schedules
//!   ├─ on_time_changed(t)  every tick      fix-up after `fixup_after`,
//!   │                                      one return adjustment per tick
//!   ├─ run_event(observer)                 one TimeslotPlan per slot
//!   ├─ install_island_schedules()          plans → live schedules
//!   └─ adjust_return_schedule(id)          post-event remainder
//! reset_for_new_day() / reset_for_session_end()
//! ```
//!
//! The seeded [`SessionRng`][isle_core::SessionRng] lives in the day state,
//! so a given seed, date and roster order reproduce the same day.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let mut session = SessionBuilder::new(config, roster, world, EntryGotoExpander::default(), GridPathfinder::default())
//!     .animations(animations)
//!     .build()?;
//! session.begin_day(date);
//! session.run_event(&mut NoopObserver)?;
//! session.install_island_schedules()?;
//! ```

pub mod builder;
pub mod error;
pub mod exclusion;
pub mod observer;
pub mod session;


pub use builder::SessionBuilder;
pub use error::{SessionError, SessionResult};
pub use exclusion::ExclusionRules;
pub use observer::{NoopObserver, SessionObserver};
pub use session::SchedulerSession;

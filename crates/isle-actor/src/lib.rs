//! `isle-actor`: the host-facing actor contract and actor storage.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`actor`]     | `Actor` capability trait, `AgeClass`, `Personality`, `Home` |
//! | [`villager`]  | `Villager`, plain-data `Actor` implementation             |
//! | [`roster`]    | `Roster<A>`, id-indexed actor storage with name lookup     |
//! | [`animation`] | `AnimationCatalog`, per-actor animation availability      |
//! | [`loader`]    | `load_entries_csv`, `load_entries_reader`                  |
//! | [`error`]     | `ActorError`, `ActorResult<T>`                             |
//!
//! # Design notes
//!
//! The engine never owns actors.  Everything it reads or writes goes through
//! the narrow [`Actor`] trait, so a host can back it with whatever object
//! model it already has.  [`Villager`] exists for tests and the demo.

pub mod actor;
pub mod animation;
pub mod error;
pub mod loader;
pub mod roster;
pub mod villager;

#[cfg(test)]
mod tests;

pub use actor::{Actor, AgeClass, Home, Personality};
pub use animation::AnimationCatalog;
pub use error::{ActorError, ActorResult};
pub use loader::{EntryTables, load_entries_csv, load_entries_reader};
pub use roster::Roster;
pub use villager::Villager;

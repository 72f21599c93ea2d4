//! Error types for the schedule pipeline.
//!
//! Neither type escapes the parser: both are logged and the affected
//! waypoint is skipped.

use thiserror::Error;

use isle_core::Tile;

/// Why a waypoint token could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("empty waypoint")]
    Empty,

    #[error("waypoint is {len} bytes, limit is {max}")]
    TooLong { len: usize, max: usize },

    #[error("invalid time field {0:?}")]
    BadTime(String),

    #[error("no x/y tile pair found")]
    MissingCoordinates,

    #[error("dialogue quote is never closed")]
    UnterminatedDialogue,
}

/// Why a path could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("unknown map {0:?}")]
    UnknownMap(String),

    #[error("tile {tile} is outside map {location:?}")]
    OutOfBounds { location: String, tile: Tile },
}

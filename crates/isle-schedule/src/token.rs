//! The waypoint micro-grammar.
//!
//! A raw schedule is a `/`-separated list of waypoints:
//!
//! ```text
//! [a]<time> [<location>] <x> <y> [<facing>] [<animation>] ["<dialogue>"]
//! ```
//!
//! - `a` marks an *arrival* time: the actor should be standing at the tile
//!   by `<time>`, so the departure is moved earlier by the route duration.
//! - `<time>` is 1–4 digits.
//! - `<location>` is optional; when several words precede the coordinates
//!   the last one is used.
//! - `<x>` / `<y>` are integers of at most four digits, optionally negative
//!   (off-map warp tiles such as `-1 23`).
//! - `<facing>` is a single digit.
//! - `<dialogue>` is everything between the first and the last `"`.
//!
//! Anything after the last recognised field is ignored.

use isle_core::{ClockTime, Facing, Tile};

use crate::TokenError;

/// Waypoints longer than this are rejected without being scanned.
pub const MAX_TOKEN_LEN: usize = 512;

const MAX_COORD_DIGITS: usize = 4;

/// One parsed waypoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaypointToken {
    pub arrival:   bool,
    pub time:      ClockTime,
    pub location:  Option<String>,
    pub tile:      Tile,
    pub facing:    Option<Facing>,
    pub animation: Option<String>,
    pub dialogue:  Option<String>,
}

impl WaypointToken {
    pub fn parse(text: &str) -> Result<WaypointToken, TokenError> {
        if text.len() > MAX_TOKEN_LEN {
            return Err(TokenError::TooLong { len: text.len(), max: MAX_TOKEN_LEN });
        }
        let text = text.trim();
        if text.is_empty() {
            return Err(TokenError::Empty);
        }

        let (head, dialogue) = split_dialogue(text)?;
        let fields: Vec<&str> = head.split_whitespace().collect();
        let (first, rest) = fields.split_first().ok_or(TokenError::Empty)?;

        let (arrival, time_field) = match first.strip_prefix('a') {
            Some(t) => (true, t),
            None => (false, *first),
        };
        let time = ClockTime::parse(time_field)
            .ok_or_else(|| TokenError::BadTime((*first).to_string()))?;

        let (xy, tile) = rest
            .windows(2)
            .enumerate()
            .find_map(|(i, pair)| {
                Some((i, Tile::new(parse_coord(pair[0])?, parse_coord(pair[1])?)))
            })
            .ok_or(TokenError::MissingCoordinates)?;
        let location = rest[..xy].last().map(|s| (*s).to_string());

        let mut tail = rest[xy + 2..].iter().copied().peekable();
        let facing = match tail.peek() {
            Some(&f) if f.len() == 1 && f.as_bytes()[0].is_ascii_digit() => {
                tail.next();
                Some(Facing::parse_or_default(f))
            }
            _ => None,
        };
        let animation = tail.next().map(str::to_string);

        Ok(WaypointToken { arrival, time, location, tile, facing, animation, dialogue })
    }
}

fn split_dialogue(text: &str) -> Result<(&str, Option<String>), TokenError> {
    let Some(open) = text.find('"') else {
        return Ok((text, None));
    };
    let close = text.rfind('"').filter(|&c| c > open).ok_or(TokenError::UnterminatedDialogue)?;
    Ok((&text[..open], Some(text[open + 1..close].to_string())))
}

fn parse_coord(field: &str) -> Option<i32> {
    let digits = field.strip_prefix('-').unwrap_or(field);
    if digits.is_empty()
        || digits.len() > MAX_COORD_DIGITS
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    field.parse().ok()
}

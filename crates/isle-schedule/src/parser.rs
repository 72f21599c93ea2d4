//! Raw schedule string → [`ResolvedSchedule`].
//!
//! Each waypoint goes through, in order: the time check against the last
//! accepted key, location defaulting, the accessibility check (with the
//! `<location>_Replacement` fallback), pathfinding, arrival correction and a
//! second time check.  A waypoint failing any step is logged and skipped;
//! later waypoints still parse.

use isle_actor::Actor;
use isle_core::{ClockTime, Facing, ResolvedSchedule, SchedulerConfig, Tile, TimeArithmetic};
use tracing::{debug, trace, warn};

use crate::{PathRequest, Pathfinder, WaypointToken, World};

/// Where parsing starts: the map and tile the first leg departs from and
/// the key every waypoint must come after.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOrigin {
    pub map:       String,
    pub tile:      Tile,
    pub last_time: ClockTime,
}

impl ParseOrigin {
    /// The origin of a return schedule: the event map, the departure tile of
    /// the live entry at the event end, and a key just before the event end.
    pub fn after_event(actor: &dyn Actor, config: &SchedulerConfig) -> ParseOrigin {
        let tile = actor
            .schedule()
            .and_then(|s| s.first_tile_at(config.event_end))
            .unwrap_or_else(|| actor.default_home().tile);
        ParseOrigin {
            map: config.home_map.clone(),
            tile,
            last_time: config.return_seed_time(),
        }
    }

    /// The origin of a full day's schedule: the actor's default home.
    pub fn from_home(actor: &dyn Actor) -> ParseOrigin {
        let home = actor.default_home();
        ParseOrigin { map: home.map, tile: home.tile, last_time: ClockTime(0) }
    }
}

/// Schedule-string parser over a pluggable [`Pathfinder`].
#[derive(Clone, Debug)]
pub struct ScheduleParser<P: Pathfinder> {
    pathfinder:     P,
    arithmetic:     TimeArithmetic,
    enforce_timing: bool,
}

impl<P: Pathfinder> ScheduleParser<P> {
    pub fn new(pathfinder: P, config: &SchedulerConfig) -> Self {
        Self {
            pathfinder,
            arithmetic: config.time_arithmetic,
            enforce_timing: config.enforce_timing,
        }
    }

    pub fn pathfinder(&self) -> &P {
        &self.pathfinder
    }

    /// Parse `raw` for `actor`.  `None` when no waypoint survived.
    pub fn parse(
        &self,
        raw: &str,
        actor: &dyn Actor,
        origin: &ParseOrigin,
        world: &dyn World,
    ) -> Option<ResolvedSchedule> {
        let mut schedule = ResolvedSchedule::new();
        let mut prev_map = origin.map.clone();
        let mut prev_tile = origin.tile;
        let mut last_time = origin.last_time;

        for segment in raw.split('/') {
            let token = match WaypointToken::parse(segment) {
                Ok(token) => token,
                Err(err) => {
                    debug!(actor = actor.name(), segment, %err, "unreadable waypoint skipped");
                    continue;
                }
            };
            if token.time <= last_time {
                self.too_tight(actor, token.time, last_time, raw);
                continue;
            }

            let location = token.location.clone().unwrap_or_else(|| prev_map.clone());
            let mut tile = token.tile;
            let mut facing = token.facing.unwrap_or_default();

            if !world.is_location_accessible(&location) {
                match replacement_for(actor, &location) {
                    Some((t, f)) => {
                        trace!(actor = actor.name(), location = %location, "using replacement tile");
                        tile = t;
                        facing = f;
                    }
                    None => {
                        debug!(actor = actor.name(), location = %location, "location closed, no replacement");
                        continue;
                    }
                }
            }

            let request = PathRequest {
                from_map: &prev_map,
                from: prev_tile,
                to_map: &location,
                to: tile,
                facing,
                animation: token.animation.as_deref(),
                dialogue: token.dialogue.as_deref(),
            };
            let path = match self.pathfinder.find_path(world, &request) {
                Ok(path) => path,
                Err(err) => {
                    warn!(actor = actor.name(), time = %token.time, %err, "no path for waypoint");
                    continue;
                }
            };

            let mut time = token.time;
            if token.arrival {
                time = time.shift_back(path.expected_route_time, self.arithmetic);
                if time <= last_time {
                    self.too_tight(actor, time, last_time, raw);
                    continue;
                }
            }

            if schedule.insert_after(time, path) {
                prev_map = location;
                prev_tile = tile;
                last_time = time;
            }
        }

        if schedule.is_empty() { None } else { Some(schedule) }
    }

    fn too_tight(&self, actor: &dyn Actor, time: ClockTime, last: ClockTime, raw: &str) {
        if self.enforce_timing {
            warn!(actor = actor.name(), %time, %last, raw, "waypoint not after previous; skipped");
        } else {
            debug!(actor = actor.name(), %time, %last, "waypoint not after previous; skipped");
        }
    }
}

/// `<location>_Replacement` holds `"x y [facing]"`.
fn replacement_for(actor: &dyn Actor, location: &str) -> Option<(Tile, Facing)> {
    let raw = actor.schedule_entry(&format!("{location}_Replacement"))?;
    let mut fields = raw.split_whitespace();
    let x: Option<i32> = fields.next()?.parse().ok();
    let y: Option<i32> = fields.next().and_then(|f| f.parse().ok());
    let (Some(x), Some(y)) = (x, y) else {
        warn!(actor = actor.name(), location, raw, "malformed replacement entry");
        return None;
    };
    let facing = fields.next().map(Facing::parse_or_default).unwrap_or_default();
    Some((Tile::new(x, y), facing))
}

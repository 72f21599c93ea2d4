//! Pathfinding seam and a grid implementation.
//!
//! # Pluggability
//!
//! The parser only ever talks to a [`Pathfinder`], so a host can supply its
//! own warp-aware implementation.  [`GridPathfinder`] walks Manhattan
//! L-shapes within a map and charges a flat cost for changing maps.
//!
//! # Cost units
//!
//! `expected_route_time` is in schedule time units (what arrival correction
//! subtracts from a declared key).

use isle_core::{Facing, PathDescription, Tile};

use crate::{PathError, World};

// ── PathRequest ───────────────────────────────────────────────────────────────

/// Everything a pathfinder needs for one leg.
#[derive(Clone, Copy, Debug)]
pub struct PathRequest<'a> {
    pub from_map:  &'a str,
    pub from:      Tile,
    pub to_map:    &'a str,
    pub to:        Tile,
    pub facing:    Facing,
    pub animation: Option<&'a str>,
    pub dialogue:  Option<&'a str>,
}

impl PathRequest<'_> {
    fn describe(&self, route: Vec<Tile>, expected_route_time: u32) -> PathDescription {
        PathDescription {
            location: self.to_map.to_string(),
            route,
            target: self.to,
            facing: self.facing,
            animation: self.animation.map(str::to_string),
            dialogue: self.dialogue.map(str::to_string),
            expected_route_time,
        }
    }
}

// ── Pathfinder trait ──────────────────────────────────────────────────────────

/// Pluggable route computation.
pub trait Pathfinder {
    fn find_path(&self, world: &dyn World, request: &PathRequest<'_>) -> Result<PathDescription, PathError>;
}

impl<P: Pathfinder + ?Sized> Pathfinder for &P {
    fn find_path(&self, world: &dyn World, request: &PathRequest<'_>) -> Result<PathDescription, PathError> {
        (**self).find_path(world, request)
    }
}

// ── GridPathfinder ────────────────────────────────────────────────────────────

/// Manhattan walker over rectangular maps.
///
/// Both maps must be known to the [`World`].  Tiles may sit one step
/// outside the map rectangle, where hosts place their warp points.
#[derive(Clone, Debug)]
pub struct GridPathfinder {
    /// Tiles walked per ten time units.
    pub tiles_per_slot: u32,
    /// Flat cost of changing maps.
    pub warp_cost: u32,
}

impl Default for GridPathfinder {
    fn default() -> Self {
        Self { tiles_per_slot: 20, warp_cost: 10 }
    }
}

impl GridPathfinder {
    fn check_bounds(world: &dyn World, map: &str, tile: Tile) -> Result<(), PathError> {
        let (w, h) = world
            .map_size(map)
            .ok_or_else(|| PathError::UnknownMap(map.to_string()))?;
        let inside = (-1..=w as i32).contains(&tile.x) && (-1..=h as i32).contains(&tile.y);
        if inside {
            Ok(())
        } else {
            Err(PathError::OutOfBounds { location: map.to_string(), tile })
        }
    }

    fn walk_time(&self, tiles: u32) -> u32 {
        if self.tiles_per_slot == 0 {
            return 0;
        }
        tiles.div_ceil(self.tiles_per_slot) * 10
    }
}

/// Horizontal leg first, then vertical; both endpoints included.
fn l_route(from: Tile, to: Tile) -> Vec<Tile> {
    let mut route = Vec::with_capacity(from.manhattan(to) as usize + 1);
    let mut cur = from;
    route.push(cur);
    while cur.x != to.x {
        cur = cur.offset((to.x - cur.x).signum(), 0);
        route.push(cur);
    }
    while cur.y != to.y {
        cur = cur.offset(0, (to.y - cur.y).signum());
        route.push(cur);
    }
    route
}

impl Pathfinder for GridPathfinder {
    fn find_path(&self, world: &dyn World, request: &PathRequest<'_>) -> Result<PathDescription, PathError> {
        Self::check_bounds(world, request.from_map, request.from)?;
        Self::check_bounds(world, request.to_map, request.to)?;

        if request.from_map == request.to_map {
            let route = l_route(request.from, request.to);
            let time = self.walk_time(request.from.manhattan(request.to));
            return Ok(request.describe(route, time));
        }

        // Warp points are host data; the grid walker only knows both ends.
        Ok(request.describe(vec![request.from, request.to], self.warp_cost))
    }
}

//! Host map metadata consumed by the parser and the resolver.

use rustc_hash::{FxHashMap, FxHashSet};

/// Read-only questions about the host's maps.
pub trait World {
    /// `false` when a location is closed today (renovation, event, ...).
    fn is_location_accessible(&self, location: &str) -> bool;

    /// Width and height in tiles, or `None` for an unknown map.
    fn map_size(&self, location: &str) -> Option<(u32, u32)>;

    /// Whether it is raining at `location` (always `false` indoors).
    fn is_raining_at(&self, location: &str) -> bool;
}

/// A fixed, in-memory [`World`].
///
/// Unknown locations are treated as accessible (the host only ever closes
/// specific maps) and dry.
#[derive(Clone, Debug, Default)]
pub struct StaticWorld {
    sizes:   FxHashMap<String, (u32, u32)>,
    closed:  FxHashSet<String>,
    indoors: FxHashSet<String>,
    raining: bool,
}

impl StaticWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_map(mut self, name: impl Into<String>, width: u32, height: u32) -> Self {
        self.sizes.insert(name.into(), (width, height));
        self
    }

    pub fn with_indoor_map(mut self, name: impl Into<String>, width: u32, height: u32) -> Self {
        let name = name.into();
        self.indoors.insert(name.clone());
        self.sizes.insert(name, (width, height));
        self
    }

    pub fn closed(mut self, name: impl Into<String>) -> Self {
        self.closed.insert(name.into());
        self
    }

    pub fn raining(mut self, raining: bool) -> Self {
        self.raining = raining;
        self
    }

    /// Open or close `name` in place.
    pub fn set_closed(&mut self, name: &str, closed: bool) {
        if closed {
            self.closed.insert(name.to_string());
        } else {
            self.closed.remove(name);
        }
    }
}

impl World for StaticWorld {
    fn is_location_accessible(&self, location: &str) -> bool {
        !self.closed.contains(location)
    }

    fn map_size(&self, location: &str) -> Option<(u32, u32)> {
        self.sizes.get(location).copied()
    }

    fn is_raining_at(&self, location: &str) -> bool {
        self.raining && !self.indoors.contains(location)
    }
}

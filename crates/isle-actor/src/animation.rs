//! `AnimationCatalog`: which named animations each actor can perform.
//!
//! The host keeps a single table of animation descriptions keyed
//! `"<actor name, lower-case>_<animation>"` (e.g. `emily_beach_dance`).  An
//! actor "has" an animation iff that key is present.

use rustc_hash::FxHashMap;

#[derive(Clone, Debug, Default)]
pub struct AnimationCatalog {
    descriptions: FxHashMap<String, String>,
}

impl AnimationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key under which `actor`'s `animation` is registered.
    pub fn key_for(actor: &str, animation: &str) -> String {
        format!("{}_{}", actor.to_lowercase(), animation)
    }

    /// Register a raw description under its full key.
    pub fn insert(&mut self, key: impl Into<String>, description: impl Into<String>) {
        self.descriptions.insert(key.into(), description.into());
    }

    /// Register `animation` for `actor` with an empty description.
    pub fn grant(&mut self, actor: &str, animation: &str) {
        self.insert(Self::key_for(actor, animation), String::new());
    }

    pub fn has(&self, actor: &str, animation: &str) -> bool {
        self.descriptions.contains_key(&Self::key_for(actor, animation))
    }

    pub fn description(&self, actor: &str, animation: &str) -> Option<&str> {
        self.descriptions
            .get(&Self::key_for(actor, animation))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnimationCatalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for (k, v) in iter {
            catalog.insert(k, v);
        }
        catalog
    }
}

//! The set of activities a timeslot draws from.
//!
//! [`ActivityCatalog::resort`] reproduces the island resort layout; other
//! layouts load from JSON with the same shape.

use std::path::Path;

use serde::{Deserialize, Serialize};

use isle_actor::AgeClass;
use isle_core::{Facing, Tile};

use crate::{ActivityDefinition, ActivityError, ActivityResult, ChanceStrategy, Trait};

/// Map the antisocial point lives on.
const SECLUDED_MAP: &str = "IslandSouthEast";

/// Template for the points right next to the musician.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CloseDance {
    /// Offsets from the musician's tile.
    pub offsets: Vec<Tile>,
    pub base_chance: f64,
    /// Required of every close dancer; also how dancers are recognised.
    pub animation: String,
}

impl CloseDance {
    /// A one-off definition around `centre`.
    pub fn around(&self, centre: Tile) -> ActivityDefinition {
        let points = self.offsets.iter().map(|d| centre.offset(d.x, d.y)).collect();
        ActivityDefinition::new("close_dance", points)
            .with_base_chance(self.base_chance)
            .with_animation(self.animation.clone(), true)
    }
}

/// Everything the timeslot assigner places actors with.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActivityCatalog {
    pub bar_point: Tile,
    #[serde(default)]
    pub bar_dialogue: Option<String>,
    /// Offered to visitors while a bartender is serving.
    pub drinking: ActivityDefinition,
    pub music: ActivityDefinition,
    pub close_dance: CloseDance,
    /// Fallback for dancers who miss the musician's side.
    pub dance: ActivityDefinition,
    /// Offered in order on the first pass and in reverse on the forced pass.
    pub general: Vec<ActivityDefinition>,
}

fn tiles(points: &[(i32, i32)]) -> Vec<Tile> {
    points.iter().copied().map(Tile::from).collect()
}

impl ActivityCatalog {
    /// The island resort.
    pub fn resort() -> Self {
        let lounging = ActivityDefinition::new("lounging", tiles(&[(14, 27), (17, 28), (20, 27), (23, 28)]))
            .with_base_chance(0.5)
            .with_dialogue("Resort_Towel")
            .with_animation("beach_towel", true);
        let dancing = ActivityDefinition::new("dancing", tiles(&[(22, 21), (23, 21)]))
            .with_base_chance(0.3)
            .with_chance(ChanceStrategy::for_name("Emily", 0.3, 1.0))
            .with_animation("beach_dance", true);
        let wandering = ActivityDefinition::new("wandering", tiles(&[(7, 16), (31, 24), (18, 13)]))
            .with_base_chance(0.4)
            .with_dialogue("Resort_Wander")
            .with_animation("square_3_3", false);
        let shaded = ActivityDefinition::new("shaded", tiles(&[(26, 26), (28, 29), (10, 27)]))
            .with_base_chance(0.1)
            .with_chance(ChanceStrategy::for_name("Abigail", 0.5, 0.1))
            .with_dialogue("Resort_Umbrella");
        let seated = ActivityDefinition::new("seated", tiles(&[(20, 24), (30, 29)]))
            .with_base_chance(0.3)
            .with_chance(ChanceStrategy::Predicate {
                when: Trait::Age { class: AgeClass::Adult },
                chance: 0.4,
                otherwise: 0.0,
            })
            .with_animation("beach_chair", false);
        let antisocial = ActivityDefinition::new("antisocial", tiles(&[(3, 29)]))
            .with_base_chance(0.0)
            .with_chance(ChanceStrategy::Predicate {
                when: Trait::All { of: vec![Trait::SociallyAnxious, Trait::Pessimistic] },
                chance: 0.3,
                otherwise: 0.0,
            })
            .on_map(SECLUDED_MAP);
        let shore = ActivityDefinition::new(
            "shore",
            tiles(&[(9, 33), (13, 33), (17, 33), (24, 33), (28, 32), (32, 31)]),
        )
        .with_base_chance(0.5);
        let pier = ActivityDefinition::new("pier", tiles(&[(22, 43), (22, 41)])).facing(Facing::Right);

        let drinking = ActivityDefinition::new("drinking", tiles(&[(12, 23), (15, 23)]))
            .with_base_chance(0.5)
            .with_animation("beach_drink", false)
            .with_dialogue("Resort_Bar");

        let mut music = lounging.clone();
        music.name = "music".into();

        ActivityCatalog {
            bar_point: Tile::new(14, 21),
            bar_dialogue: Some("Resort_Bartend".into()),
            drinking,
            music,
            close_dance: CloseDance {
                offsets: tiles(&[(1, 1), (-1, -1)]),
                base_chance: 0.7,
                animation: "beach_dance".into(),
            },
            dance: dancing.clone(),
            general: vec![lounging, dancing, wandering, shaded, seated, antisocial, shore, pier],
        }
    }

    pub fn from_json_str(text: &str) -> ActivityResult<Self> {
        let catalog: ActivityCatalog = serde_json::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> ActivityResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Every definition the assigner may offer, general ones last.
    pub fn definitions(&self) -> impl Iterator<Item = &ActivityDefinition> {
        [&self.drinking, &self.music, &self.dance].into_iter().chain(&self.general)
    }

    /// Probabilities must lie in `[0, 1]` and every definition needs a point.
    pub fn validate(&self) -> ActivityResult<()> {
        if !(0.0..=1.0).contains(&self.close_dance.base_chance) {
            return Err(ActivityError::Invalid(format!(
                "close dance chance {} outside [0, 1]",
                self.close_dance.base_chance
            )));
        }
        for def in self.definitions() {
            if def.points.is_empty() {
                return Err(ActivityError::Invalid(format!("activity {:?} has no points", def.name)));
            }
            if let Some(p) = def.probabilities().into_iter().find(|p| !(0.0..=1.0).contains(p)) {
                return Err(ActivityError::Invalid(format!(
                    "activity {:?} has chance {p} outside [0, 1]",
                    def.name
                )));
            }
        }
        Ok(())
    }
}

impl Default for ActivityCatalog {
    fn default() -> Self {
        Self::resort()
    }
}

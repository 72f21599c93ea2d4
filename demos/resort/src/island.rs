//! The demo's maps and cast.

use std::io::Cursor;

use anyhow::Result;

use isle_actor::{AgeClass, AnimationCatalog, Roster, Villager, load_entries_reader};
use isle_core::Tile;
use isle_schedule::StaticWorld;

// Return schedules and closed-location replacements, one row per entry.
const ENTRIES_CSV: &str = "\
actor,key,entry\n\
Leah,GIRemainder,\"1800 IslandSouth 19 30/1900 BusStop 12 20 2/2200 LeahHouse 5 6 2\"\n\
Leah,GIRemainder_rain,\"1800 IslandSouth 19 30/1900 LeahHouse 5 6 2\"\n\
Emily,GIRemainder,\"1800 IslandSouth 23 20/a1930 HaleyHouse 10 8 1 dance\"\n\
Emily,HaleyHouse_Replacement,\"9 9 2\"\n\
Elliott,GIRemainder_4,\"GOTO GIRemainder\"\n\
Elliott,GIRemainder,\"1800 IslandSouth 8 30/2000 ElliottHouse 4 5 3\"\n\
Abigail,Full,\"900 Town 30 40/1300 Town 45 60 2/2200 bed\"\n\
";

/// Maps the demo knows about.  `HaleyHouse` is closed for the day.
pub fn build_world() -> StaticWorld {
    StaticWorld::new()
        .with_map("IslandSouth", 64, 64)
        .with_map("IslandSouthEast", 40, 40)
        .with_map("Town", 120, 110)
        .with_map("BusStop", 40, 40)
        .with_indoor_map("Saloon", 40, 30)
        .with_indoor_map("SamHouse", 20, 20)
        .with_indoor_map("LeahHouse", 12, 12)
        .with_indoor_map("HaleyHouse", 20, 20)
        .with_indoor_map("ElliottHouse", 10, 10)
        .closed("HaleyHouse")
}

/// Gus and Sam staff the resort; the rest visit.  Abigail lives at the farm.
pub fn build_cast() -> Result<(Roster<Villager>, AnimationCatalog)> {
    let mut tables = load_entries_reader(Cursor::new(ENTRIES_CSV))?;
    let mut entries = |name: &str| tables.remove(name).unwrap_or_default();

    let villagers = vec![
        Villager::new("Gus").islander("Resort").with_home("Saloon", Tile::new(20, 20)),
        Villager::new("Sam")
            .with_age(AgeClass::Teen)
            .islander("Resort")
            .with_home("SamHouse", Tile::new(4, 4)),
        Villager::new("Emily")
            .islander("Resort")
            .with_friendship(1_200)
            .with_entries(entries("Emily")),
        Villager::new("Leah")
            .islander("Resort")
            .with_friendship(2_000)
            .with_home("LeahHouse", Tile::new(5, 6))
            .with_entries(entries("Leah")),
        Villager::new("Elliott")
            .islander("Resort")
            .with_friendship(1_000)
            .with_entries(entries("Elliott")),
        Villager::new("Linus")
            .with_personality(true, true)
            .islander("Resort"),
        Villager::new("Vincent").with_age(AgeClass::Child).islander("Resort"),
        Villager::new("Abigail")
            .with_home("FarmHouse", Tile::new(5, 5))
            .with_entries(entries("Abigail")),
    ];
    let roster = Roster::from_actors(villagers)?;

    let mut animations = AnimationCatalog::new();
    animations.grant("Sam", "beach_towel");
    animations.grant("Emily", "beach_dance");
    animations.grant("Leah", "beach_towel");
    animations.grant("Vincent", "beach_towel");
    Ok((roster, animations))
}

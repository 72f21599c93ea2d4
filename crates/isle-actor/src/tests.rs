//! Unit tests for isle-actor.

use isle_core::{ActorId, Tile};

use crate::{Actor, AgeClass, Home, Roster, Villager};

fn trio() -> Roster<Villager> {
    Roster::from_actors([
        Villager::new("Emily"),
        Villager::new("Sam").with_age(AgeClass::Teen),
        Villager::new("Vincent").with_age(AgeClass::Child),
    ])
    .unwrap()
}

#[cfg(test)]
mod roster {
    use super::*;
    use crate::ActorError;

    #[test]
    fn ids_follow_insertion_order() {
        let roster = trio();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.id_of("Emily"), Some(ActorId(0)));
        assert_eq!(roster.id_of("Vincent"), Some(ActorId(2)));
        assert_eq!(roster.ids().collect::<Vec<_>>(), vec![ActorId(0), ActorId(1), ActorId(2)]);
    }

    #[test]
    fn name_lookup_ignores_case() {
        let roster = trio();
        assert_eq!(roster.id_of("sAM"), Some(ActorId(1)));
        assert_eq!(roster.name_of(ActorId(1)), Some("Sam"));
        assert!(roster.id_of("Haley").is_none());
        assert!(roster.get(ActorId(9)).is_none());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut roster = trio();
        let err = roster.push(Villager::new("EMILY")).unwrap_err();
        assert!(matches!(err, ActorError::DuplicateName(ref n) if n == "EMILY"));
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn get_mut_writes_through() {
        let mut roster = trio();
        let id = roster.id_of("Sam").unwrap();
        roster.get_mut(id).unwrap().schedule_delay = 3.5;
        roster.get_mut(id).unwrap().reset_schedule_delay();
        assert_eq!(roster.get(id).unwrap().schedule_delay, 0.0);
    }
}

#[cfg(test)]
mod villager {
    use super::*;

    #[test]
    fn entry_lookup() {
        let v = Villager::new("Leah").with_entry("GIRemainder", "1800 Town 1 1");
        assert_eq!(v.schedule_entry("GIRemainder"), Some("1800 Town 1 1"));
        assert!(v.has_schedule_entry("GIRemainder"));
        assert!(!v.has_schedule_entry("GIRemainder_rain"));
    }

    #[test]
    fn default_home_roundtrip() {
        let mut v = Villager::new("Vincent").with_home("FarmHouse", Tile::new(5, 5));
        assert_eq!(v.default_home(), Home::new("FarmHouse", Tile::new(5, 5)));
        v.set_default_home(Home::new("BusStop", Tile::new(0, 23)));
        assert_eq!(v.default_home().map, "BusStop");
    }

    #[test]
    fn age_codes() {
        assert_eq!(AgeClass::from_code(0), Some(AgeClass::Adult));
        assert_eq!(AgeClass::from_code(2), Some(AgeClass::Child));
        assert_eq!(AgeClass::from_code(3), None);
    }
}

#[cfg(test)]
mod animation {
    use crate::AnimationCatalog;

    #[test]
    fn keys_are_lowercased_names() {
        let mut catalog = AnimationCatalog::new();
        catalog.grant("Emily", "beach_dance");
        assert!(catalog.has("Emily", "beach_dance"));
        assert!(catalog.has("emily", "beach_dance"));
        assert!(!catalog.has("Emily", "beach_towel"));
        assert!(!catalog.has("Sam", "beach_dance"));
    }

    #[test]
    fn collects_from_pairs() {
        let catalog: AnimationCatalog =
            [("sam_beach_towel", "10 11 12"), ("abigail_beach_dance", "")].into_iter().collect();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.description("Sam", "beach_towel"), Some("10 11 12"));
    }
}

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use crate::{ActorError, load_entries_csv, load_entries_reader};

    const CSV: &str = "\
actor,key,entry
Leah,GIRemainder,\"1800 Town 10 10/1900 LeahHouse 5 6 2\"
Leah,Saloon_Replacement,9 9 2
Sam,GIRemainder_married,1800 Beach 3 3
";

    #[test]
    fn groups_rows_by_actor() {
        let tables = load_entries_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(
            tables["Leah"]["GIRemainder"],
            "1800 Town 10 10/1900 LeahHouse 5 6 2"
        );
        assert_eq!(tables["Leah"]["Saloon_Replacement"], "9 9 2");
        assert_eq!(tables["Sam"].len(), 1);
    }

    #[test]
    fn duplicate_keys_error() {
        let csv = "actor,key,entry\nLeah,a,1\nLeah,a,2\n";
        let err = load_entries_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ActorError::Parse(_)));
    }

    #[test]
    fn missing_column_errors() {
        let csv = "actor,key\nLeah,a\n";
        assert!(load_entries_reader(Cursor::new(csv)).is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();
        let tables = load_entries_csv(file.path()).unwrap();
        assert!(tables.contains_key("Sam"));
    }
}

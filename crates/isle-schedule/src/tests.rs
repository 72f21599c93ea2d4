//! Unit tests for isle-schedule.

use isle_actor::{Actor, Villager};
use isle_core::{
    ClockTime, Facing, GameDate, PathDescription, ResolvedSchedule, SchedulerConfig, Season, Tile,
    TimeArithmetic,
};

use crate::{
    AdjustOutcome, EntryGotoExpander, GotoExpander, GridPathfinder, KeyResolver, NoIndirection,
    ParseOrigin, PathError, PathRequest, Pathfinder, ReturnPlanner, ReturnScheduleEditor,
    ScheduleParser, StaticWorld, TokenError, WaypointToken, World,
};

/// Straight hop from → to at a fixed cost; never fails.
struct FixedCost(u32);

impl Pathfinder for FixedCost {
    fn find_path(&self, _world: &dyn World, req: &PathRequest<'_>) -> Result<PathDescription, PathError> {
        Ok(PathDescription {
            location: req.to_map.to_string(),
            route: vec![req.from, req.to],
            target: req.to,
            facing: req.facing,
            animation: req.animation.map(str::to_string),
            dialogue: req.dialogue.map(str::to_string),
            expected_route_time: self.0,
        })
    }
}

fn spring(day: u8) -> GameDate {
    GameDate::new(1, Season::Spring, day).unwrap()
}

fn leg(location: &str, from: Tile, to: Tile) -> PathDescription {
    PathDescription {
        location: location.into(),
        route: vec![from, to],
        target: to,
        facing: Facing::Down,
        animation: None,
        dialogue: None,
        expected_route_time: 0,
    }
}

/// A live island schedule ending at 1800, departing (7, 7) for the last leg.
fn island_day() -> ResolvedSchedule {
    let mut s = ResolvedSchedule::new();
    s.insert(ClockTime(1200), leg("IslandSouth", Tile::new(1, 1), Tile::new(14, 27)));
    s.insert(ClockTime(1800), leg("IslandSouth", Tile::new(7, 7), Tile::new(20, 30)));
    s
}

fn visitor(name: &str) -> Villager {
    Villager::new(name).islander("Resort").with_schedule(island_day())
}

fn parser(cost: u32) -> ScheduleParser<FixedCost> {
    ScheduleParser::new(FixedCost(cost), &SchedulerConfig::default())
}

fn seed_origin() -> ParseOrigin {
    ParseOrigin { map: "IslandSouth".into(), tile: Tile::new(0, 0), last_time: ClockTime(1790) }
}

#[cfg(test)]
mod token {
    use super::*;

    #[test]
    fn full_waypoint() {
        let t = WaypointToken::parse(r#"a1900 Beach 10 -1 3 sit "See you, @!""#).unwrap();
        assert!(t.arrival);
        assert_eq!(t.time, ClockTime(1900));
        assert_eq!(t.location.as_deref(), Some("Beach"));
        assert_eq!(t.tile, Tile::new(10, -1));
        assert_eq!(t.facing, Some(Facing::Left));
        assert_eq!(t.animation.as_deref(), Some("sit"));
        assert_eq!(t.dialogue.as_deref(), Some("See you, @!"));
    }

    #[test]
    fn facing_digit_is_consumed_before_the_animation() {
        let t = WaypointToken::parse("1800 Beach 4 5 1 beach_towel").unwrap();
        assert_eq!(t.facing, Some(Facing::Right));
        assert_eq!(t.animation.as_deref(), Some("beach_towel"));

        let t = WaypointToken::parse("1800 Beach 4 5 12").unwrap();
        assert_eq!(t.facing, None);
        assert_eq!(t.animation.as_deref(), Some("12"));
    }

    #[test]
    fn location_is_optional() {
        let t = WaypointToken::parse("1850 22 41 2").unwrap();
        assert!(!t.arrival);
        assert_eq!(t.location, None);
        assert_eq!(t.tile, Tile::new(22, 41));
        assert_eq!(t.facing, Some(Facing::Down));
        assert_eq!(t.animation, None);
    }

    #[test]
    fn last_word_before_coordinates_is_the_location() {
        let t = WaypointToken::parse("1800 Pelican Town 5 6").unwrap();
        assert_eq!(t.location.as_deref(), Some("Town"));
        assert_eq!(t.facing, None);
    }

    #[test]
    fn animation_without_facing() {
        let t = WaypointToken::parse("1800 Town 5 6 sit_down").unwrap();
        assert_eq!(t.facing, None);
        assert_eq!(t.animation.as_deref(), Some("sit_down"));
    }

    #[test]
    fn malformed_waypoints() {
        assert_eq!(WaypointToken::parse("   "), Err(TokenError::Empty));
        assert_eq!(WaypointToken::parse("1800 bed"), Err(TokenError::MissingCoordinates));
        assert_eq!(WaypointToken::parse("18x0 5 5"), Err(TokenError::BadTime("18x0".into())));
        assert_eq!(WaypointToken::parse("12345 5 5"), Err(TokenError::BadTime("12345".into())));
        assert_eq!(WaypointToken::parse("1800 5 5 \"oops"), Err(TokenError::UnterminatedDialogue));
        assert_eq!(WaypointToken::parse("1800 Town 12345 6"), Err(TokenError::MissingCoordinates));
    }

    #[test]
    fn oversized_waypoint_is_rejected() {
        let long = format!("1800 Town 5 5 \"{}\"", "x".repeat(600));
        assert!(matches!(WaypointToken::parse(&long), Err(TokenError::TooLong { max: 512, .. })));
    }
}

#[cfg(test)]
mod path {
    use super::*;

    fn world() -> StaticWorld {
        StaticWorld::new().with_map("IslandSouth", 40, 45).with_map("BusStop", 35, 30)
    }

    fn request<'a>(from_map: &'a str, from: Tile, to_map: &'a str, to: Tile) -> PathRequest<'a> {
        PathRequest { from_map, from, to_map, to, facing: Facing::Up, animation: Some("wave"), dialogue: None }
    }

    #[test]
    fn same_map_walks_an_l_shape() {
        let p = GridPathfinder::default()
            .find_path(&world(), &request("IslandSouth", Tile::new(0, 0), "IslandSouth", Tile::new(3, 2)))
            .unwrap();
        assert_eq!(p.route.len(), 6);
        assert_eq!(p.start_tile(), Some(Tile::new(0, 0)));
        assert_eq!(p.route.last(), Some(&Tile::new(3, 2)));
        assert_eq!(p.route[3], Tile::new(3, 0));
        assert_eq!(p.expected_route_time, 10);
        assert_eq!(p.animation.as_deref(), Some("wave"));
        assert_eq!(p.facing, Facing::Up);
    }

    #[test]
    fn walk_time_rounds_up_per_slot() {
        let p = GridPathfinder::default()
            .find_path(&world(), &request("IslandSouth", Tile::new(0, 0), "IslandSouth", Tile::new(21, 0)))
            .unwrap();
        assert_eq!(p.expected_route_time, 20);
    }

    #[test]
    fn changing_maps_costs_a_warp() {
        let p = GridPathfinder::default()
            .find_path(&world(), &request("IslandSouth", Tile::new(5, 5), "BusStop", Tile::new(-1, 23)))
            .unwrap();
        assert_eq!(p.location, "BusStop");
        assert_eq!(p.route, vec![Tile::new(5, 5), Tile::new(-1, 23)]);
        assert_eq!(p.expected_route_time, 10);
    }

    #[test]
    fn unknown_and_out_of_bounds_targets_fail() {
        let g = GridPathfinder::default();
        let w = world();
        assert_eq!(
            g.find_path(&w, &request("IslandSouth", Tile::new(0, 0), "Nowhere", Tile::new(1, 1))),
            Err(PathError::UnknownMap("Nowhere".into()))
        );
        assert!(matches!(
            g.find_path(&w, &request("IslandSouth", Tile::new(0, 0), "BusStop", Tile::new(-2, 1))),
            Err(PathError::OutOfBounds { .. })
        ));
    }
}

#[cfg(test)]
mod world {
    use super::*;

    #[test]
    fn rain_skips_indoor_maps() {
        let w = StaticWorld::new().with_indoor_map("Saloon", 30, 20).raining(true);
        assert!(w.is_raining_at("Town"));
        assert!(!w.is_raining_at("Saloon"));
        assert_eq!(w.map_size("Saloon"), Some((30, 20)));
    }

    #[test]
    fn closing_and_reopening() {
        let mut w = StaticWorld::new().closed("Saloon");
        assert!(!w.is_location_accessible("Saloon"));
        assert!(w.is_location_accessible("Town"));
        w.set_closed("Saloon", false);
        assert!(w.is_location_accessible("Saloon"));
    }
}

#[cfg(test)]
mod goto {
    use super::*;

    #[test]
    fn follows_chains_and_season() {
        let v = Villager::new("Leah")
            .with_entry("spring", "GOTO base")
            .with_entry("base", "1800 Town 1 1");
        let out = EntryGotoExpander::default().expand(&v, spring(3), "GOTO season");
        assert_eq!(out.as_deref(), Some("1800 Town 1 1"));
    }

    #[test]
    fn cycles_and_missing_targets_fail() {
        let v = Villager::new("Leah").with_entry("a", "GOTO b").with_entry("b", "GOTO a");
        let g = EntryGotoExpander::default();
        assert_eq!(g.expand(&v, spring(3), "GOTO a"), None);
        assert_eq!(g.expand(&v, spring(3), "GOTO missing"), None);
    }

    #[test]
    fn plain_strings_pass_through() {
        let v = Villager::new("Leah");
        assert_eq!(EntryGotoExpander::default().expand(&v, spring(3), "1800 1 1").as_deref(), Some("1800 1 1"));
        assert_eq!(NoIndirection.expand(&v, spring(3), "GOTO a").as_deref(), Some("GOTO a"));
    }
}

#[cfg(test)]
mod resolver {
    use super::*;

    fn resolver() -> KeyResolver<EntryGotoExpander> {
        KeyResolver::new(EntryGotoExpander::default(), &SchedulerConfig::default())
    }

    #[test]
    fn heart_levels_are_even_and_descending() {
        let r = resolver();
        assert_eq!(r.heart_levels(1_500), vec![6, 4, 2]);
        assert_eq!(r.heart_levels(1_750), vec![6, 4, 2]);
        assert_eq!(r.heart_levels(499), Vec::<u32>::new());
        assert_eq!(r.heart_levels(500), vec![2]);
    }

    #[test]
    fn cascade_order() {
        let v = Villager::new("Leah").married().with_friendship(1_000);
        let keys = resolver().candidate_keys(&v, spring(5), true);
        let expected = [
            "GIRemainder_married_spring_5",
            "GIRemainder_married_5_4",
            "GIRemainder_married_5_2",
            "GIRemainder_married_5",
            "GIRemainder_married_rain",
            "GIRemainder_married_spring_Fri4",
            "GIRemainder_married_spring_Fri2",
            "GIRemainder_married_spring_Fri",
            "GIRemainder_married_Fri4",
            "GIRemainder_married_Fri2",
            "GIRemainder_married_Fri",
            "GIRemainder_married_4",
            "GIRemainder_married_2",
            "GIRemainder_married_spring",
            "GIRemainder_married",
        ];
        assert_eq!(keys, expected);
        assert!(!resolver().candidate_keys(&v, spring(5), false).iter().any(|k| k.ends_with("_rain")));
    }

    #[test]
    fn bare_base_key_is_the_last_resort() {
        let v = Villager::new("Leah").with_entry("GIRemainder", "1800 Town 1 1");
        let got = resolver().resolve(&v, spring(1), &StaticWorld::new());
        assert_eq!(got.as_deref(), Some("1800 Town 1 1"));
    }

    #[test]
    fn season_and_day_beats_day() {
        let v = Villager::new("Leah")
            .with_entry("GIRemainder_5", "1800 Day 1 1")
            .with_entry("GIRemainder_spring_5", "1800 SeasonDay 1 1");
        let got = resolver().resolve(&v, spring(5), &StaticWorld::new());
        assert_eq!(got.as_deref(), Some("1800 SeasonDay 1 1"));
    }

    #[test]
    fn entries_not_starting_at_event_end_fall_through() {
        let v = Villager::new("Leah")
            .with_entry("GIRemainder_spring_5", "1900 Town 1 1")
            .with_entry("GIRemainder", "1800 Beach 2 2");
        let got = resolver().resolve(&v, spring(5), &StaticWorld::new());
        assert_eq!(got.as_deref(), Some("1800 Beach 2 2"));
    }

    #[test]
    fn rain_tier_needs_rain_where_the_actor_stands() {
        let v = Villager::new("Leah")
            .with_entry("GIRemainder_rain", "1800 Rainy 1 1")
            .with_entry("GIRemainder", "1800 Dry 1 1");
        let wet = StaticWorld::new().raining(true);
        assert_eq!(resolver().resolve(&v, spring(5), &wet).as_deref(), Some("1800 Rainy 1 1"));

        let indoors = StaticWorld::new().with_indoor_map("Town", 10, 10).raining(true);
        assert_eq!(resolver().resolve(&v, spring(5), &indoors).as_deref(), Some("1800 Dry 1 1"));
    }

    #[test]
    fn goto_entries_are_expanded_before_the_prefix_check() {
        let v = Villager::new("Leah")
            .with_entry("GIRemainder_Fri", "GOTO shared")
            .with_entry("shared", "1800 Shared 3 3");
        let got = resolver().resolve(&v, spring(5), &StaticWorld::new());
        assert_eq!(got.as_deref(), Some("1800 Shared 3 3"));
    }

    #[test]
    fn nothing_matches() {
        let v = Villager::new("Leah").with_entry("GIRemainder", "0600 Town 1 1");
        assert_eq!(resolver().resolve(&v, spring(5), &StaticWorld::new()), None);
    }

    #[test]
    fn resolution_is_idempotent() {
        let v = Villager::new("Leah")
            .with_friendship(2_000)
            .with_entry("GIRemainder_spring_Fri8", "1800 A 1 1")
            .with_entry("GIRemainder_8", "1800 B 1 1");
        let r = resolver();
        let w = StaticWorld::new();
        let first = r.resolve(&v, spring(5), &w);
        assert_eq!(first.as_deref(), Some("1800 A 1 1"));
        assert_eq!(r.resolve(&v, spring(5), &w), first);
    }
}

#[cfg(test)]
mod parser {
    use super::*;

    #[test]
    fn location_defaults_to_the_previous_map() {
        let v = visitor("Leah");
        let s = parser(0)
            .parse("1850 22 41 2/1900 BusStop 0 23 2", &v, &seed_origin(), &StaticWorld::new())
            .unwrap();
        assert_eq!(s.times().collect::<Vec<_>>(), vec![ClockTime(1850), ClockTime(1900)]);
        assert_eq!(s.get(ClockTime(1850)).unwrap().location, "IslandSouth");
        let last = s.get(ClockTime(1900)).unwrap();
        assert_eq!(last.location, "BusStop");
        assert_eq!(last.start_tile(), Some(Tile::new(22, 41)));
    }

    #[test]
    fn arrival_is_moved_earlier_by_route_time() {
        let v = visitor("Leah");
        let s = parser(30).parse("a1900 10 10", &v, &seed_origin(), &StaticWorld::new()).unwrap();
        assert_eq!(s.times().collect::<Vec<_>>(), vec![ClockTime(1870)]);

        let clock = SchedulerConfig { time_arithmetic: TimeArithmetic::Clock, ..SchedulerConfig::default() };
        let s = ScheduleParser::new(FixedCost(30), &clock)
            .parse("a1900 10 10", &v, &seed_origin(), &StaticWorld::new())
            .unwrap();
        assert_eq!(s.times().collect::<Vec<_>>(), vec![ClockTime(1830)]);
    }

    #[test]
    fn corrected_arrival_must_still_follow_the_previous_key() {
        let v = visitor("Leah");
        assert_eq!(parser(30).parse("a1800 1 1", &v, &seed_origin(), &StaticWorld::new()), None);
    }

    #[test]
    fn out_of_order_waypoints_are_skipped_not_fatal() {
        let v = visitor("Leah");
        let s = parser(0)
            .parse("1700 1 1/1850 2 2/1840 3 3/1900 4 4", &v, &seed_origin(), &StaticWorld::new())
            .unwrap();
        assert_eq!(s.times().collect::<Vec<_>>(), vec![ClockTime(1850), ClockTime(1900)]);
    }

    #[test]
    fn closed_location_uses_its_replacement() {
        let v = visitor("Leah").with_entry("Saloon_Replacement", "9 9 1");
        let world = StaticWorld::new().closed("Saloon");
        let s = parser(0).parse("1900 Saloon 5 5 2", &v, &seed_origin(), &world).unwrap();
        let p = s.get(ClockTime(1900)).unwrap();
        assert_eq!(p.target, Tile::new(9, 9));
        assert_eq!(p.facing, Facing::Right);
    }

    #[test]
    fn closed_location_without_replacement_is_skipped() {
        let v = visitor("Leah").with_entry("Beach_Replacement", "not numbers");
        let world = StaticWorld::new().closed("Saloon").closed("Beach");
        let s = parser(0)
            .parse("1850 Saloon 5 5/1900 Beach 1 1/2000 Town 3 3", &v, &seed_origin(), &world)
            .unwrap();
        assert_eq!(s.times().collect::<Vec<_>>(), vec![ClockTime(2000)]);
    }

    #[test]
    fn pathfinding_failures_skip_the_waypoint() {
        let v = visitor("Leah");
        let world = StaticWorld::new().with_map("IslandSouth", 40, 45);
        let p = ScheduleParser::new(GridPathfinder::default(), &SchedulerConfig::default());
        let s = p
            .parse("1850 Nowhere 1 1/1900 IslandSouth 2 2", &v, &seed_origin(), &world)
            .unwrap();
        assert_eq!(s.times().collect::<Vec<_>>(), vec![ClockTime(1900)]);
        assert_eq!(s.get(ClockTime(1900)).unwrap().start_tile(), Some(Tile::new(0, 0)));
    }

    #[test]
    fn unreadable_segments_are_skipped() {
        let v = visitor("Leah");
        let s = parser(0).parse("1850 bed/1900 Town 1 1 sit \"Bye\"/", &v, &seed_origin(), &StaticWorld::new()).unwrap();
        assert_eq!(s.len(), 1);
        let p = s.get(ClockTime(1900)).unwrap();
        assert_eq!(p.animation.as_deref(), Some("sit"));
        assert_eq!(p.dialogue.as_deref(), Some("Bye"));
    }

    #[test]
    fn after_event_origin_starts_from_the_live_event_end_leg() {
        let v = visitor("Leah");
        let origin = ParseOrigin::after_event(&v, &SchedulerConfig::default());
        assert_eq!(origin.map, "IslandSouth");
        assert_eq!(origin.tile, Tile::new(7, 7));
        assert_eq!(origin.last_time, ClockTime(1790));

        let homeless = Villager::new("Kent").with_home("SamHouse", Tile::new(4, 4));
        assert_eq!(ParseOrigin::after_event(&homeless, &SchedulerConfig::default()).tile, Tile::new(4, 4));
    }
}

#[cfg(test)]
mod planner {
    use super::*;

    fn planner() -> ReturnPlanner<EntryGotoExpander, FixedCost> {
        ReturnPlanner::new(&SchedulerConfig::default(), EntryGotoExpander::default(), FixedCost(0))
    }

    #[test]
    fn remainder_is_merged_after_the_event() {
        let mut v = visitor("Leah").with_entry("GIRemainder", "1800 IslandSouth 5 5/1900 BusStop 0 23 2");
        let out = planner().adjust_actor(&mut v, spring(5), &StaticWorld::new());
        assert_eq!(out, AdjustOutcome::Adjusted { waypoints: 2 });

        let s = v.schedule().unwrap();
        assert_eq!(s.times().collect::<Vec<_>>(), vec![ClockTime(1200), ClockTime(1800), ClockTime(1900)]);
        assert_eq!(s.get(ClockTime(1800)).unwrap().target, Tile::new(5, 5));
        assert_eq!(s.get(ClockTime(1800)).unwrap().start_tile(), Some(Tile::new(7, 7)));
    }

    #[test]
    fn refusals() {
        let p = planner();
        let w = StaticWorld::new();
        let entry = ("GIRemainder", "1800 Town 1 1");

        let mut local = Villager::new("Leah").with_schedule(island_day()).with_entry(entry.0, entry.1);
        assert_eq!(p.adjust_actor(&mut local, spring(5), &w), AdjustOutcome::NotIslander);

        let mut ghost = visitor("Leah").with_entry(entry.0, entry.1);
        ghost.invisible = true;
        assert_eq!(p.adjust_actor(&mut ghost, spring(5), &w), AdjustOutcome::Invisible);

        let mut idle = Villager::new("Leah").islander("Resort").with_entry(entry.0, entry.1);
        assert_eq!(p.adjust_actor(&mut idle, spring(5), &w), AdjustOutcome::NoLiveSchedule);

        let mut late = visitor("Leah").with_entry(entry.0, entry.1);
        late.schedule.as_mut().unwrap().insert(ClockTime(2000), leg("Town", Tile::new(0, 0), Tile::new(1, 1)));
        assert_eq!(p.adjust_actor(&mut late, spring(5), &w), AdjustOutcome::NotEndingAtEvent);

        let mut keyless = visitor("Leah");
        assert_eq!(p.adjust_actor(&mut keyless, spring(5), &w), AdjustOutcome::NoReturnSchedule);
        assert_eq!(keyless.schedule, Some(island_day()));

        let mut broken = visitor("Leah").with_entry("GIRemainder", "1800 bed");
        assert_eq!(p.adjust_actor(&mut broken, spring(5), &w), AdjustOutcome::NothingParsed);
        assert_eq!(broken.schedule, Some(island_day()));
    }

    #[test]
    fn farmhouse_residents_parse_from_the_fictitious_home() {
        let mut v = Villager::new("Abigail").with_home("FarmHouse", Tile::new(5, 5));
        let s = planner()
            .install_full_schedule(&mut v, "900 Town 3 3/2200 bed", &StaticWorld::new())
            .unwrap();
        assert_eq!(s.get(ClockTime(900)).unwrap().start_tile(), Some(Tile::new(0, 23)));
        let bed = s.get(ClockTime(2200)).unwrap();
        assert_eq!(bed.location, "BusStop");
        assert_eq!(bed.target, Tile::new(-1, 23));
        assert_eq!(bed.facing, Facing::Left);
        assert_eq!(v.home.map, "FarmHouse");
        assert_eq!(v.schedule.as_ref(), Some(&s));
    }

    #[test]
    fn married_residents_keep_their_home() {
        let mut v = Villager::new("Abigail").married().with_home("FarmHouse", Tile::new(5, 5));
        let s = planner()
            .install_full_schedule(&mut v, "900 Town 3 3/2200 bed", &StaticWorld::new())
            .unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s.get(ClockTime(900)).unwrap().start_tile(), Some(Tile::new(5, 5)));
    }

    #[test]
    fn planned_return_leaves_the_actor_untouched() {
        let v = visitor("Leah").with_entry("GIRemainder", "1800 IslandSouth 5 5/1900 BusStop 0 23 2");
        let remainder = planner().plan_return(&v, spring(5), &StaticWorld::new()).unwrap();
        assert_eq!(remainder.times().collect::<Vec<_>>(), vec![ClockTime(1800), ClockTime(1900)]);
        assert_eq!(remainder.get(ClockTime(1800)).unwrap().start_tile(), Some(Tile::new(7, 7)));
        assert_eq!(v.schedule, Some(island_day()));

        assert_eq!(planner().plan_return(&visitor("Leah"), spring(5), &StaticWorld::new()), None);
    }

    #[test]
    fn failed_install_keeps_prior_state() {
        let mut v = Villager::new("Abigail")
            .with_home("FarmHouse", Tile::new(5, 5))
            .with_schedule(island_day());
        assert_eq!(planner().install_full_schedule(&mut v, "nonsense", &StaticWorld::new()), None);
        assert_eq!(v.schedule, Some(island_day()));
        assert_eq!(v.home.map, "FarmHouse");
        assert_eq!(v.home.tile, Tile::new(5, 5));
    }
}

#[cfg(test)]
mod editor {
    use super::*;
    use isle_actor::Roster;

    #[test]
    fn one_visitor_per_tick_before_cutoff() {
        let mut roster = Roster::from_actors([
            visitor("Gus").with_entry("GIRemainder", "1800 Town 1 1"),
            visitor("Leah").with_entry("GIRemainder", "1800 Town 1 1"),
            visitor("Sam"),
        ])
        .unwrap();
        let ids: Vec<_> = roster.ids().collect();
        let planner = ReturnPlanner::new(&SchedulerConfig::default(), NoIndirection, FixedCost(0));
        let world = StaticWorld::new();
        let mut editor = ReturnScheduleEditor::new();

        let first = editor.on_time_changed(ClockTime(610), spring(5), &mut roster, &ids, &planner, &world);
        assert_eq!(first, Some((ids[1], AdjustOutcome::Adjusted { waypoints: 1 })));
        let second = editor.on_time_changed(ClockTime(620), spring(5), &mut roster, &ids, &planner, &world);
        assert_eq!(second, Some((ids[2], AdjustOutcome::NoReturnSchedule)));
        assert_eq!(editor.on_time_changed(ClockTime(630), spring(5), &mut roster, &ids, &planner, &world), None);
        assert!(!editor.was_altered(ids[0]));
        assert_eq!(editor.altered_count(), 2);

        editor.reset();
        assert_eq!(editor.on_time_changed(ClockTime(900), spring(5), &mut roster, &ids, &planner, &world), None);
        assert_eq!(editor.altered_count(), 0);
    }
}

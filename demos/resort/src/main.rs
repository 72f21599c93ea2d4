//! resort: one island day for a small cast.
//!
//! Assigns every ten-minute slot of the resort event, turns the plans into
//! live schedules, lets the morning ticks graft each visitor's return trip
//! onto the end of their day, and prints where everyone finishes.
//!
//! Set `RUST_LOG=isle_activity=trace` to watch individual placements.

mod island;

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use isle_activity::TimeslotPlan;
use isle_actor::Actor;
use isle_core::{ClockTime, GameDate, SchedulerConfig, Season};
use isle_schedule::{EntryGotoExpander, GridPathfinder};
use isle_session::{ExclusionRules, SessionBuilder, SessionObserver};

use island::{build_cast, build_world};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:         u64 = 42;
const MORNING_FROM: u32 = 600;
const MORNING_TO:   u32 = 900;

// Linus never visits on Sundays; Vincent skips all of fall and the 13th.
const EXCLUSIONS_JSON: &str = r#"{ "Linus": "Sun", "Vincent": "fall, 13" }"#;

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct SlotCounter {
    slots:      usize,
    placements: usize,
    dancing:    usize,
}

impl SessionObserver for SlotCounter {
    fn on_slot_end(&mut self, plan: &TimeslotPlan) {
        self.slots += 1;
        self.placements += plan.len();
        self.dancing += plan.synchronized.len();
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .compact()
        .init();

    let date = GameDate::new(1, Season::Summer, 4)?;
    println!("=== resort: island day {date:?} ===");

    let (roster, animations) = build_cast()?;
    let config = SchedulerConfig { seed: SEED, ..SchedulerConfig::default() };
    let mut session = SessionBuilder::new(
        config,
        roster,
        build_world(),
        EntryGotoExpander::default(),
        GridPathfinder::default(),
    )
    .animations(animations)
    .exclusions(ExclusionRules::from_json_str(EXCLUSIONS_JSON)?)
    .build()?;

    session.begin_day(date);
    println!("Islanders: {}", session.islanders().join(", "));

    // Abigail's farmhouse day is parsed from the bus stop.
    let abigail = session.roster().id_of("Abigail").context("Abigail missing from the cast")?;
    let full = session
        .roster()
        .get(abigail)
        .and_then(|a| a.schedule_entry("Full"))
        .map(str::to_string)
        .context("Abigail has no full-day entry")?;
    session.install_full_schedule(abigail, &full)?;

    let t0 = Instant::now();
    let mut counter = SlotCounter::default();
    session.run_event(&mut counter)?;
    let installed = session.install_island_schedules()?;
    println!(
        "Event: {} slots, {} placements, {} synchronized dances, {installed} island schedules",
        counter.slots, counter.placements, counter.dancing
    );

    let mut adjusted = 0;
    for time in ClockTime::slots(ClockTime(MORNING_FROM), ClockTime(MORNING_TO), 10) {
        if session.on_time_changed(time)?.is_some_and(|(_, outcome)| outcome.is_adjusted()) {
            adjusted += 1;
        }
    }
    info!(adjusted, elapsed_ms = t0.elapsed().as_millis() as u64, "day prepared");
    println!();

    println!("{:<10} {:>9} {:>6} {:<14}", "Actor", "Waypoints", "Ends", "Final map");
    println!("{}", "-".repeat(42));
    for (_, actor) in session.roster().iter() {
        let Some(schedule) = actor.schedule() else {
            println!("{:<10} {:>9} {:>6} {:<14}", actor.name(), 0, "-", "-");
            continue;
        };
        let (last, path) = schedule
            .iter()
            .next_back()
            .map(|(t, p)| (t.to_string(), p.location.as_str()))
            .unwrap_or_default();
        println!("{:<10} {:>9} {:>6} {:<14}", actor.name(), schedule.len(), last, path);
    }

    Ok(())
}

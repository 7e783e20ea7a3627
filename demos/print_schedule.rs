//! Lay out a sample week and print the resulting rectangles.
//! Run with:
//!   cargo run --example print_schedule
//!   RUST_LOG=debug cargo run --example print_schedule   # with pipeline logs

use anyhow::{anyhow, Result};
use chrono::{Duration, NaiveDate};
use week_grid::models::event::Event;
use week_grid::services::layout::{day_width_for_viewport, ScheduleLayout};

fn sample_week() -> Result<Vec<Event>> {
    let monday = NaiveDate::from_ymd_opt(2025, 6, 2)
        .ok_or_else(|| anyhow!("invalid date"))?
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow!("invalid time"))?;
    let at = |day: i64, hour: i64, minute: i64| {
        monday + Duration::days(day) + Duration::hours(hour) + Duration::minutes(minute)
    };

    let events = vec![
        Event::builder()
            .title("Standup")
            .color("#4285F4")
            .start(at(0, 9, 0))
            .end(at(0, 9, 30))
            .build(),
        Event::builder()
            .title("Sprint Planning")
            .color("#34A853")
            .description("Planning for the next sprint")
            .start(at(0, 9, 15))
            .end(at(0, 11, 0))
            .build(),
        Event::builder()
            .title("Design Review")
            .color("#FBBC05")
            .start(at(1, 14, 0))
            .end(at(1, 15, 30))
            .build(),
        Event::builder()
            .title("1:1")
            .start(at(1, 15, 0))
            .end(at(1, 15, 45))
            .build(),
        Event::builder()
            .title("Release Party")
            .color("#EA4335")
            .description("Runs past midnight")
            .start(at(2, 23, 0))
            .end(at(3, 1, 0))
            .build(),
    ];

    events
        .into_iter()
        .collect::<Result<Vec<_>, String>>()
        .map_err(|e| anyhow!(e))
}

fn main() -> Result<()> {
    env_logger::init();

    let events = sample_week()?;

    // A phone-ish viewport: 3 visible days after a 50px hour sidebar
    let day_width = day_width_for_viewport(410.0, 50.0, 3);
    let engine = ScheduleLayout::spanning_events(&events, day_width, 64.0)?;

    println!("Grid: {:?}", engine.geometry());
    println!();

    println!("Day headers:");
    for (date, x) in engine.day_headers() {
        println!("  {}  x={}", date.format("%a %d %b"), x);
    }
    println!();

    println!("Placements:");
    for p in engine.layout(&events)? {
        println!(
            "  {:<16} {} -> {}   x={:>6.1} y={:>7.1} w={:>5.1} h={:>6.1}",
            p.event.title,
            p.event.start.format("%a %H:%M"),
            p.event.end.format("%a %H:%M"),
            p.x,
            p.y,
            p.width,
            p.height,
        );
    }
    println!();

    let lines = engine.grid_lines();
    println!(
        "Grid chrome: {} hour lines, {} day lines, {}x{} px",
        lines.horizontal.len(),
        lines.vertical.len(),
        lines.width,
        lines.height,
    );

    Ok(())
}

#![allow(dead_code)]

// Test fixtures - reusable test data
// Provides consistent test data across all test files

use chrono::{Duration, NaiveDate, NaiveDateTime};
use week_grid::models::event::Event;
use week_grid::models::geometry::GridGeometry;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Returns Monday, Jun 2, 2025 (start of the fixture week)
    pub fn week_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    /// A time on the fixture week, offset in days from Monday
    pub fn at(day_offset: i64, hour: u32, minute: u32) -> NaiveDateTime {
        (week_start() + Duration::days(day_offset))
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// A single hour-long meeting on Monday morning
    pub fn simple_event() -> Event {
        Event::new("Simple Event", dates::at(0, 9, 0), dates::at(0, 10, 0)).unwrap()
    }

    /// Two events that overlap on Monday morning (scenario A shape)
    pub fn overlapping_pair() -> Vec<Event> {
        vec![
            Event::new("First", dates::at(0, 9, 0), dates::at(0, 11, 0)).unwrap(),
            Event::new("Second", dates::at(0, 9, 15), dates::at(0, 11, 0)).unwrap(),
        ]
    }

    /// Three events chained by consecutive overlap; the first and third
    /// are disjoint (scenario B shape)
    pub fn chained_triple() -> Vec<Event> {
        vec![
            Event::new("Chain 1", dates::at(0, 9, 0), dates::at(0, 10, 0)).unwrap(),
            Event::new("Chain 2", dates::at(0, 9, 30), dates::at(0, 10, 30)).unwrap(),
            Event::new("Chain 3", dates::at(0, 10, 15), dates::at(0, 11, 0)).unwrap(),
        ]
    }

    /// A realistic three-day schedule with a mix of overlaps
    pub fn busy_week() -> Vec<Event> {
        vec![
            Event::builder()
                .title("Standup")
                .color("#4285F4")
                .start(dates::at(0, 9, 0))
                .end(dates::at(0, 9, 30))
                .build()
                .unwrap(),
            Event::builder()
                .title("Sprint Planning")
                .color("#34A853")
                .start(dates::at(0, 9, 15))
                .end(dates::at(0, 11, 0))
                .build()
                .unwrap(),
            Event::builder()
                .title("Lunch & Learn")
                .start(dates::at(0, 12, 0))
                .end(dates::at(0, 13, 0))
                .build()
                .unwrap(),
            Event::builder()
                .title("Design Review")
                .color("#FBBC05")
                .start(dates::at(1, 14, 0))
                .end(dates::at(1, 15, 30))
                .build()
                .unwrap(),
            Event::builder()
                .title("1:1")
                .start(dates::at(1, 15, 0))
                .end(dates::at(1, 15, 45))
                .build()
                .unwrap(),
            Event::builder()
                .title("Release Party")
                .description("Runs past midnight")
                .start(dates::at(2, 23, 0))
                .end(dates::at(3, 1, 0))
                .build()
                .unwrap(),
        ]
    }
}

/// Sample geometry for testing
pub mod geometry {
    use super::*;

    /// 120px day columns, 64px hour rows, a full week visible
    pub fn week_grid() -> GridGeometry {
        GridGeometry::new(
            120.0,
            64.0,
            dates::week_start(),
            dates::week_start() + Duration::days(6),
            7,
        )
        .unwrap()
    }

    /// A 3-day visible window over the same week
    pub fn three_day_window() -> GridGeometry {
        GridGeometry::new(
            120.0,
            64.0,
            dates::week_start(),
            dates::week_start() + Duration::days(6),
            3,
        )
        .unwrap()
    }
}

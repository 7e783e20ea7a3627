//! Schedule layout service entry point.
//! Runs the full sort, group, place pipeline over an event list and
//! exposes the grid-chrome geometry alongside it, organized across
//! focused submodules.

use thiserror::Error;

pub mod grid;
pub mod grouping;
pub mod placement;

pub use grid::{day_headers, day_width_for_viewport, grid_lines, hour_labels};
pub use grouping::{group_events, OverlapGroup};
pub use placement::place_groups;

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::models::geometry::{GridGeometry, GridLines, HourLabel, Placement};
use crate::utils::date::days_between;

/// Errors surfaced by the layout pipeline.
///
/// All are synchronous precondition failures: the computation is pure and
/// deterministic, so retrying with unchanged input yields the same result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Date bounds were requested from an empty event list.
    #[error("cannot derive date bounds from an empty event list; supply explicit bounds")]
    EmptyEvents,
    /// An empty overlap group reached placement. Grouping never produces
    /// one, so this indicates an internal invariant violation.
    #[error("encountered an empty overlap group during placement")]
    DegenerateGroup,
    /// Derived geometry failed validation.
    #[error("invalid grid geometry: {0}")]
    InvalidGeometry(String),
}

/// Stateless layout engine for one grid configuration.
///
/// Holds only the geometry; every `layout` call recomputes grouping and
/// placement from scratch, so callers re-invoke the pipeline whenever
/// events or viewport change. No state is retained between calls.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleLayout {
    geometry: GridGeometry,
}

impl ScheduleLayout {
    /// Create a layout engine with explicit geometry.
    pub fn new(geometry: GridGeometry) -> Self {
        Self { geometry }
    }

    /// Create a layout engine whose date bounds span the given events.
    ///
    /// `min_date` comes from the earliest start, `max_date` from the
    /// latest end, and `num_days` covers the full span, so the visible
    /// window equals the event range. Fails fast on an empty list instead
    /// of performing an unchecked min/max lookup.
    pub fn spanning_events(
        events: &[Event],
        day_width: f32,
        hour_height: f32,
    ) -> Result<Self, LayoutError> {
        let min_date = events
            .iter()
            .map(|event| event.start.date())
            .min()
            .ok_or(LayoutError::EmptyEvents)?;
        let max_date = events
            .iter()
            .map(|event| event.end.date())
            .max()
            .ok_or(LayoutError::EmptyEvents)?;

        let num_days = (days_between(min_date, max_date) + 1) as usize;
        let geometry = GridGeometry::new(day_width, hour_height, min_date, max_date, num_days)
            .map_err(LayoutError::InvalidGeometry)?;

        Ok(Self::new(geometry))
    }

    /// The grid configuration this engine lays out against.
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Run the full pipeline: sort by start, group overlaps, place.
    ///
    /// Returns one placement per input event, paired with a clone of the
    /// originating event. An empty event list yields an empty placement
    /// list (the geometry's bounds were supplied explicitly).
    pub fn layout(&self, events: &[Event]) -> Result<Vec<Placement>, LayoutError> {
        log::debug!(
            "Laying out {} events on a {}x{} day grid",
            events.len(),
            self.geometry.num_days,
            24
        );

        let groups = group_events(events);
        place_groups(&groups, &self.geometry)
    }

    /// Interior grid-line coordinates for rendering.
    pub fn grid_lines(&self) -> GridLines {
        grid_lines(&self.geometry)
    }

    /// Sidebar hour labels with their vertical offsets.
    pub fn hour_labels(&self) -> Vec<HourLabel> {
        hour_labels(&self.geometry)
    }

    /// Visible day dates with their column x offsets.
    pub fn day_headers(&self) -> Vec<(NaiveDate, f32)> {
        day_headers(&self.geometry)
    }
}

/// One-shot convenience for callers that already hold a geometry.
pub fn layout_events(
    events: &[Event],
    geometry: &GridGeometry,
) -> Result<Vec<Placement>, LayoutError> {
    ScheduleLayout::new(*geometry).layout(events)
}

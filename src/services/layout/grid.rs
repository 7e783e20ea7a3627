//! Grid-chrome geometry: hour/day boundary lines, sidebar hour labels,
//! and day header offsets, all in the same pixel space as placements.

use chrono::NaiveDate;

use crate::models::geometry::{GridGeometry, GridLines, HourLabel};

/// Interior grid-line coordinates for the visible grid.
///
/// 23 horizontal lines mark the hour boundaries between 01:00 and 23:00
/// (neither the top edge nor the next-day midnight edge gets a line);
/// `num_days - 1` vertical lines mark the boundaries between day columns.
pub fn grid_lines(geometry: &GridGeometry) -> GridLines {
    let horizontal = (1..24)
        .map(|k| k as f32 * geometry.hour_height)
        .collect();

    let vertical = (1..geometry.num_days)
        .map(|k| k as f32 * geometry.day_width)
        .collect();

    GridLines {
        horizontal,
        vertical,
        width: geometry.width(),
        height: geometry.height(),
    }
}

/// Sidebar labels for all 24 hours, each anchored at its row's top edge.
pub fn hour_labels(geometry: &GridGeometry) -> Vec<HourLabel> {
    (0..24)
        .map(|hour| HourLabel {
            hour,
            y: hour as f32 * geometry.hour_height,
        })
        .collect()
}

/// Header entries for the visible day columns: each date paired with the
/// x offset of its column's left edge.
pub fn day_headers(geometry: &GridGeometry) -> Vec<(NaiveDate, f32)> {
    geometry
        .visible_dates()
        .into_iter()
        .enumerate()
        .map(|(k, date)| (date, k as f32 * geometry.day_width))
        .collect()
}

/// Derive a day-column width from the caller's viewport, after reserving
/// room for the hour sidebar. The engine itself treats `day_width` as
/// opaque; this mirrors how a schedule screen typically computes it.
pub fn day_width_for_viewport(
    viewport_width: f32,
    sidebar_width: f32,
    visible_days: usize,
) -> f32 {
    debug_assert!(visible_days > 0);
    (viewport_width - sidebar_width) / visible_days as f32
}

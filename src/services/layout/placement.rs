//! Placement pass: overlap groups to pixel rectangles.

use crate::models::geometry::{GridGeometry, Placement};
use crate::utils::date::{days_between, minutes_since_midnight};

use super::grouping::OverlapGroup;
use super::LayoutError;

/// Compute the pixel rectangle for every event in the given groups.
///
/// Horizontal space within a day column is split evenly by group size, so
/// every member of an n-event group gets `round(day_width / n)` pixels,
/// offset by its slot index times `floor(day_width / n)`. Vertical
/// position depends only on time of day; the day column comes from the
/// start date alone, so an event running past midnight overflows into the
/// next day's vertical band rather than being split or truncated.
///
/// Placements come back in group order with members in chain order, one
/// per input event.
pub fn place_groups(
    groups: &[OverlapGroup],
    geometry: &GridGeometry,
) -> Result<Vec<Placement>, LayoutError> {
    let mut placements = Vec::with_capacity(groups.iter().map(OverlapGroup::len).sum());

    for group in groups {
        if group.is_empty() {
            // Grouping never emits an empty group; surface rather than skip
            log::warn!("Encountered empty overlap group during placement");
            return Err(LayoutError::DegenerateGroup);
        }

        let slots = group.len() as f32;
        let width = (geometry.day_width / slots).round();
        let slot_step = (geometry.day_width / slots).floor();

        for (index, event) in group.events().iter().enumerate() {
            let minutes = event.duration().num_minutes() as f32;
            let height = (minutes / 60.0 * geometry.hour_height).round();

            let start_minutes = minutes_since_midnight(event.start.time()) as f32;
            let y = (start_minutes / 60.0 * geometry.hour_height).round();

            let offset_days = days_between(geometry.min_date, event.start.date()) as f32;
            let x = offset_days * geometry.day_width + index as f32 * slot_step;

            placements.push(Placement {
                event: event.clone(),
                x,
                y,
                width,
                height,
            });
        }
    }

    Ok(placements)
}

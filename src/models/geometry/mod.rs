// Grid geometry models
// Pixel-space configuration and output records for the layout engine

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::event::Event;

/// Pixel-space configuration for a multi-day schedule grid.
///
/// `num_days` is the visible window and may differ from the
/// `min_date..=max_date` span: a caller can scroll a 3-day window over a
/// longer event range. Grid extent follows `num_days`; event day offsets
/// are measured from `min_date`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridGeometry {
    /// Pixels per day column
    pub day_width: f32,
    /// Pixels per hour row
    pub hour_height: f32,
    /// Date of the leftmost day column
    pub min_date: NaiveDate,
    /// Last date covered by the grid (inclusive)
    pub max_date: NaiveDate,
    /// Number of visible day columns
    pub num_days: usize,
}

impl GridGeometry {
    /// Create a grid geometry with explicit date bounds.
    ///
    /// # Returns
    /// Returns `Result<GridGeometry, String>` with validation.
    pub fn new(
        day_width: f32,
        hour_height: f32,
        min_date: NaiveDate,
        max_date: NaiveDate,
        num_days: usize,
    ) -> Result<Self, String> {
        if !day_width.is_finite() || day_width <= 0.0 {
            return Err("Day width must be a positive number of pixels".to_string());
        }

        if !hour_height.is_finite() || hour_height <= 0.0 {
            return Err("Hour height must be a positive number of pixels".to_string());
        }

        if min_date > max_date {
            return Err("Minimum date must not be after maximum date".to_string());
        }

        if num_days == 0 {
            return Err("Grid must have at least one visible day".to_string());
        }

        Ok(Self {
            day_width,
            hour_height,
            min_date,
            max_date,
            num_days,
        })
    }

    /// Total grid width in pixels (all visible day columns).
    pub fn width(&self) -> f32 {
        self.num_days as f32 * self.day_width
    }

    /// Total grid height in pixels (24 hour rows).
    pub fn height(&self) -> f32 {
        24.0 * self.hour_height
    }

    /// Number of days in the inclusive `min_date..=max_date` span.
    pub fn span_days(&self) -> usize {
        ((self.max_date - self.min_date).num_days() + 1) as usize
    }

    /// Dates of the visible day columns, leftmost first.
    pub fn visible_dates(&self) -> Vec<NaiveDate> {
        (0..self.num_days)
            .map(|k| self.min_date + Duration::days(k as i64))
            .collect()
    }
}

/// Computed pixel rectangle for one event.
///
/// The pairing between rectangle and originating event is explicit in the
/// record, so renderers never need a side-channel lookup to recover the
/// event during drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub event: Event,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Grid line coordinates for renderer-side drawing.
///
/// Hour boundaries exclude the top edge and the midnight-of-next-day edge;
/// day boundaries exclude both outer edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLines {
    /// Y coordinates of the 23 interior hour boundaries
    pub horizontal: Vec<f32>,
    /// X coordinates of the `num_days - 1` interior day boundaries
    pub vertical: Vec<f32>,
    /// Total grid width in pixels
    pub width: f32,
    /// Total grid height in pixels
    pub height: f32,
}

/// A sidebar hour label and its vertical pixel position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourLabel {
    pub hour: u32,
    pub y: f32,
}

impl HourLabel {
    /// Format the label the way the sidebar displays it (e.g. "09:00").
    pub fn text(&self) -> String {
        format!("{:02}:00", self.hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()
    }

    #[test]
    fn test_new_geometry_success() {
        let geometry = GridGeometry::new(120.0, 64.0, monday(), monday(), 3).unwrap();

        assert_eq!(geometry.day_width, 120.0);
        assert_eq!(geometry.hour_height, 64.0);
        assert_eq!(geometry.num_days, 3);
    }

    #[test]
    fn test_new_geometry_rejects_zero_day_width() {
        let result = GridGeometry::new(0.0, 64.0, monday(), monday(), 3);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Day width"));
    }

    #[test]
    fn test_new_geometry_rejects_negative_hour_height() {
        let result = GridGeometry::new(120.0, -1.0, monday(), monday(), 3);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Hour height"));
    }

    #[test]
    fn test_new_geometry_rejects_nan_dimensions() {
        let result = GridGeometry::new(f32::NAN, 64.0, monday(), monday(), 3);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_geometry_rejects_inverted_dates() {
        let result = GridGeometry::new(
            120.0,
            64.0,
            monday() + Duration::days(5),
            monday(),
            3,
        );
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Minimum date"));
    }

    #[test]
    fn test_new_geometry_rejects_zero_days() {
        let result = GridGeometry::new(120.0, 64.0, monday(), monday(), 0);
        assert!(result.is_err());
    }

    #[test]
    fn test_total_extent() {
        let geometry = GridGeometry::new(100.0, 50.0, monday(), monday(), 4).unwrap();

        assert_eq!(geometry.width(), 400.0);
        assert_eq!(geometry.height(), 1200.0);
    }

    #[test]
    fn test_span_days_inclusive() {
        let geometry =
            GridGeometry::new(100.0, 50.0, monday(), monday() + Duration::days(6), 3).unwrap();

        assert_eq!(geometry.span_days(), 7);
        assert_eq!(geometry.num_days, 3);
    }

    #[test]
    fn test_visible_dates() {
        let geometry =
            GridGeometry::new(100.0, 50.0, monday(), monday() + Duration::days(6), 3).unwrap();

        assert_eq!(
            geometry.visible_dates(),
            vec![
                monday(),
                monday() + Duration::days(1),
                monday() + Duration::days(2),
            ]
        );
    }

    #[test]
    fn test_hour_label_text() {
        let label = HourLabel { hour: 9, y: 576.0 };
        assert_eq!(label.text(), "09:00");

        let label = HourLabel { hour: 23, y: 1472.0 };
        assert_eq!(label.text(), "23:00");
    }
}

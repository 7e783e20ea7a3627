// Event module
// Schedule event model consumed by the layout engine

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A time-bounded event to be placed on the schedule grid.
///
/// Events are plain values: the layout engine never mutates them and the
/// caller's list keeps ownership of the originals. Times are naive local
/// date-times; the layout core does no timezone handling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub description: Option<String>,
    /// Display color in hex format (#RRGGBB or #RGB); opaque to layout.
    pub color: Option<String>,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Event {
    /// Create a new event with required fields.
    ///
    /// # Arguments
    /// * `title` - Event title (required, non-empty)
    /// * `start` - Event start time
    /// * `end` - Event end time (must be after `start`)
    ///
    /// # Returns
    /// Returns `Result<Event, String>` with validation.
    ///
    /// # Examples
    /// ```
    /// use week_grid::models::event::Event;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
    /// let event = Event::new(
    ///     "Team Meeting",
    ///     day.and_hms_opt(9, 0, 0).unwrap(),
    ///     day.and_hms_opt(10, 0, 0).unwrap(),
    /// ).unwrap();
    /// ```
    pub fn new(
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, String> {
        let title = title.into();

        // Validate title
        if title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        // Validate times
        if end <= start {
            return Err("Event end time must be after start time".to_string());
        }

        Ok(Self {
            title,
            description: None,
            color: None,
            start,
            end,
        })
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        if self.end <= self.start {
            return Err("Event end time must be after start time".to_string());
        }

        // Validate color format if present (should be hex color)
        if let Some(ref color) = self.color {
            if !color.starts_with('#') || (color.len() != 7 && color.len() != 4) {
                return Err("Color must be in hex format (#RRGGBB or #RGB)".to_string());
            }
        }

        Ok(())
    }

    /// Get the duration of the event
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }

    /// Check whether this event's time range overlaps another's.
    ///
    /// Strict on both ends: touching endpoints (one event ending exactly
    /// when the next starts) do not count as overlapping.
    pub fn overlaps(&self, other: &Event) -> bool {
        self.end > other.start && self.start < other.end
    }
}

/// Builder for creating events with optional fields
pub struct EventBuilder {
    title: Option<String>,
    description: Option<String>,
    color: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self {
            title: None,
            description: None,
            color: None,
            start: None,
            end: None,
        }
    }

    /// Set the event title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the event description
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the event color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the start time
    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// Set the end time
    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, String> {
        let title = self.title.ok_or("Event title is required")?;
        let start = self.start.ok_or("Event start time is required")?;
        let end = self.end.ok_or("Event end time is required")?;

        let event = Event {
            title,
            description: self.description,
            color: self.color,
            start,
            end,
        };

        event.validate()?;
        Ok(event)
    }
}

impl Default for EventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// Week Grid Library
// Layout core for weekly/multi-day schedule views

pub mod models;
pub mod services;
pub mod utils;

pub use models::event::{Event, EventBuilder};
pub use models::geometry::{GridGeometry, GridLines, HourLabel, Placement};
pub use services::layout::{layout_events, LayoutError, ScheduleLayout};

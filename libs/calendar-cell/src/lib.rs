pub mod models;
pub mod services;

pub use models::{CalendarEvent, EventColor, EventIcon, EventStyle};
pub use services::events::{interactive_events, map_events};

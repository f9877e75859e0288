use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_models::AppointmentStatus;

/// A time-blocked, renderable calendar entry derived from one appointment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub appointment_id: Uuid,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub status: AppointmentStatus,
    pub style: EventStyle,
    pub patient_name: String,
    pub doctor_name: String,
    pub specialization_name: String,
    pub room_name: String,
    pub note: Option<String>,
}

/// Visual classification of an event, fixed per status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventStyle {
    pub color: EventColor,
    pub icon: Option<EventIcon>,
    pub dimmed: bool,
    pub struck_through: bool,
}

impl EventStyle {
    pub fn for_status(status: AppointmentStatus) -> Self {
        match status {
            AppointmentStatus::Pending => Self {
                color: EventColor::Amber,
                icon: Some(EventIcon::Pending),
                dimmed: false,
                struck_through: false,
            },
            AppointmentStatus::Confirmed => Self {
                color: EventColor::Green,
                icon: Some(EventIcon::Check),
                dimmed: false,
                struck_through: false,
            },
            AppointmentStatus::Completed => Self {
                color: EventColor::Blue,
                icon: None,
                dimmed: false,
                struck_through: false,
            },
            AppointmentStatus::Cancelled => Self {
                color: EventColor::Grey,
                icon: None,
                dimmed: true,
                struck_through: true,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventColor {
    Amber,
    Green,
    Blue,
    Grey,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventIcon {
    Pending,
    Check,
}

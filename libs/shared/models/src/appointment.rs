use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A patient's booking against a specific schedule slot.
///
/// Server-owned; the client holds a read-mostly copy scoped to the current
/// view session and replaces it wholesale on refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub doctor_id: Uuid,
    pub specialization_id: Uuid,
    pub department_id: Uuid,
    pub slot: BoundSlot,
    pub status: AppointmentStatus,
    pub doctor_name: String,
    pub specialization_name: String,
    pub service_id: Uuid,
    pub service_name: String,
    pub note: Option<String>,
}

impl Appointment {
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.slot.starts_at()
    }

    pub fn ends_at(&self) -> DateTime<Utc> {
        self.slot.ends_at()
    }
}

/// The schedule slot an appointment is currently bound to, resolved into its
/// work date, time window and room. Replaced as a whole when the appointment
/// is rescheduled, never patched field by field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundSlot {
    pub slot_id: Uuid,
    pub work_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room_name: String,
}

impl BoundSlot {
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.work_date.and_time(self.start_time).and_utc()
    }

    pub fn ends_at(&self) -> DateTime<Utc> {
        self.work_date.and_time(self.end_time).and_utc()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    /// Terminal statuses admit no further transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self, AppointmentStatus::Cancelled | AppointmentStatus::Completed)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "pending"),
            AppointmentStatus::Confirmed => write!(f, "confirmed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
            AppointmentStatus::Completed => write!(f, "completed"),
        }
    }
}

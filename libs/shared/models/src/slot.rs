use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A discrete doctor/room/time unit of potential availability, independent of
/// whether it is booked. Produced by the availability query and never mutated
/// client-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
    pub id: Uuid,
    pub doctor_id: Uuid,
    pub specialization_id: Uuid,
    pub work_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub room_name: String,
    pub is_available: bool,
}

impl ScheduleSlot {
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.work_date.and_time(self.start_time).and_utc()
    }

    pub fn ends_at(&self) -> DateTime<Utc> {
        self.work_date.and_time(self.end_time).and_utc()
    }
}

/// Wire-level availability query. The hospital id is always required; doctor
/// and specialization narrow the search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotQuery {
    pub hospital_id: Uuid,
    pub doctor_id: Option<Uuid>,
    pub specialization_id: Option<Uuid>,
    pub date_from: NaiveDate,
    pub date_to: NaiveDate,
}

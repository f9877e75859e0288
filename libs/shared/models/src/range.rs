use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inclusive date range for appointment and availability queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// The Monday-to-Sunday week containing `anchor`, the default range for
    /// the visible calendar week.
    pub fn visible_week(anchor: NaiveDate) -> Self {
        let monday = anchor - Duration::days(anchor.weekday().num_days_from_monday() as i64);
        Self {
            from: monday,
            to: monday + Duration::days(6),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

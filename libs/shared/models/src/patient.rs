use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Patient roster entry, fetched once per session and used only for name
/// resolution in calendar views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

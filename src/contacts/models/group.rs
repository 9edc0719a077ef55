use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact group document ("family", "work", ...).
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Group {
    pub id: String,
    pub name: String,
    #[serde(rename = "createdAt", default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt", default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

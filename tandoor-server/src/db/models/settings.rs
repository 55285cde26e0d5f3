//! Restaurant Settings Row

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::RestaurantSettings;

/// Settings row — a singleton record under a fixed id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default = "default_hours")]
    pub hours: serde_json::Value,
    #[serde(default)]
    pub updated_at: String,
}

fn default_hours() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl From<SettingsRow> for RestaurantSettings {
    fn from(row: SettingsRow) -> Self {
        RestaurantSettings {
            address: row.address,
            phone: row.phone,
            email: row.email,
            website: row.website,
            hours: row.hours,
            updated_at: row.updated_at,
        }
    }
}

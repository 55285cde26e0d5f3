//! Restaurant Settings Model

use serde::{Deserialize, Serialize};

/// Restaurant contact info and opening hours — a singleton record
///
/// Readable by the public pages, writable by the admin settings view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantSettings {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub website: Option<String>,
    /// Opening hours keyed by weekday, e.g. `{"friday": "13:00 - 23:00"}`
    pub hours: serde_json::Value,
    pub updated_at: String,
}

impl Default for RestaurantSettings {
    fn default() -> Self {
        Self {
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            website: None,
            hours: serde_json::Value::Object(serde_json::Map::new()),
            updated_at: String::new(),
        }
    }
}

/// Update settings payload (admin endpoint)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantSettingsUpdate {
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub hours: Option<serde_json::Value>,
}

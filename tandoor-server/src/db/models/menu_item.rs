//! Menu Item Row

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::MenuItem;

use super::id_string;

/// Menu item row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
    /// `None` ⇒ not orderable
    pub price: Option<Decimal>,
    pub image_url: Option<String>,
    #[serde(default = "default_icon")]
    pub icon_name: String,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub is_signature: bool,
    #[serde(default)]
    pub display_order: i32,
    pub created_at: String,
    pub updated_at: String,
}

fn default_icon() -> String {
    "utensils".to_string()
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        MenuItem {
            id: id_string(&row.id),
            name: row.name,
            description: row.description,
            category: row.category,
            price: row.price,
            image_url: row.image_url,
            icon_name: row.icon_name,
            is_popular: row.is_popular,
            is_signature: row.is_signature,
            display_order: row.display_order,
        }
    }
}

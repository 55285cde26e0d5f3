//! Menu Category Row

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::MenuCategory;

use super::id_string;

/// Menu category row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategoryRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub display_order: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<MenuCategoryRow> for MenuCategory {
    fn from(row: MenuCategoryRow) -> Self {
        MenuCategory {
            id: id_string(&row.id),
            name: row.name,
            description: row.description,
            display_order: row.display_order,
        }
    }
}

//! Menu Category Model

use serde::{Deserialize, Serialize};

/// Menu category entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub display_order: i32,
}

/// Create category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategoryCreate {
    pub name: String,
    pub description: Option<String>,
    pub display_order: Option<i32>,
}

/// Update category payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategoryUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub display_order: Option<i32>,
}

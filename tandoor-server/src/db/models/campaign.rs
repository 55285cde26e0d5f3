//! Campaign Row

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::Campaign;

use super::id_string;

/// Campaign row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub title: String,
    pub description: String,
    pub discount_percentage: Option<i32>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    pub valid_from: String,
    pub valid_to: String,
    pub background_color: String,
    pub text_color: String,
    pub button_text: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CampaignRow> for Campaign {
    fn from(row: CampaignRow) -> Self {
        Campaign {
            id: id_string(&row.id),
            title: row.title,
            description: row.description,
            discount_percentage: row.discount_percentage,
            image_url: row.image_url,
            is_active: row.is_active,
            valid_from: row.valid_from,
            valid_to: row.valid_to,
            background_color: row.background_color,
            text_color: row.text_color,
            button_text: row.button_text,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

//! Campaign Model

use serde::{Deserialize, Serialize};

/// Promotional campaign shown on the public hero banner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub title: String,
    pub description: String,
    pub discount_percentage: Option<i32>,
    pub image_url: Option<String>,
    pub is_active: bool,
    /// Validity window start (YYYY-MM-DD, inclusive)
    pub valid_from: String,
    /// Validity window end (YYYY-MM-DD, inclusive)
    pub valid_to: String,
    pub background_color: String,
    pub text_color: String,
    pub button_text: String,
    pub created_at: String,
    pub updated_at: String,
}

impl Campaign {
    /// Whether the campaign should be displayed on the given day.
    ///
    /// ISO dates compare correctly as strings, so no parsing is needed.
    pub fn is_live(&self, today: &str) -> bool {
        self.is_active && self.valid_from.as_str() <= today && today <= self.valid_to.as_str()
    }
}

/// Create campaign payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignCreate {
    pub title: String,
    pub description: String,
    pub discount_percentage: Option<i32>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
    pub valid_from: String,
    pub valid_to: String,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub button_text: Option<String>,
}

/// Update campaign payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CampaignUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub discount_percentage: Option<i32>,
    pub image_url: Option<String>,
    pub is_active: Option<bool>,
    pub valid_from: Option<String>,
    pub valid_to: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub button_text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign(active: bool, from: &str, to: &str) -> Campaign {
        Campaign {
            id: "campaign:eid".into(),
            title: "Eid Special".into(),
            description: "20% off family platters".into(),
            discount_percentage: Some(20),
            image_url: None,
            is_active: active,
            valid_from: from.into(),
            valid_to: to.into(),
            background_color: "#8B0000".into(),
            text_color: "#FFFFFF".into(),
            button_text: "Order Now".into(),
            created_at: String::new(),
            updated_at: String::new(),
        }
    }

    #[test]
    fn live_inside_window() {
        let c = campaign(true, "2026-08-01", "2026-08-31");
        assert!(c.is_live("2026-08-01"));
        assert!(c.is_live("2026-08-15"));
        assert!(c.is_live("2026-08-31"));
    }

    #[test]
    fn dead_outside_window_or_inactive() {
        let c = campaign(true, "2026-08-01", "2026-08-31");
        assert!(!c.is_live("2026-07-31"));
        assert!(!c.is_live("2026-09-01"));
        assert!(!campaign(false, "2026-08-01", "2026-08-31").is_live("2026-08-15"));
    }
}

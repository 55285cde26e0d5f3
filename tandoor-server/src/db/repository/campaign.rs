//! Campaign Repository

use serde::Serialize;

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::CampaignRow;
use crate::utils::now_rfc3339;
use shared::models::{CampaignCreate, CampaignUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "campaign";

#[derive(Clone)]
pub struct CampaignRepository {
    base: BaseRepository,
}

impl CampaignRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<CampaignRow>> {
        let campaigns: Vec<CampaignRow> = self
            .base
            .db()
            .query("SELECT * FROM campaign ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(campaigns)
    }

    /// Campaigns live on the given ISO date (inclusive window, active only)
    pub async fn find_live(&self, today: &str) -> RepoResult<Vec<CampaignRow>> {
        let today_owned = today.to_string();
        let campaigns: Vec<CampaignRow> = self
            .base
            .db()
            .query(
                r#"
                SELECT * FROM campaign
                WHERE is_active = true AND valid_from <= $today AND valid_to >= $today
                ORDER BY created_at DESC
                "#,
            )
            .bind(("today", today_owned))
            .await?
            .take(0)?;
        Ok(campaigns)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<CampaignRow>> {
        let campaign: Option<CampaignRow> = self.base.db().select(record_id(TABLE, id)?).await?;
        Ok(campaign)
    }

    pub async fn create(&self, data: CampaignCreate) -> RepoResult<CampaignRow> {
        let now = now_rfc3339();
        let row = CampaignRow {
            id: None,
            title: data.title,
            description: data.description,
            discount_percentage: data.discount_percentage,
            image_url: data.image_url,
            is_active: data.is_active.unwrap_or(true),
            valid_from: data.valid_from,
            valid_to: data.valid_to,
            background_color: data.background_color.unwrap_or_else(|| "#8B0000".into()),
            text_color: data.text_color.unwrap_or_else(|| "#FFFFFF".into()),
            button_text: data.button_text.unwrap_or_else(|| "Order Now".into()),
            created_at: now.clone(),
            updated_at: now,
        };

        let created: Option<CampaignRow> = self.base.db().create(TABLE).content(row).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create campaign".to_string()))
    }

    pub async fn update(&self, id: &str, data: CampaignUpdate) -> RepoResult<CampaignRow> {
        #[derive(Serialize)]
        struct CampaignPatch {
            #[serde(skip_serializing_if = "Option::is_none")]
            title: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            discount_percentage: Option<i32>,
            #[serde(skip_serializing_if = "Option::is_none")]
            image_url: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_active: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            valid_from: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            valid_to: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            background_color: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            text_color: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            button_text: Option<String>,
            updated_at: String,
        }

        let patch = CampaignPatch {
            title: data.title,
            description: data.description,
            discount_percentage: data.discount_percentage,
            image_url: data.image_url,
            is_active: data.is_active,
            valid_from: data.valid_from,
            valid_to: data.valid_to,
            background_color: data.background_color,
            text_color: data.text_color,
            button_text: data.button_text,
            updated_at: now_rfc3339(),
        };

        let updated: Option<CampaignRow> = self
            .base
            .db()
            .update(record_id(TABLE, id)?)
            .merge(patch)
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Campaign {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let deleted: Option<CampaignRow> = self.base.db().delete(record_id(TABLE, id)?).await?;
        Ok(deleted.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn campaign(title: &str, active: bool, from: &str, to: &str) -> CampaignCreate {
        CampaignCreate {
            title: title.to_string(),
            description: "seasonal offer".to_string(),
            discount_percentage: Some(15),
            image_url: None,
            is_active: Some(active),
            valid_from: from.to_string(),
            valid_to: to.to_string(),
            background_color: None,
            text_color: None,
            button_text: None,
        }
    }

    #[tokio::test]
    async fn live_filter_honors_window_and_active_flag() {
        let db = DbService::open_in_memory().await.unwrap().db;
        let repo = CampaignRepository::new(db);

        repo.create(campaign("Eid", true, "2026-08-01", "2026-08-31"))
            .await
            .unwrap();
        repo.create(campaign("Expired", true, "2026-07-01", "2026-07-31"))
            .await
            .unwrap();
        repo.create(campaign("Disabled", false, "2026-08-01", "2026-08-31"))
            .await
            .unwrap();

        let live = repo.find_live("2026-08-25").await.unwrap();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].title, "Eid");
    }
}

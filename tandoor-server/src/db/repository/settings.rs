//! Restaurant Settings Repository
//!
//! A single record under a fixed id; reads fall back to defaults when the
//! record has not been written yet.

use serde::Serialize;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::SettingsRow;
use crate::utils::now_rfc3339;
use shared::models::RestaurantSettingsUpdate;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

const TABLE: &str = "restaurant_settings";
const SINGLETON_KEY: &str = "main";

#[derive(Clone)]
pub struct SettingsRepository {
    base: BaseRepository,
}

impl SettingsRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn singleton_id() -> RecordId {
        RecordId::from_table_key(TABLE, SINGLETON_KEY)
    }

    pub async fn get(&self) -> RepoResult<Option<SettingsRow>> {
        let settings: Option<SettingsRow> = self.base.db().select(Self::singleton_id()).await?;
        Ok(settings)
    }

    /// Merge-write the singleton, creating it on first save
    pub async fn save(&self, data: RestaurantSettingsUpdate) -> RepoResult<SettingsRow> {
        #[derive(Serialize)]
        struct SettingsPatch {
            #[serde(skip_serializing_if = "Option::is_none")]
            address: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            phone: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            email: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            website: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            hours: Option<serde_json::Value>,
            updated_at: String,
        }

        let patch = SettingsPatch {
            address: data.address,
            phone: data.phone,
            email: data.email,
            website: data.website,
            hours: data.hours,
            updated_at: now_rfc3339(),
        };

        let saved: Option<SettingsRow> = self
            .base
            .db()
            .upsert(Self::singleton_id())
            .merge(patch)
            .await?;
        saved.ok_or_else(|| RepoError::Database("Failed to save settings".to_string()))
    }
}

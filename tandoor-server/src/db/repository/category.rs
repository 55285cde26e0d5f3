//! Menu Category Repository

use serde::Serialize;

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::MenuCategoryRow;
use crate::utils::now_rfc3339;
use shared::models::{MenuCategoryCreate, MenuCategoryUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "menu_category";

#[derive(Clone)]
pub struct MenuCategoryRepository {
    base: BaseRepository,
}

impl MenuCategoryRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All categories ordered by display_order
    pub async fn find_all(&self) -> RepoResult<Vec<MenuCategoryRow>> {
        let categories: Vec<MenuCategoryRow> = self
            .base
            .db()
            .query("SELECT * FROM menu_category ORDER BY display_order")
            .await?
            .take(0)?;
        Ok(categories)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuCategoryRow>> {
        let category: Option<MenuCategoryRow> =
            self.base.db().select(record_id(TABLE, id)?).await?;
        Ok(category)
    }

    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<MenuCategoryRow>> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM menu_category WHERE name = $name LIMIT 1")
            .bind(("name", name_owned))
            .await?;
        let categories: Vec<MenuCategoryRow> = result.take(0)?;
        Ok(categories.into_iter().next())
    }

    pub async fn create(&self, data: MenuCategoryCreate) -> RepoResult<MenuCategoryRow> {
        // Check duplicate name
        if self.find_by_name(&data.name).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Category '{}' already exists",
                data.name
            )));
        }

        let now = now_rfc3339();
        let row = MenuCategoryRow {
            id: None,
            name: data.name,
            description: data.description.unwrap_or_default(),
            display_order: data.display_order.unwrap_or(0),
            created_at: now.clone(),
            updated_at: now,
        };

        let created: Option<MenuCategoryRow> = self.base.db().create(TABLE).content(row).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create category".to_string()))
    }

    pub async fn update(&self, id: &str, data: MenuCategoryUpdate) -> RepoResult<MenuCategoryRow> {
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Category {} not found", id)))?;

        // Check duplicate name if changing
        if let Some(ref new_name) = data.name
            && new_name != &existing.name
            && self.find_by_name(new_name).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Category '{}' already exists",
                new_name
            )));
        }

        #[derive(Serialize)]
        struct CategoryPatch {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            display_order: Option<i32>,
            updated_at: String,
        }

        let patch = CategoryPatch {
            name: data.name,
            description: data.description,
            display_order: data.display_order,
            updated_at: now_rfc3339(),
        };

        let updated: Option<MenuCategoryRow> = self
            .base
            .db()
            .update(record_id(TABLE, id)?)
            .merge(patch)
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Category {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let deleted: Option<MenuCategoryRow> =
            self.base.db().delete(record_id(TABLE, id)?).await?;
        Ok(deleted.is_some())
    }
}

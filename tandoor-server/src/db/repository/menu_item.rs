//! Menu Item Repository

use rust_decimal::Decimal;
use serde::Serialize;

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::MenuItemRow;
use crate::utils::now_rfc3339;
use shared::models::{MenuItemCreate, MenuItemUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "menu_item";

#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
}

impl MenuItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All catalog items ordered by (category, display_order)
    pub async fn find_all(&self) -> RepoResult<Vec<MenuItemRow>> {
        let items: Vec<MenuItemRow> = self
            .base
            .db()
            .query("SELECT * FROM menu_item ORDER BY category, display_order")
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Orderable items only — non-null price is the orderable predicate
    pub async fn find_orderable(&self) -> RepoResult<Vec<MenuItemRow>> {
        let items: Vec<MenuItemRow> = self
            .base
            .db()
            .query("SELECT * FROM menu_item WHERE price != NONE ORDER BY category, display_order")
            .await?
            .take(0)?;
        Ok(items)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<MenuItemRow>> {
        let item: Option<MenuItemRow> = self.base.db().select(record_id(TABLE, id)?).await?;
        Ok(item)
    }

    pub async fn create(&self, data: MenuItemCreate) -> RepoResult<MenuItemRow> {
        let now = now_rfc3339();
        let row = MenuItemRow {
            id: None,
            name: data.name,
            description: data.description,
            category: data.category,
            price: data.price,
            image_url: data.image_url,
            icon_name: data.icon_name.unwrap_or_else(|| "utensils".to_string()),
            is_popular: data.is_popular.unwrap_or(false),
            is_signature: data.is_signature.unwrap_or(false),
            display_order: data.display_order.unwrap_or(0),
            created_at: now.clone(),
            updated_at: now,
        };

        let created: Option<MenuItemRow> = self.base.db().create(TABLE).content(row).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create menu item".to_string()))
    }

    pub async fn update(&self, id: &str, data: MenuItemUpdate) -> RepoResult<MenuItemRow> {
        #[derive(Serialize)]
        struct MenuItemPatch {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            category: Option<String>,
            /// Outer None = untouched; inner None = cleared (not orderable)
            #[serde(skip_serializing_if = "Option::is_none")]
            price: Option<Option<Decimal>>,
            #[serde(skip_serializing_if = "Option::is_none")]
            image_url: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            icon_name: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_popular: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            is_signature: Option<bool>,
            #[serde(skip_serializing_if = "Option::is_none")]
            display_order: Option<i32>,
            updated_at: String,
        }

        let patch = MenuItemPatch {
            name: data.name,
            description: data.description,
            category: data.category,
            price: data.price,
            image_url: data.image_url,
            icon_name: data.icon_name,
            is_popular: data.is_popular,
            is_signature: data.is_signature,
            display_order: data.display_order,
            updated_at: now_rfc3339(),
        };

        let updated: Option<MenuItemRow> = self
            .base
            .db()
            .update(record_id(TABLE, id)?)
            .merge(patch)
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Menu item {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let deleted: Option<MenuItemRow> = self.base.db().delete(record_id(TABLE, id)?).await?;
        Ok(deleted.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn item(name: &str, category: &str, price: Option<&str>, order: i32) -> MenuItemCreate {
        MenuItemCreate {
            name: name.to_string(),
            description: String::new(),
            category: category.to_string(),
            price: price.map(|p| p.parse().unwrap()),
            image_url: None,
            icon_name: None,
            is_popular: None,
            is_signature: None,
            display_order: Some(order),
        }
    }

    #[tokio::test]
    async fn orderable_excludes_null_price_and_orders_by_category() {
        let db = DbService::open_in_memory().await.unwrap().db;
        let repo = MenuItemRepository::new(db);

        repo.create(item("Naan", "Breads", Some("8.00"), 1))
            .await
            .unwrap();
        repo.create(item("Biryani", "Mains", Some("45.00"), 1))
            .await
            .unwrap();
        repo.create(item("Chef Special", "Mains", None, 2))
            .await
            .unwrap();

        let orderable = repo.find_orderable().await.unwrap();
        let names: Vec<_> = orderable.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Naan", "Biryani"]);
    }

    #[tokio::test]
    async fn update_can_clear_price() {
        let db = DbService::open_in_memory().await.unwrap().db;
        let repo = MenuItemRepository::new(db);

        let created = repo
            .create(item("Biryani", "Mains", Some("45.00"), 1))
            .await
            .unwrap();
        let id = created.id.as_ref().unwrap().to_string();

        let updated = repo
            .update(
                &id,
                MenuItemUpdate {
                    name: None,
                    description: None,
                    category: None,
                    price: Some(None),
                    image_url: None,
                    icon_name: None,
                    is_popular: None,
                    is_signature: None,
                    display_order: None,
                },
            )
            .await
            .unwrap();
        assert!(updated.price.is_none());
        assert!(repo.find_orderable().await.unwrap().is_empty());
    }
}

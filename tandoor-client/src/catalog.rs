//! Menu catalog fetching
//!
//! The catalog endpoint is queried once per page view; a failed fetch
//! renders an empty catalog and is never retried automatically. Responses
//! from superseded fetches are discarded through a request-generation
//! token so a slow old response can never overwrite a newer one.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use shared::models::MenuItem;

use crate::{ClientResult, HttpClient};

/// The fetched catalog: ordered items plus their category labels
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuCatalog {
    /// Orderable items, sorted by (category, display_order) server-side
    pub items: Vec<MenuItem>,
    /// Deduplicated category labels in first-seen order, "All" prepended
    pub categories: Vec<String>,
}

impl MenuCatalog {
    /// Build from the item list, deriving the category strip
    pub fn from_items(items: Vec<MenuItem>) -> Self {
        let mut categories = vec!["All".to_string()];
        for item in &items {
            if !categories.iter().any(|c| c == &item.category) {
                categories.push(item.category.clone());
            }
        }
        Self { items, categories }
    }
}

/// Catalog HTTP client
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: HttpClient,
}

impl CatalogClient {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Fetch the orderable catalog. A transport or server failure yields an
    /// empty catalog — the storefront renders what it has.
    pub async fn list_orderable_items(&self) -> MenuCatalog {
        match self.fetch().await {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!("catalog fetch failed: {}", e);
                MenuCatalog::default()
            }
        }
    }

    async fn fetch(&self) -> ClientResult<MenuCatalog> {
        let items: Vec<MenuItem> = self.http.get("/api/menu/items?orderable=true").await?;
        Ok(MenuCatalog::from_items(items))
    }
}

/// Stale-response guard around the current catalog
///
/// `begin_fetch` hands out a token; `apply` accepts a result only while no
/// newer fetch has started since.
#[derive(Debug, Default)]
pub struct CatalogState {
    generation: AtomicU64,
    catalog: Mutex<MenuCatalog>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch; the returned token identifies it
    pub fn begin_fetch(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Apply a fetched catalog. Returns false (and changes nothing) when a
    /// newer fetch has started since `token` was issued.
    pub fn apply(&self, token: u64, catalog: MenuCatalog) -> bool {
        if token != self.generation.load(Ordering::SeqCst) {
            return false;
        }
        *self.catalog.lock().unwrap_or_else(|e| e.into_inner()) = catalog;
        true
    }

    /// Current catalog snapshot
    pub fn current(&self) -> MenuCatalog {
        self.catalog
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, category: &str) -> MenuItem {
        MenuItem {
            id: format!("menu_item:{}", name.to_lowercase()),
            name: name.to_string(),
            description: String::new(),
            category: category.to_string(),
            price: Some("10.00".parse().unwrap()),
            image_url: None,
            icon_name: "utensils".to_string(),
            is_popular: false,
            is_signature: false,
            display_order: 0,
        }
    }

    #[test]
    fn categories_dedup_preserving_order_with_all_first() {
        let catalog = MenuCatalog::from_items(vec![
            item("Samosa", "Starters"),
            item("Biryani", "Mains"),
            item("Karahi", "Mains"),
            item("Naan", "Breads"),
        ]);
        assert_eq!(catalog.categories, vec!["All", "Starters", "Mains", "Breads"]);
    }

    #[test]
    fn empty_catalog_still_offers_all() {
        let catalog = MenuCatalog::from_items(vec![]);
        assert_eq!(catalog.categories, vec!["All"]);
    }

    #[test]
    fn stale_response_is_discarded() {
        let state = CatalogState::new();

        let first = state.begin_fetch();
        let second = state.begin_fetch();

        // newer fetch resolves first
        assert!(state.apply(second, MenuCatalog::from_items(vec![item("Naan", "Breads")])));
        // the older response arrives late and must not overwrite
        assert!(!state.apply(first, MenuCatalog::from_items(vec![item("Samosa", "Starters")])));

        assert_eq!(state.current().items[0].name, "Naan");
    }
}

//! Repository Module
//!
//! Provides CRUD operations for the SurrealDB tables.

// Auth
pub mod user;

// Catalog
pub mod category;
pub mod menu_item;

// Orders
pub mod order;

// Bookings
pub mod booking;

// Marketing
pub mod campaign;

// System
pub mod settings;

// Re-exports
pub use booking::BookingRepository;
pub use campaign::CampaignRepository;
pub use category::MenuCategoryRepository;
pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;
pub use settings::SettingsRepository;
pub use user::UserRepository;

use surrealdb::{RecordId, Surreal, engine::local::Db};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: API 全程使用 "table:key" 字符串格式
// =============================================================================
//
// 使用 surrealdb::RecordId 处理所有 ID：
//   - 解析: "orders:abc".parse::<RecordId>()
//   - 创建: RecordId::from_table_key("orders", "abc")
//   - CRUD: db.select(id) / db.update(id) 直接使用 RecordId

/// Parse an API-facing id ("table:key" or bare key) into a RecordId
pub fn record_id(table: &str, id: &str) -> RepoResult<RecordId> {
    if id.contains(':') {
        id.parse::<RecordId>()
            .map_err(|_| RepoError::Validation(format!("Invalid id format: {id}")))
    } else {
        Ok(RecordId::from_table_key(table, id))
    }
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

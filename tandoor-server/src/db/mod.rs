//! Database Module
//!
//! Handles the embedded SurrealDB instance and schema definition.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "tandoor";
const DATABASE: &str = "tandoor";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the on-disk database (RocksDB backend)
    pub async fn open(dir: &Path) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(dir)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        Self::finish_init(db).await
    }

    /// Open an in-memory database (tests)
    pub async fn open_in_memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;
        Self::finish_init(db).await
    }

    async fn finish_init(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        define_schema(&db).await?;

        tracing::info!("Database ready (ns={NAMESPACE}, db={DATABASE})");
        Ok(Self { db })
    }
}

/// Schema definition
///
/// Tables stay schemaless; only the constraints the application relies on
/// are declared: unique user emails and the lookup indexes the admin list
/// views filter on.
async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(
        r#"
        DEFINE INDEX IF NOT EXISTS user_email ON TABLE user COLUMNS email UNIQUE;
        DEFINE INDEX IF NOT EXISTS orders_status ON TABLE orders COLUMNS status;
        DEFINE INDEX IF NOT EXISTS order_item_order_id ON TABLE order_item COLUMNS order_id;
        DEFINE INDEX IF NOT EXISTS booking_status ON TABLE booking COLUMNS status;
        "#,
    )
    .await
    .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;
    Ok(())
}

//! User Row

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::{AppRole, AuthUser};

use super::id_string;

/// User account row — the only place the password hash lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub email: String,
    /// Argon2 PHC string, never exposed through the API
    pub password_hash: String,
    pub role: AppRole,
    pub created_at: String,
}

impl From<UserRow> for AuthUser {
    fn from(row: UserRow) -> Self {
        AuthUser {
            id: id_string(&row.id),
            email: row.email,
            role: row.role,
        }
    }
}

//! User Repository

use serde::Serialize;

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::UserRow;
use crate::utils::now_rfc3339;
use shared::models::AppRole;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "user";

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<UserRow>> {
        let email_owned = email.to_lowercase();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let users: Vec<UserRow> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<UserRow>> {
        let user: Option<UserRow> = self.base.db().select(record_id(TABLE, id)?).await?;
        Ok(user)
    }

    /// Create an account; emails are stored lowercase and unique
    pub async fn create(&self, email: &str, password_hash: String) -> RepoResult<UserRow> {
        let email = email.to_lowercase();
        if self.find_by_email(&email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Account '{}' already exists",
                email
            )));
        }

        let row = UserRow {
            id: None,
            email,
            password_hash,
            role: AppRole::User,
            created_at: now_rfc3339(),
        };

        let created: Option<UserRow> = self.base.db().create(TABLE).content(row).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }

    pub async fn count_admins(&self) -> RepoResult<usize> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() AS total FROM user WHERE role = 'admin' GROUP ALL")
            .await?;
        #[derive(serde::Deserialize)]
        struct Count {
            total: usize,
        }
        let counts: Vec<Count> = result.take(0)?;
        Ok(counts.into_iter().next().map(|c| c.total).unwrap_or(0))
    }

    pub async fn set_role(&self, id: &str, role: AppRole) -> RepoResult<UserRow> {
        #[derive(Serialize)]
        struct RolePatch {
            role: AppRole,
        }

        let updated: Option<UserRow> = self
            .base
            .db()
            .update(record_id(TABLE, id)?)
            .merge(RolePatch { role })
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("User {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    #[tokio::test]
    async fn emails_are_unique_and_lowercased() {
        let db = DbService::open_in_memory().await.unwrap().db;
        let repo = UserRepository::new(db);

        repo.create("Admin@Example.com", "hash".into())
            .await
            .unwrap();
        let err = repo
            .create("admin@example.com", "hash".into())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));

        let found = repo.find_by_email("ADMIN@example.com").await.unwrap();
        assert_eq!(found.unwrap().email, "admin@example.com");
    }

    #[tokio::test]
    async fn admin_count_tracks_promotions() {
        let db = DbService::open_in_memory().await.unwrap().db;
        let repo = UserRepository::new(db);

        let user = repo.create("owner@example.com", "hash".into()).await.unwrap();
        assert_eq!(repo.count_admins().await.unwrap(), 0);

        repo.set_role(&user.id.unwrap().to_string(), AppRole::Admin)
            .await
            .unwrap();
        assert_eq!(repo.count_admins().await.unwrap(), 1);
    }
}

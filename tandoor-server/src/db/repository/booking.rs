//! Booking Repository

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::BookingRow;
use crate::utils::now_rfc3339;
use shared::models::{BookingCreate, BookingStatus};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "booking";

#[derive(Clone)]
pub struct BookingRepository {
    base: BaseRepository,
}

impl BookingRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, data: BookingCreate) -> RepoResult<BookingRow> {
        let now = now_rfc3339();
        let row = BookingRow {
            id: None,
            name: data.name,
            phone: data.phone,
            email: data.email,
            date: data.date,
            time: data.time,
            guests: data.guests,
            special_requests: data.special_requests,
            status: BookingStatus::Pending,
            created_at: now.clone(),
            updated_at: now,
        };

        let created: Option<BookingRow> = self.base.db().create(TABLE).content(row).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create booking".to_string()))
    }

    /// Same filter shape as the order list: exact status plus substring
    /// search across guest name, phone and email.
    pub async fn find_filtered(
        &self,
        status: Option<BookingStatus>,
        search: Option<&str>,
    ) -> RepoResult<Vec<BookingRow>> {
        let needle = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let bookings: Vec<BookingRow> = self
            .base
            .db()
            .query(
                r#"
                SELECT * FROM booking
                WHERE ($status = NONE OR status = $status)
                  AND ($needle = NONE
                       OR string::contains(string::lowercase(name), $needle)
                       OR string::contains(phone, $needle)
                       OR string::contains(string::lowercase(email ?? ''), $needle))
                ORDER BY date, time
                "#,
            )
            .bind(("status", status))
            .bind(("needle", needle))
            .await?
            .take(0)?;
        Ok(bookings)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<BookingRow>> {
        let booking: Option<BookingRow> = self.base.db().select(record_id(TABLE, id)?).await?;
        Ok(booking)
    }

    /// Advance the booking lifecycle along its transition table.
    ///
    /// Conditional on the status the edge was validated against, as the
    /// order lifecycle write is.
    pub async fn update_status(&self, id: &str, target: BookingStatus) -> RepoResult<BookingRow> {
        let rid = record_id(TABLE, id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Booking {} not found", id)))?;

        let next = existing
            .status
            .transition_to(target)
            .map_err(|e| RepoError::InvalidTransition(e.to_string()))?;

        let updated: Vec<BookingRow> = self
            .base
            .db()
            .query(
                "UPDATE $record SET status = $next, updated_at = $now \
                 WHERE status = $from RETURN AFTER",
            )
            .bind(("record", rid))
            .bind(("next", next))
            .bind(("from", existing.status))
            .bind(("now", now_rfc3339()))
            .await?
            .take(0)?;
        updated.into_iter().next().ok_or_else(|| {
            RepoError::InvalidTransition(format!(
                "Booking {} is no longer {}",
                id, existing.status
            ))
        })
    }
}

//! Booking Row

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::{Booking, BookingStatus};

use super::id_string;

/// Booking row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub date: String,
    pub time: String,
    pub guests: i32,
    pub special_requests: Option<String>,
    pub status: BookingStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: id_string(&row.id),
            name: row.name,
            phone: row.phone,
            email: row.email,
            date: row.date,
            time: row.time,
            guests: row.guests,
            special_requests: row.special_requests,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

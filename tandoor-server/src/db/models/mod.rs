//! Database Models
//!
//! Row types mirror the shared API models but keep SurrealDB `RecordId`
//! identifiers. `From` impls convert rows into the shared types, rendering
//! ids in the `table:key` string form the API exposes.

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
pub mod user;

// Re-exports
pub use booking::BookingRow;
pub use campaign::CampaignRow;
pub use category::MenuCategoryRow;
pub use menu_item::MenuItemRow;
pub use order::{OrderItemRow, OrderRow};
pub use settings::SettingsRow;
pub use user::UserRow;

use surrealdb::RecordId;

/// Render an optional record id the way the API exposes it
pub(crate) fn id_string(id: &Option<RecordId>) -> String {
    id.as_ref().map(|t| t.to_string()).unwrap_or_default()
}

//! Data models
//!
//! Shared between tandoor-server and tandoor-client (via API).
//! All IDs are `String` in the `table:key` form SurrealDB renders.

pub mod booking;
pub mod campaign;
pub mod cart;
pub mod category;
pub mod menu_item;
pub mod order;
pub mod role;
pub mod settings;

// Re-exports
pub use booking::*;
pub use campaign::*;
pub use cart::*;
pub use category::*;
pub use menu_item::*;
pub use order::*;
pub use role::*;
pub use settings::*;

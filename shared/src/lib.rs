//! Shared types for the Tandoor platform
//!
//! Common types used by both the server and the storefront client:
//! domain models, status state machines and sync-bus message types.

pub mod models;
pub mod sync;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Sync bus re-exports (for convenient access)
pub use sync::{BusMessage, EventType, SyncPayload};

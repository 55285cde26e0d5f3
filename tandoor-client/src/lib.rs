//! Tandoor Client - storefront-side library for the Tandoor server
//!
//! Provides the pieces the ordering UI is built on:
//!
//! - [`Cart`] - in-memory cart store
//! - [`validate_checkout`] - checkout field validation
//! - [`CatalogClient`] / [`CatalogState`] - menu fetching with stale-response
//!   protection
//! - [`OrderGateway`] - order submission and admin lifecycle helpers
//! - [`SettingsStore`] - restaurant settings with change notification
//! - [`SyncClient`] - TCP change-feed subscriber

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod http;
pub mod orders;
pub mod settings;
pub mod sync;

pub use cart::Cart;
pub use catalog::{CatalogClient, CatalogState, MenuCatalog};
pub use checkout::{CheckoutDetails, CheckoutErrors, CheckoutInput, validate_checkout};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use orders::OrderGateway;
pub use settings::SettingsStore;
pub use sync::SyncClient;

//! Cart Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::order::PlaceOrderLine;

/// One line of the storefront cart
///
/// Keyed by catalog item id — the cart never holds two lines with the same
/// id; adding an existing item increments its quantity instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalog item id
    pub id: String,
    pub name: String,
    /// Unit price in SAR
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub quantity: i32,
    pub image: Option<String>,
}

impl CartLine {
    /// Line subtotal (unit price × quantity), exact
    pub fn subtotal(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// Snapshot this line for order submission
    pub fn to_order_line(&self) -> PlaceOrderLine {
        PlaceOrderLine {
            menu_item_id: self.id.clone(),
            item_name: self.name.clone(),
            quantity: self.quantity,
            price: self.price,
        }
    }
}

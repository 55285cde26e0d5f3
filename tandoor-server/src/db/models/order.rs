//! Order Rows

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use shared::models::{Order, OrderItem, OrderStatus, OrderType};

use super::id_string;

/// Order row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub order_type: OrderType,
    pub special_instructions: Option<String>,
    pub status: OrderStatus,
    /// Total in SAR, computed from the item rows at creation time
    pub total_amount: Decimal,
    pub created_at: String,
    pub updated_at: String,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Order {
            id: id_string(&row.id),
            customer_name: row.customer_name,
            customer_email: row.customer_email,
            customer_phone: row.customer_phone,
            order_type: row.order_type,
            special_instructions: row.special_instructions,
            status: row.status,
            total_amount: row.total_amount,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Order item row — immutable snapshot, linked to its parent via `order_id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Parent order reference
    pub order_id: RecordId,
    pub menu_item_id: String,
    pub item_name: String,
    pub quantity: i32,
    /// Unit price in SAR at time of order
    pub price: Decimal,
    pub created_at: String,
}

impl From<OrderItemRow> for OrderItem {
    fn from(row: OrderItemRow) -> Self {
        OrderItem {
            id: id_string(&row.id),
            order_id: row.order_id.to_string(),
            menu_item_id: row.menu_item_id,
            item_name: row.item_name,
            quantity: row.quantity,
            price: row.price,
            created_at: row.created_at,
        }
    }
}

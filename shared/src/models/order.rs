//! Order Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Maximum quantity a single order line may carry.
///
/// The ordering UI has no natural upper bound, so the cap lives here and is
/// enforced on both sides: the cart clamps to it, the server rejects above it.
pub const MAX_LINE_QUANTITY: i32 = 99;

/// Order status lifecycle
///
/// Happy path is linear: pending → confirmed → preparing → ready → completed.
/// Cancellation is only reachable from pending or confirmed.
/// Transitions outside [`OrderStatus::allowed_next`] are rejected with
/// [`InvalidTransition`] — status is never written as a free-form string.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// States directly reachable from this one
    pub fn allowed_next(&self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::Pending => &[OrderStatus::Confirmed, OrderStatus::Cancelled],
            OrderStatus::Confirmed => &[OrderStatus::Preparing, OrderStatus::Cancelled],
            OrderStatus::Preparing => &[OrderStatus::Ready],
            OrderStatus::Ready => &[OrderStatus::Completed],
            OrderStatus::Completed | OrderStatus::Cancelled => &[],
        }
    }

    pub fn can_transition_to(&self, target: OrderStatus) -> bool {
        self.allowed_next().contains(&target)
    }

    /// Completed and cancelled orders accept no further transitions
    pub fn is_terminal(&self) -> bool {
        self.allowed_next().is_empty()
    }

    /// Validate an edge of the lifecycle graph
    pub fn transition_to(self, target: OrderStatus) -> Result<OrderStatus, InvalidTransition> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(InvalidTransition {
                from: self,
                to: target,
            })
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "preparing" => Ok(OrderStatus::Preparing),
            "ready" => Ok(OrderStatus::Ready),
            "completed" => Ok(OrderStatus::Completed),
            "cancelled" => Ok(OrderStatus::Cancelled),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Rejected lifecycle edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid order status transition: {from} -> {to}")]
pub struct InvalidTransition {
    pub from: OrderStatus,
    pub to: OrderStatus,
}

/// Status string that is not part of the lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order status: {0}")]
pub struct UnknownStatus(pub String);

/// Order fulfilment type — delivery is not modeled
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    #[default]
    Takeaway,
    Pickup,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Takeaway => write!(f, "takeaway"),
            OrderType::Pickup => write!(f, "pickup"),
        }
    }
}

/// Order entity
///
/// `total_amount` is computed server-side from the submitted lines at
/// creation time and never recomputed — items are immutable post-creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub order_type: OrderType,
    pub special_instructions: Option<String>,
    pub status: OrderStatus,
    /// Total amount in SAR, a JSON number on the wire
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub created_at: String,
    pub updated_at: String,
}

/// Order line item — a denormalized snapshot, independent of later catalog
/// mutation. Immutable after the parent order is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub order_id: String,
    /// Catalog item reference at time of order
    pub menu_item_id: String,
    pub item_name: String,
    pub quantity: i32,
    /// Unit price in SAR at time of order
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub created_at: String,
}

/// Place-order payload (public checkout endpoint)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrder {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub order_type: OrderType,
    pub special_instructions: Option<String>,
    pub items: Vec<PlaceOrderLine>,
}

/// One submitted cart line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrderLine {
    pub menu_item_id: String,
    pub item_name: String,
    pub quantity: i32,
    /// Unit price in SAR
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

/// Place-order response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrderResult {
    pub order_id: String,
}

/// Status update payload (admin endpoint)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_is_linear() {
        let mut status = OrderStatus::Pending;
        for next in [
            OrderStatus::Confirmed,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Completed,
        ] {
            status = status.transition_to(next).unwrap();
        }
        assert!(status.is_terminal());
    }

    #[test]
    fn cancel_only_from_pending_or_confirmed() {
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Cancelled));
        assert!(OrderStatus::Confirmed.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Preparing.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Ready.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Completed.can_transition_to(OrderStatus::Cancelled));
    }

    #[test]
    fn skipping_states_is_rejected() {
        let err = OrderStatus::Pending
            .transition_to(OrderStatus::Ready)
            .unwrap_err();
        assert_eq!(
            err,
            InvalidTransition {
                from: OrderStatus::Pending,
                to: OrderStatus::Ready,
            }
        );
    }

    #[test]
    fn terminal_states_reject_everything() {
        for target in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ] {
            assert!(OrderStatus::Completed.transition_to(target).is_err());
            assert!(OrderStatus::Cancelled.transition_to(target).is_err());
        }
    }

    #[test]
    fn money_travels_as_json_numbers() {
        use rust_decimal::Decimal;

        let payload: PlaceOrder = serde_json::from_value(serde_json::json!({
            "name": "Fahad",
            "email": "fahad@example.com",
            "phone": "0501234567",
            "order_type": "takeaway",
            "special_instructions": null,
            "items": [
                { "menu_item_id": "menu_item:biryani", "item_name": "Biryani", "quantity": 2, "price": 45.0 }
            ]
        }))
        .expect("float prices must deserialize");
        assert_eq!(payload.items[0].price, Decimal::from(45));

        let order = Order {
            id: "orders:abc".into(),
            customer_name: "Fahad".into(),
            customer_email: "fahad@example.com".into(),
            customer_phone: "0501234567".into(),
            order_type: OrderType::Takeaway,
            special_instructions: None,
            status: OrderStatus::Pending,
            total_amount: "98.00".parse().unwrap(),
            created_at: String::new(),
            updated_at: String::new(),
        };
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["total_amount"], serde_json::json!(98.0));
    }

    #[test]
    fn status_round_trips_through_strings() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
        assert!("active".parse::<OrderStatus>().is_err());
    }
}

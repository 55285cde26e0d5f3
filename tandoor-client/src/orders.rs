//! Order submission and admin lifecycle helpers
//!
//! Submission snapshots the cart into order lines; the server recomputes
//! the total from those lines, so no total is sent. An empty cart is
//! rejected locally before any network traffic.

use crate::cart::Cart;
use crate::checkout::CheckoutDetails;
use crate::{ClientError, ClientResult, HttpClient};
use shared::models::{
    Order, OrderItem, OrderStatus, OrderStatusUpdate, OrderType, PlaceOrder, PlaceOrderResult,
};

/// Order gateway
#[derive(Debug, Clone)]
pub struct OrderGateway {
    http: HttpClient,
}

impl OrderGateway {
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Submit the cart as an order. Returns the generated order id; the
    /// caller clears the cart on success.
    pub async fn submit_order(
        &self,
        cart: &Cart,
        details: &CheckoutDetails,
        order_type: OrderType,
    ) -> ClientResult<String> {
        if cart.is_empty() {
            return Err(ClientError::EmptyCart);
        }

        let payload = PlaceOrder {
            name: details.name.clone(),
            email: details.email.clone(),
            phone: details.phone.clone(),
            order_type,
            special_instructions: details.special_instructions.clone(),
            items: cart.lines().iter().map(|l| l.to_order_line()).collect(),
        };

        let result: PlaceOrderResult = self.http.post("/api/orders", &payload).await?;
        Ok(result.order_id)
    }

    /// List orders with optional status filter and search (admin)
    pub async fn list_orders(
        &self,
        status: Option<&str>,
        search: Option<&str>,
    ) -> ClientResult<Vec<Order>> {
        let mut query = Vec::new();
        if let Some(status) = status {
            query.push(format!("status={status}"));
        }
        if let Some(search) = search {
            query.push(format!("search={search}"));
        }
        let path = if query.is_empty() {
            "/api/orders".to_string()
        } else {
            format!("/api/orders?{}", query.join("&"))
        };
        self.http.get(&path).await
    }

    /// Fetch a single order (admin)
    pub async fn order(&self, id: &str) -> ClientResult<Order> {
        self.http.get(&format!("/api/orders/{id}")).await
    }

    /// Fetch an order's line items lazily (admin)
    pub async fn order_items(&self, id: &str) -> ClientResult<Vec<OrderItem>> {
        self.http.get(&format!("/api/orders/{id}/items")).await
    }

    /// Advance an order along its lifecycle (admin)
    pub async fn advance_order(&self, id: &str, target: OrderStatus) -> ClientResult<Order> {
        self.http
            .patch(
                &format!("/api/orders/{id}/status"),
                &OrderStatusUpdate { status: target },
            )
            .await
    }
}

//! Order Repository
//!
//! Order + item rows are created together in one transaction; items are
//! immutable afterwards and all later mutation goes through `update_status`,
//! which enforces the lifecycle graph.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{OrderItemRow, OrderRow};
use crate::utils::now_rfc3339;
use shared::models::{OrderStatus, PlaceOrder};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "orders";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

/// Item content bound into the creation transaction; the parent link is
/// filled in by the query from the freshly created order id.
#[derive(Debug, Serialize)]
struct LineContent {
    menu_item_id: String,
    item_name: String,
    quantity: i32,
    price: Decimal,
    created_at: String,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Atomically create an order and its item rows.
    ///
    /// The total is computed here, server-side, from the submitted lines —
    /// a client-supplied total is never accepted for persistence.
    pub async fn create_with_items(&self, data: PlaceOrder) -> RepoResult<OrderRow> {
        if data.items.is_empty() {
            return Err(RepoError::Validation("Order has no items".to_string()));
        }

        let now = now_rfc3339();
        let total_amount: Decimal = data
            .items
            .iter()
            .map(|line| line.price * Decimal::from(line.quantity))
            .sum();

        let order = OrderRow {
            id: None,
            customer_name: data.name,
            customer_email: data.email,
            customer_phone: data.phone,
            order_type: data.order_type,
            special_instructions: data.special_instructions,
            status: OrderStatus::Pending,
            total_amount,
            created_at: now.clone(),
            updated_at: now.clone(),
        };

        let lines: Vec<LineContent> = data
            .items
            .into_iter()
            .map(|line| LineContent {
                menu_item_id: line.menu_item_id,
                item_name: line.item_name,
                quantity: line.quantity,
                price: line.price,
                created_at: now.clone(),
            })
            .collect();

        let mut result = self
            .base
            .db()
            .query(
                r#"
                BEGIN TRANSACTION;
                LET $created = (CREATE ONLY orders CONTENT $order);
                FOR $line IN $lines {
                    CREATE order_item CONTENT {
                        order_id: $created.id,
                        menu_item_id: $line.menu_item_id,
                        item_name: $line.item_name,
                        quantity: $line.quantity,
                        price: $line.price,
                        created_at: $line.created_at,
                    };
                };
                RETURN $created;
                COMMIT TRANSACTION;
                "#,
            )
            .bind(("order", order))
            .bind(("lines", lines))
            .await?;

        // A transaction with RETURN collapses into a single result slot
        let created: Option<OrderRow> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    /// Filtered listing: exact status (or all) plus case-insensitive
    /// substring search across customer name, phone and email; newest first.
    pub async fn find_filtered(
        &self,
        status: Option<OrderStatus>,
        search: Option<&str>,
    ) -> RepoResult<Vec<OrderRow>> {
        let needle = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase);

        let orders: Vec<OrderRow> = self
            .base
            .db()
            .query(
                r#"
                SELECT * FROM orders
                WHERE ($status = NONE OR status = $status)
                  AND ($needle = NONE
                       OR string::contains(string::lowercase(customer_name), $needle)
                       OR string::contains(customer_phone, $needle)
                       OR string::contains(string::lowercase(customer_email), $needle))
                ORDER BY created_at DESC
                "#,
            )
            .bind(("status", status))
            .bind(("needle", needle))
            .await?
            .take(0)?;
        Ok(orders)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<OrderRow>> {
        let order: Option<OrderRow> = self.base.db().select(record_id(TABLE, id)?).await?;
        Ok(order)
    }

    /// Item rows for one order — fetched lazily per order, never with the list
    pub async fn find_items(&self, order_id: &str) -> RepoResult<Vec<OrderItemRow>> {
        let rid = record_id(TABLE, order_id)?;
        let items: Vec<OrderItemRow> = self
            .base
            .db()
            .query("SELECT * FROM order_item WHERE order_id = $order ORDER BY item_name")
            .bind(("order", rid))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Advance the lifecycle. Only edges in the transition table are
    /// accepted; everything else is rejected before anything is written.
    ///
    /// The write is conditional on the status the edge was validated
    /// against, so a concurrent update cannot smuggle in a forbidden edge.
    pub async fn update_status(&self, id: &str, target: OrderStatus) -> RepoResult<OrderRow> {
        let rid = record_id(TABLE, id)?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Order {} not found", id)))?;

        let next = existing
            .status
            .transition_to(target)
            .map_err(|e| RepoError::InvalidTransition(e.to_string()))?;

        let updated: Vec<OrderRow> = self
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
                "Order {} is no longer {}",
                id, existing.status
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use shared::models::{OrderType, PlaceOrderLine};

    fn place_order(name: &str, phone: &str, lines: Vec<(&str, i32, &str)>) -> PlaceOrder {
        PlaceOrder {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: phone.to_string(),
            order_type: OrderType::Takeaway,
            special_instructions: None,
            items: lines
                .into_iter()
                .map(|(item, qty, price)| PlaceOrderLine {
                    menu_item_id: format!("menu_item:{item}"),
                    item_name: item.to_string(),
                    quantity: qty,
                    price: price.parse().unwrap(),
                })
                .collect(),
        }
    }

    async fn repo() -> OrderRepository {
        let db = DbService::open_in_memory().await.unwrap().db;
        OrderRepository::new(db)
    }

    #[tokio::test]
    async fn creates_order_with_items_and_server_computed_total() {
        let repo = repo().await;
        let created = repo
            .create_with_items(place_order(
                "Fahad",
                "0501234567",
                vec![("Biryani", 2, "45.00"), ("Naan", 1, "8.00")],
            ))
            .await
            .unwrap();

        assert_eq!(created.status, OrderStatus::Pending);
        assert_eq!(created.total_amount, "98.00".parse::<Decimal>().unwrap());

        let id = created.id.as_ref().unwrap().to_string();
        let items = repo.find_items(&id).await.unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.order_id.to_string() == id));
    }

    #[tokio::test]
    async fn empty_order_is_rejected() {
        let repo = repo().await;
        let err = repo
            .create_with_items(place_order("Fahad", "0501234567", vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[tokio::test]
    async fn status_filter_returns_exact_matches() {
        let repo = repo().await;
        let mut ids = Vec::new();
        for name in ["Aisha", "Bilal", "Chandra", "Dana"] {
            let created = repo
                .create_with_items(place_order(name, "0501234567", vec![("Naan", 1, "8.00")]))
                .await
                .unwrap();
            ids.push(created.id.unwrap().to_string());
        }
        // 2 confirmed, 1 cancelled, 1 left pending
        repo.update_status(&ids[0], OrderStatus::Confirmed)
            .await
            .unwrap();
        repo.update_status(&ids[1], OrderStatus::Confirmed)
            .await
            .unwrap();
        repo.update_status(&ids[2], OrderStatus::Cancelled)
            .await
            .unwrap();

        let confirmed = repo
            .find_filtered(Some(OrderStatus::Confirmed), None)
            .await
            .unwrap();
        assert_eq!(confirmed.len(), 2);
        assert!(confirmed.iter().all(|o| o.status == OrderStatus::Confirmed));

        let all = repo.find_filtered(None, None).await.unwrap();
        assert_eq!(all.len(), 4);
    }

    #[tokio::test]
    async fn search_matches_name_phone_and_email_case_insensitively() {
        let repo = repo().await;
        repo.create_with_items(place_order(
            "Fahad",
            "0501234567",
            vec![("Naan", 1, "8.00")],
        ))
        .await
        .unwrap();
        repo.create_with_items(place_order(
            "Noura",
            "0559876543",
            vec![("Naan", 1, "8.00")],
        ))
        .await
        .unwrap();

        let by_name = repo.find_filtered(None, Some("fAhAd")).await.unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].customer_name, "Fahad");

        let by_phone = repo.find_filtered(None, Some("055987")).await.unwrap();
        assert_eq!(by_phone.len(), 1);

        let by_email = repo.find_filtered(None, Some("noura@")).await.unwrap();
        assert_eq!(by_email.len(), 1);

        let none = repo.find_filtered(None, Some("zzz")).await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn racing_updates_cannot_combine_into_a_forbidden_edge() {
        let repo = repo().await;
        let created = repo
            .create_with_items(place_order(
                "Fahad",
                "0501234567",
                vec![("Naan", 1, "8.00")],
            ))
            .await
            .unwrap();
        let id = created.id.unwrap().to_string();
        repo.update_status(&id, OrderStatus::Confirmed).await.unwrap();

        // both edges leave `confirmed`; whichever lands first invalidates
        // the other's conditional write, so preparing -> cancelled can
        // never be assembled out of the pair
        let (a, b) = tokio::join!(
            repo.update_status(&id, OrderStatus::Preparing),
            repo.update_status(&id, OrderStatus::Cancelled),
        );
        assert!(a.is_ok() != b.is_ok());

        let status = repo.find_by_id(&id).await.unwrap().unwrap().status;
        assert!(status == OrderStatus::Preparing || status == OrderStatus::Cancelled);
    }

    #[tokio::test]
    async fn lifecycle_advances_only_along_the_table() {
        let repo = repo().await;
        let created = repo
            .create_with_items(place_order(
                "Fahad",
                "0501234567",
                vec![("Naan", 1, "8.00")],
            ))
            .await
            .unwrap();
        let id = created.id.unwrap().to_string();

        // pending -> ready skips states and must fail
        let err = repo.update_status(&id, OrderStatus::Ready).await.unwrap_err();
        assert!(matches!(err, RepoError::InvalidTransition(_)));

        for target in [
            OrderStatus::Confirmed,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Completed,
        ] {
            let updated = repo.update_status(&id, target).await.unwrap();
            assert_eq!(updated.status, target);
        }

        // terminal state rejects further transitions
        let err = repo
            .update_status(&id, OrderStatus::Cancelled)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::InvalidTransition(_)));
    }
}

//! Order API Handlers
//!
//! 下单服务端重新校验所有字段并自行计算总价 —— 客户端提交的
//! 金额汇总永远不被信任。

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::OrderRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MIN_NAME_LEN, validate_email, validate_optional_text,
    validate_phone, validate_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{
    MAX_LINE_QUANTITY, Order, OrderItem, OrderStatus, OrderStatusUpdate, PlaceOrder,
    PlaceOrderResult,
};

const RESOURCE: &str = "order";

/// POST /api/orders - 下单 (公开)
///
/// 订单行与订单在同一个数据库事务中写入。
pub async fn place_order(
    State(state): State<ServerState>,
    Json(mut payload): Json<PlaceOrder>,
) -> AppResult<Json<PlaceOrderResult>> {
    payload.name = validate_text(&payload.name, "name", MIN_NAME_LEN, MAX_NAME_LEN)?;
    payload.email = validate_email(&payload.email)?;
    payload.phone = validate_phone(&payload.phone)?;
    payload.special_instructions = validate_optional_text(
        &payload.special_instructions,
        "special_instructions",
        MAX_NOTE_LEN,
    )?;

    if payload.items.is_empty() {
        return Err(AppError::validation("Order has no items"));
    }
    for line in &payload.items {
        if line.quantity < 1 || line.quantity > MAX_LINE_QUANTITY {
            return Err(AppError::validation(format!(
                "quantity must be between 1 and {MAX_LINE_QUANTITY}"
            )));
        }
        if line.price.is_sign_negative() {
            return Err(AppError::validation("price must not be negative"));
        }
    }

    let repo = OrderRepository::new(state.db.clone());
    let order = repo.create_with_items(payload).await?;

    let order_id = order.id.as_ref().map(|r| r.to_string()).unwrap_or_default();
    state.broadcast_sync(RESOURCE, "created", &order_id);
    tracing::info!(order_id = %order_id, total = %order.total_amount, "order placed");

    Ok(Json(PlaceOrderResult { order_id }))
}

#[derive(Deserialize)]
pub struct OrderListQuery {
    /// 精确状态；缺省或 "all" 表示不过滤
    pub status: Option<String>,
    /// 客户姓名 / 电话 / 邮箱的大小写不敏感子串搜索
    pub search: Option<String>,
}

fn parse_status_filter(raw: Option<&str>) -> Result<Option<OrderStatus>, AppError> {
    match raw {
        None | Some("") | Some("all") => Ok(None),
        Some(value) => value
            .parse::<OrderStatus>()
            .map(Some)
            .map_err(|e| AppError::validation(e.to_string())),
    }
}

/// GET /api/orders?status=&search= - 订单列表 (管理员)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let status = parse_status_filter(query.status.as_deref())?;

    let repo = OrderRepository::new(state.db.clone());
    let orders = repo.find_filtered(status, query.search.as_deref()).await?;
    Ok(Json(orders.into_iter().map(|o| o.into()).collect()))
}

/// GET /api/orders/:id - 单个订单 (管理员)
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;
    Ok(Json(order.into()))
}

/// GET /api/orders/:id/items - 订单行 (管理员，按需拉取)
pub async fn list_items(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<OrderItem>>> {
    let repo = OrderRepository::new(state.db.clone());
    // 订单不存在与订单无行要区分开
    repo.find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {} not found", id)))?;

    let items = repo.find_items(&id).await?;
    Ok(Json(items.into_iter().map(|i| i.into()).collect()))
}

/// PATCH /api/orders/:id/status - 推进订单生命周期 (管理员)
///
/// 只接受迁移表中的边；其余请求返回 400，数据不变。
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OrderStatusUpdate>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo.update_status(&id, payload.status).await?;

    state.broadcast_sync(RESOURCE, "status_changed", &id);
    tracing::info!(order_id = %id, status = %order.status, "order status advanced");

    Ok(Json(order.into()))
}

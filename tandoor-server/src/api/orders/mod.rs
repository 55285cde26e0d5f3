//! Order API 模块
//!
//! 下单是公开操作；订单列表与生命周期管理仅管理员可用。

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::{require_admin, require_auth};
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    Router::new().nest("/api/orders", routes(state))
}

fn routes(state: &ServerState) -> Router<ServerState> {
    let public_routes = Router::new().route("/", post(handler::place_order));

    let admin_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/items", get(handler::list_items))
        .route("/{id}/status", axum::routing::patch(handler::update_status))
        .layer(middleware::from_fn(require_admin))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    public_routes.merge(admin_routes)
}

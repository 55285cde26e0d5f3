//! Menu Item API 模块

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::{require_admin, require_auth};
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    Router::new().nest("/api/menu/items", routes(state))
}

fn routes(state: &ServerState) -> Router<ServerState> {
    // 读取公开：菜单是门店橱窗
    let read_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id));

    // 写入仅管理员
    let manage_routes = Router::new()
        .route("/", axum::routing::post(handler::create))
        .route("/{id}", axum::routing::put(handler::update).delete(handler::delete))
        .layer(middleware::from_fn(require_admin))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    read_routes.merge(manage_routes)
}

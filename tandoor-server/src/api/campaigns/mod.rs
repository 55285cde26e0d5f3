//! Campaign API 模块

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::{require_admin, require_auth};
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    Router::new().nest("/api/campaigns", routes(state))
}

fn routes(state: &ServerState) -> Router<ServerState> {
    // 门店首页横幅只需要当前生效的活动
    let public_routes = Router::new().route("/active", get(handler::list_active));

    let admin_routes = Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", axum::routing::put(handler::update).delete(handler::delete))
        .layer(middleware::from_fn(require_admin))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    public_routes.merge(admin_routes)
}

//! Restaurant Settings API 模块

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::{require_admin, require_auth};
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    Router::new().nest("/api/settings", routes(state))
}

fn routes(state: &ServerState) -> Router<ServerState> {
    let read_routes = Router::new().route("/", get(handler::get));

    let manage_routes = Router::new()
        .route("/", axum::routing::put(handler::save))
        .layer(middleware::from_fn(require_admin))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    read_routes.merge(manage_routes)
}

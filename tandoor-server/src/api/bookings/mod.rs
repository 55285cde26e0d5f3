//! Booking API 模块

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::{require_admin, require_auth};
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    Router::new().nest("/api/bookings", routes(state))
}

fn routes(state: &ServerState) -> Router<ServerState> {
    let public_routes = Router::new().route("/", post(handler::create));

    let admin_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}/status", axum::routing::patch(handler::update_status))
        .layer(middleware::from_fn(require_admin))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth));

    public_routes.merge(admin_routes)
}

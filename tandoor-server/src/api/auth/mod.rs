//! Auth API 模块

mod handler;

use axum::middleware as axum_middleware;
use axum::{Router, routing::get, routing::post};

use crate::auth::require_auth;
use crate::core::ServerState;

pub fn router(state: &ServerState) -> Router<ServerState> {
    let protected = Router::new()
        .route("/me", get(handler::me))
        .route_layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    let public = Router::new()
        .route("/signup", post(handler::signup))
        .route("/login", post(handler::login))
        .route("/bootstrap-admin", post(handler::bootstrap_admin));

    Router::new().nest("/api/auth", public.merge(protected))
}

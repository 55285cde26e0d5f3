//! HTTP API
//!
//! 每个资源一个目录 (`mod.rs` 路由 + `handler.rs` 处理函数)。
//! 公共路由与管理员路由在各自模块内划分：管理员路由先经过
//! `require_auth` 再经过 `require_admin`，未通过校验的请求在
//! 处理函数之前就被拒绝。

use std::time::Duration;

use axum::Router;
use axum::error_handling::HandleErrorLayer;
use axum::http::StatusCode;
use http::{HeaderName, HeaderValue};
use tower::ServiceBuilder;
use tower::limit::ConcurrencyLimitLayer;
use tower::timeout::TimeoutLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

/// Maximum concurrent in-flight requests
const MAX_CONCURRENT_REQUESTS: usize = 512;

pub mod auth;
pub mod bookings;
pub mod campaigns;
pub mod health;
pub mod menu_categories;
pub mod menu_items;
pub mod orders;
pub mod settings;

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no tower middleware)
pub fn build_router(state: &ServerState) -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(auth::router(state))
        .merge(menu_items::router(state))
        .merge(menu_categories::router(state))
        .merge(orders::router(state))
        .merge(bookings::router(state))
        .merge(campaigns::router(state))
        .merge(settings::router(state))
}

/// Build a fully configured application with all middleware
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router(state)
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Compression - Gzip compress responses
        .layer(CompressionLayer::new())
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Request ID - Generate unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        // Concurrency limit and per-request timeout
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(|_: tower::BoxError| async {
                    StatusCode::REQUEST_TIMEOUT
                }))
                .layer(TimeoutLayer::new(Duration::from_millis(
                    state.config.request_timeout_ms,
                )))
                .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS)),
        )
}

//! End-to-end order flow over the HTTP router (in-memory database)

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use shared::models::AppRole;
use tandoor_server::db::repository::UserRepository;
use tandoor_server::{Config, ServerState};

const BODY_LIMIT: usize = 1024 * 1024;

async fn test_state() -> ServerState {
    let config = Config::with_overrides("/tmp/tandoor-test", 0, 0);
    ServerState::initialize_in_memory(&config).await.unwrap()
}

fn app(state: &ServerState) -> axum::Router {
    tandoor_server::api::build_app(state).with_state(state.clone())
}

async fn admin_token(state: &ServerState) -> String {
    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .create("admin@tandoor.example", "unused-hash".into())
        .await
        .unwrap();
    let id = user.id.unwrap().to_string();
    let admin = repo.set_role(&id, AppRole::Admin).await.unwrap();
    state
        .jwt_service
        .generate_token(&id, &admin.email, AppRole::Admin)
        .unwrap()
}

fn post_json(path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn authed(mut req: Request<Body>, token: &str) -> Request<Body> {
    req.headers_mut().insert(
        header::AUTHORIZATION,
        format!("Bearer {token}").parse().unwrap(),
    );
    req
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn order_payload() -> Value {
    json!({
        "name": "Fahad",
        "email": "fahad@example.com",
        "phone": "0501234567",
        "order_type": "takeaway",
        "special_instructions": null,
        "items": [
            { "menu_item_id": "menu_item:biryani", "item_name": "Biryani", "quantity": 2, "price": 45.0 },
            { "menu_item_id": "menu_item:naan", "item_name": "Naan", "quantity": 1, "price": 8.0 }
        ]
    })
}

#[tokio::test]
async fn place_list_advance_and_reject_bad_edge() {
    let state = test_state().await;
    let token = admin_token(&state).await;

    // Place an order (public)
    let response = app(&state)
        .oneshot(post_json("/api/orders", order_payload()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let placed = json_body(response).await;
    let order_id = placed["order_id"].as_str().unwrap().to_string();
    assert!(order_id.starts_with("orders:"));

    // Admin list shows it pending with the server-computed total
    let response = app(&state)
        .oneshot(authed(
            Request::get("/api/orders?status=pending").body(Body::empty()).unwrap(),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let orders = json_body(response).await;
    assert_eq!(orders.as_array().unwrap().len(), 1);
    assert_eq!(orders[0]["total_amount"], json!(98.0));

    // Items are fetched lazily per order
    let response = app(&state)
        .oneshot(authed(
            Request::get(format!("/api/orders/{order_id}/items"))
                .body(Body::empty())
                .unwrap(),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let items = json_body(response).await;
    assert_eq!(items.as_array().unwrap().len(), 2);

    // pending -> ready skips states: rejected, nothing written
    let response = app(&state)
        .oneshot(authed(
            Request::patch(format!("/api/orders/{order_id}/status"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "status": "ready" }).to_string()))
                .unwrap(),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // pending -> confirmed is a legal edge
    let response = app(&state)
        .oneshot(authed(
            Request::patch(format!("/api/orders/{order_id}/status"))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "status": "confirmed" }).to_string()))
                .unwrap(),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_body(response).await;
    assert_eq!(updated["status"], "confirmed");
}

#[tokio::test]
async fn empty_order_is_a_validation_error() {
    let state = test_state().await;

    let mut payload = order_payload();
    payload["items"] = json!([]);

    let response = app(&state)
        .oneshot(post_json("/api/orders", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["code"], "E0002");
}

#[tokio::test]
async fn oversized_quantity_is_rejected() {
    let state = test_state().await;

    let mut payload = order_payload();
    payload["items"][0]["quantity"] = json!(100);

    let response = app(&state)
        .oneshot(post_json("/api/orders", payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn admin_routes_require_a_token() {
    let state = test_state().await;

    let response = app(&state)
        .oneshot(Request::get("/api/orders").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn non_admin_tokens_are_forbidden() {
    let state = test_state().await;

    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .create("guest@example.com", "unused-hash".into())
        .await
        .unwrap();
    let token = state
        .jwt_service
        .generate_token(&user.id.unwrap().to_string(), &user.email, AppRole::User)
        .unwrap();

    let response = app(&state)
        .oneshot(authed(
            Request::get("/api/orders").body(Body::empty()).unwrap(),
            &token,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

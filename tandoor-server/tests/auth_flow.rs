//! Signup, login and first-admin bootstrap over the HTTP router

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use tandoor_server::{Config, ServerState};

const BODY_LIMIT: usize = 1024 * 1024;

async fn test_state() -> ServerState {
    let config = Config::with_overrides("/tmp/tandoor-test", 0, 0);
    ServerState::initialize_in_memory(&config).await.unwrap()
}

fn app(state: &ServerState) -> axum::Router {
    tandoor_server::api::build_app(state).with_state(state.clone())
}

fn post_json(path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), BODY_LIMIT)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn signup(state: &ServerState, email: &str) -> Value {
    let response = app(state)
        .oneshot(post_json(
            "/api/auth/signup",
            json!({ "email": email, "password": "correct horse battery" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response).await
}

#[tokio::test]
async fn first_bootstrap_promotes_later_ones_are_forbidden() {
    let state = test_state().await;

    let body = signup(&state, "owner@tandoor.example").await;
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(body["user"]["role"], "user");

    // While no admin exists, bootstrap promotes the named account
    let response = app(&state)
        .oneshot(post_json(
            "/api/auth/bootstrap-admin",
            json!({ "email": "owner@tandoor.example" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let promoted = json_body(response).await;
    assert_eq!(promoted["role"], "admin");

    // Once an admin exists, the endpoint is closed for everyone
    signup(&state, "late@tandoor.example").await;
    let response = app(&state)
        .oneshot(post_json(
            "/api/auth/bootstrap-admin",
            json!({ "email": "late@tandoor.example" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = json_body(response).await;
    assert_eq!(body["code"], "E2001");
}

#[tokio::test]
async fn bootstrap_for_an_unknown_account_is_not_found() {
    let state = test_state().await;

    let response = app(&state)
        .oneshot(post_json(
            "/api/auth/bootstrap-admin",
            json!({ "email": "ghost@tandoor.example" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn login_round_trips_the_signup_password() {
    let state = test_state().await;
    signup(&state, "guest@tandoor.example").await;

    let response = app(&state)
        .oneshot(post_json(
            "/api/auth/login",
            json!({ "email": "guest@tandoor.example", "password": "correct horse battery" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Wrong password gets the same undifferentiated rejection as a
    // missing account
    let response = app(&state)
        .oneshot(post_json(
            "/api/auth/login",
            json!({ "email": "guest@tandoor.example", "password": "wrong password" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["code"], "E0006");
}

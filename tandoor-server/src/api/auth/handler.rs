//! Auth API Handlers
//!
//! 注册 / 登录 / 当前用户 / 首个管理员引导。
//! 登录失败统一返回 "Invalid email or password"，避免账号枚举。

use axum::{Extension, Json, extract::State};

use crate::auth::{CurrentUser, hash_password, verify_password};
use crate::core::ServerState;
use crate::db::repository::UserRepository;
use crate::utils::validation::{MAX_PASSWORD_LEN, MIN_PASSWORD_LEN, validate_email, validate_text};
use crate::utils::{AppError, AppResult};
use shared::models::{
    AppRole, AuthUser, BootstrapAdminRequest, LoginRequest, LoginResponse, SignupRequest,
};

/// POST /api/auth/signup - 注册新账号
///
/// 所有账号以 `user` 角色创建；管理员通过 bootstrap 或既有管理员授予。
pub async fn signup(
    State(state): State<ServerState>,
    Json(payload): Json<SignupRequest>,
) -> AppResult<Json<LoginResponse>> {
    let email = validate_email(&payload.email)?;
    let password = validate_text(&payload.password, "password", MIN_PASSWORD_LEN, MAX_PASSWORD_LEN)?;

    let hash = hash_password(&password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {}", e)))?;

    let repo = UserRepository::new(state.db.clone());
    let user = repo.create(&email, hash).await?;

    respond_with_token(&state, user.into())
}

/// POST /api/auth/login - 登录
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .find_by_email(payload.email.trim())
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    let valid = verify_password(&payload.password, &user.password_hash)
        .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;
    if !valid {
        tracing::warn!(target: "security", email = %user.email, "login_failed");
        return Err(AppError::invalid_credentials());
    }

    respond_with_token(&state, user.into())
}

/// GET /api/auth/me - 当前登录用户
pub async fn me(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentUser>,
) -> AppResult<Json<AuthUser>> {
    let repo = UserRepository::new(state.db.clone());
    let user = repo
        .find_by_id(&current.id)
        .await?
        .ok_or_else(|| AppError::not_found("Account no longer exists"))?;
    Ok(Json(user.into()))
}

/// POST /api/auth/bootstrap-admin - 引导首个管理员
///
/// 仅当系统中还没有任何管理员时接受；之后角色变更只能由管理员完成。
pub async fn bootstrap_admin(
    State(state): State<ServerState>,
    Json(payload): Json<BootstrapAdminRequest>,
) -> AppResult<Json<AuthUser>> {
    let repo = UserRepository::new(state.db.clone());

    if repo.count_admins().await? > 0 {
        return Err(AppError::forbidden("An admin already exists"));
    }

    let email = validate_email(&payload.email)?;
    let user = repo
        .find_by_email(&email)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No account for {}", email)))?;

    let id = user.id.as_ref().map(|r| r.to_string()).unwrap_or_default();
    let promoted = repo.set_role(&id, AppRole::Admin).await?;
    tracing::info!(target: "security", email = %promoted.email, "bootstrap_admin");

    Ok(Json(promoted.into()))
}

fn respond_with_token(state: &ServerState, user: AuthUser) -> AppResult<Json<LoginResponse>> {
    let token = state
        .jwt_service
        .generate_token(&user.id, &user.email, user.role)
        .map_err(|e| AppError::internal(format!("Token generation failed: {}", e)))?;
    Ok(Json(LoginResponse { token, user }))
}

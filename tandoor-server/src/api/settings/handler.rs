//! Restaurant Settings API Handlers
//!
//! 单例记录：读取在未写入前返回默认值。

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::SettingsRepository;
use crate::utils::validation::{validate_email, validate_phone};
use crate::utils::AppResult;
use shared::models::{RestaurantSettings, RestaurantSettingsUpdate};

const RESOURCE: &str = "settings";

/// GET /api/settings - 门店信息 (公开)
pub async fn get(State(state): State<ServerState>) -> AppResult<Json<RestaurantSettings>> {
    let repo = SettingsRepository::new(state.db.clone());
    let settings = repo
        .get()
        .await?
        .map(RestaurantSettings::from)
        .unwrap_or_default();
    Ok(Json(settings))
}

/// PUT /api/settings - 更新门店信息 (管理员，合并写入)
pub async fn save(
    State(state): State<ServerState>,
    Json(mut payload): Json<RestaurantSettingsUpdate>,
) -> AppResult<Json<RestaurantSettings>> {
    if let Some(ref email) = payload.email {
        payload.email = Some(validate_email(email)?);
    }
    if let Some(ref phone) = payload.phone {
        payload.phone = Some(validate_phone(phone)?);
    }

    let repo = SettingsRepository::new(state.db.clone());
    let saved = repo.save(payload).await?;

    state.broadcast_sync(RESOURCE, "updated", "restaurant_settings:main");

    Ok(Json(saved.into()))
}

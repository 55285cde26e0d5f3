//! Menu Category API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::MenuCategoryRepository;
use crate::utils::validation::{MAX_TITLE_LEN, validate_text};
use crate::utils::AppResult;
use shared::models::{MenuCategory, MenuCategoryCreate, MenuCategoryUpdate};

const RESOURCE: &str = "menu_category";

/// GET /api/menu/categories - 分类列表
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuCategory>>> {
    let repo = MenuCategoryRepository::new(state.db.clone());
    let categories = repo.find_all().await?;
    Ok(Json(categories.into_iter().map(|c| c.into()).collect()))
}

/// POST /api/menu/categories - 创建分类 (管理员)
pub async fn create(
    State(state): State<ServerState>,
    Json(mut payload): Json<MenuCategoryCreate>,
) -> AppResult<Json<MenuCategory>> {
    payload.name = validate_text(&payload.name, "name", 1, MAX_TITLE_LEN)?;

    let repo = MenuCategoryRepository::new(state.db.clone());
    let category = repo.create(payload).await?;

    let id = category.id.as_ref().map(|r| r.to_string()).unwrap_or_default();
    state.broadcast_sync(RESOURCE, "created", &id);

    Ok(Json(category.into()))
}

/// PUT /api/menu/categories/:id - 更新分类 (管理员)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuCategoryUpdate>,
) -> AppResult<Json<MenuCategory>> {
    let repo = MenuCategoryRepository::new(state.db.clone());
    let category = repo.update(&id, payload).await?;

    state.broadcast_sync(RESOURCE, "updated", &id);

    Ok(Json(category.into()))
}

/// DELETE /api/menu/categories/:id - 删除分类 (管理员)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = MenuCategoryRepository::new(state.db.clone());
    let deleted = repo.delete(&id).await?;

    if deleted {
        state.broadcast_sync(RESOURCE, "deleted", &id);
    }

    Ok(Json(deleted))
}

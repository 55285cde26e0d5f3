//! Menu Item API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::MenuItemRepository;
use crate::utils::validation::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN, validate_text};
use crate::utils::{AppError, AppResult};
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};

const RESOURCE: &str = "menu_item";

#[derive(Deserialize)]
pub struct ListQuery {
    /// `orderable=true` keeps only items with a price (the checkout catalog)
    #[serde(default)]
    pub orderable: bool,
}

/// GET /api/menu/items?orderable=true - 菜单列表
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<MenuItem>>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let items = if query.orderable {
        repo.find_orderable().await?
    } else {
        repo.find_all().await?
    };
    Ok(Json(items.into_iter().map(|i| i.into()).collect()))
}

/// GET /api/menu/items/:id - 单个菜品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Menu item {} not found", id)))?;
    Ok(Json(item.into()))
}

/// POST /api/menu/items - 创建菜品 (管理员)
pub async fn create(
    State(state): State<ServerState>,
    Json(mut payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    payload.name = validate_text(&payload.name, "name", 1, MAX_TITLE_LEN)?;
    if payload.description.len() > MAX_DESCRIPTION_LEN {
        return Err(AppError::validation(format!(
            "description must be less than {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    if let Some(price) = payload.price
        && price.is_sign_negative()
    {
        return Err(AppError::validation("price must not be negative"));
    }

    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.create(payload).await?;

    let id = item.id.as_ref().map(|r| r.to_string()).unwrap_or_default();
    state.broadcast_sync(RESOURCE, "created", &id);

    Ok(Json(item.into()))
}

/// PUT /api/menu/items/:id - 更新菜品 (管理员)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    if let Some(Some(price)) = payload.price
        && price.is_sign_negative()
    {
        return Err(AppError::validation("price must not be negative"));
    }

    let repo = MenuItemRepository::new(state.db.clone());
    let item = repo.update(&id, payload).await?;

    state.broadcast_sync(RESOURCE, "updated", &id);

    Ok(Json(item.into()))
}

/// DELETE /api/menu/items/:id - 删除菜品 (管理员)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = MenuItemRepository::new(state.db.clone());
    let deleted = repo.delete(&id).await?;

    if deleted {
        state.broadcast_sync(RESOURCE, "deleted", &id);
    }

    Ok(Json(deleted))
}

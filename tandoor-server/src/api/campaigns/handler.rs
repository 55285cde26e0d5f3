//! Campaign API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::repository::CampaignRepository;
use crate::utils::time::{parse_date, today_iso};
use crate::utils::validation::{MAX_DESCRIPTION_LEN, MAX_TITLE_LEN, validate_text};
use crate::utils::{AppError, AppResult};
use shared::models::{Campaign, CampaignCreate, CampaignUpdate};

const RESOURCE: &str = "campaign";

fn validate_window(valid_from: &str, valid_to: &str) -> AppResult<()> {
    parse_date(valid_from)?;
    parse_date(valid_to)?;
    // ISO 日期字典序即时间序
    if valid_from > valid_to {
        return Err(AppError::validation("valid_from must not be after valid_to"));
    }
    Ok(())
}

fn validate_discount(discount: Option<i32>) -> AppResult<()> {
    if let Some(pct) = discount
        && !(0..=100).contains(&pct)
    {
        return Err(AppError::validation(
            "discount_percentage must be between 0 and 100",
        ));
    }
    Ok(())
}

/// GET /api/campaigns/active - 当前生效的活动 (公开)
pub async fn list_active(State(state): State<ServerState>) -> AppResult<Json<Vec<Campaign>>> {
    let repo = CampaignRepository::new(state.db.clone());
    let campaigns = repo.find_live(&today_iso()).await?;
    Ok(Json(campaigns.into_iter().map(|c| c.into()).collect()))
}

/// GET /api/campaigns - 全部活动 (管理员)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Campaign>>> {
    let repo = CampaignRepository::new(state.db.clone());
    let campaigns = repo.find_all().await?;
    Ok(Json(campaigns.into_iter().map(|c| c.into()).collect()))
}

/// POST /api/campaigns - 创建活动 (管理员)
pub async fn create(
    State(state): State<ServerState>,
    Json(mut payload): Json<CampaignCreate>,
) -> AppResult<Json<Campaign>> {
    payload.title = validate_text(&payload.title, "title", 1, MAX_TITLE_LEN)?;
    if payload.description.len() > MAX_DESCRIPTION_LEN {
        return Err(AppError::validation(format!(
            "description must be less than {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    validate_window(&payload.valid_from, &payload.valid_to)?;
    validate_discount(payload.discount_percentage)?;

    let repo = CampaignRepository::new(state.db.clone());
    let campaign = repo.create(payload).await?;

    let id = campaign.id.as_ref().map(|r| r.to_string()).unwrap_or_default();
    state.broadcast_sync(RESOURCE, "created", &id);

    Ok(Json(campaign.into()))
}

/// PUT /api/campaigns/:id - 更新活动 (管理员)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CampaignUpdate>,
) -> AppResult<Json<Campaign>> {
    if let Some(ref from) = payload.valid_from {
        parse_date(from)?;
    }
    if let Some(ref to) = payload.valid_to {
        parse_date(to)?;
    }
    validate_discount(payload.discount_percentage)?;

    let repo = CampaignRepository::new(state.db.clone());
    let campaign = repo.update(&id, payload).await?;

    state.broadcast_sync(RESOURCE, "updated", &id);

    Ok(Json(campaign.into()))
}

/// DELETE /api/campaigns/:id - 删除活动 (管理员)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = CampaignRepository::new(state.db.clone());
    let deleted = repo.delete(&id).await?;

    if deleted {
        state.broadcast_sync(RESOURCE, "deleted", &id);
    }

    Ok(Json(deleted))
}

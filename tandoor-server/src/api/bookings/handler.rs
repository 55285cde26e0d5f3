//! Booking API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::BookingRepository;
use crate::utils::time::{parse_date, parse_time};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MIN_NAME_LEN, validate_email, validate_optional_text,
    validate_phone, validate_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{Booking, BookingCreate, BookingStatus, BookingStatusUpdate};

const RESOURCE: &str = "booking";

/// POST /api/bookings - 订位 (公开)
pub async fn create(
    State(state): State<ServerState>,
    Json(mut payload): Json<BookingCreate>,
) -> AppResult<Json<Booking>> {
    payload.name = validate_text(&payload.name, "name", MIN_NAME_LEN, MAX_NAME_LEN)?;
    payload.phone = validate_phone(&payload.phone)?;
    if let Some(ref email) = payload.email {
        payload.email = Some(validate_email(email)?);
    }
    parse_date(&payload.date)?;
    parse_time(&payload.time)?;
    if payload.guests < 1 {
        return Err(AppError::validation("guests must be at least 1"));
    }
    payload.special_requests =
        validate_optional_text(&payload.special_requests, "special_requests", MAX_NOTE_LEN)?;

    let repo = BookingRepository::new(state.db.clone());
    let booking = repo.create(payload).await?;

    let id = booking.id.as_ref().map(|r| r.to_string()).unwrap_or_default();
    state.broadcast_sync(RESOURCE, "created", &id);

    Ok(Json(booking.into()))
}

#[derive(Deserialize)]
pub struct BookingListQuery {
    pub status: Option<String>,
    pub search: Option<String>,
}

/// GET /api/bookings?status=&search= - 订位列表 (管理员)
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<BookingListQuery>,
) -> AppResult<Json<Vec<Booking>>> {
    let status = match query.status.as_deref() {
        None | Some("") | Some("all") => None,
        Some(value) => Some(
            value
                .parse::<BookingStatus>()
                .map_err(|_| AppError::validation(format!("unknown booking status: {value}")))?,
        ),
    };

    let repo = BookingRepository::new(state.db.clone());
    let bookings = repo.find_filtered(status, query.search.as_deref()).await?;
    Ok(Json(bookings.into_iter().map(|b| b.into()).collect()))
}

/// PATCH /api/bookings/:id/status - 推进订位状态 (管理员)
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<BookingStatusUpdate>,
) -> AppResult<Json<Booking>> {
    let repo = BookingRepository::new(state.db.clone());
    let booking = repo.update_status(&id, payload.status).await?;

    state.broadcast_sync(RESOURCE, "status_changed", &id);

    Ok(Json(booking.into()))
}

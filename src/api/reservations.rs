//! Reservation request handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use chrono::{Local, NaiveDate};
use http::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::db;
use crate::error::{ApiResult, AppError};
use crate::models::Reservation;
use crate::state::AppState;
use crate::validate::{self, reservation};

use super::Data;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub date: Option<String>,
    pub mobile_number: Option<String>,
}

/// GET /reservations — optionally filtered by date or mobile number.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Data<Vec<Reservation>>>> {
    let rows = if let Some(raw) = query.date {
        let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map_err(|_| AppError::validation("date"))?;
        db::reservations::list_on_date(&state.pool, date).await?
    } else if let Some(number) = query.mobile_number {
        db::reservations::search_by_mobile(&state.pool, &number).await?
    } else {
        db::reservations::list_all(&state.pool).await?
    };
    Ok(Json(Data::new(rows)))
}

/// POST /reservations — validate, force status to `booked`, persist.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Data<Reservation>>)> {
    let data = validate::body_data(&body)?;
    let payload = reservation::validate(data, Local::now().naive_local())?;
    reservation::reject_premature_status(data)?;

    let created = db::reservations::create(&state.pool, &payload)
        .await?
        .ok_or_else(|| AppError::internal("Failed to create reservation"))?;
    Ok((StatusCode::CREATED, Json(Data::new(created))))
}

/// GET /reservations/{reservation_id}
pub async fn read(
    State(state): State<AppState>,
    Path(reservation_id): Path<i64>,
) -> ApiResult<Json<Data<Reservation>>> {
    let found = db::reservations::read(&state.pool, reservation_id)
        .await?
        .ok_or_else(|| AppError::not_found(reservation_id))?;
    Ok(Json(Data::new(found)))
}

/// PUT /reservations/{reservation_id} — full replacement of the editable
/// fields; status is not touched here.
pub async fn update(
    State(state): State<AppState>,
    Path(reservation_id): Path<i64>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Data<Reservation>>> {
    let data = validate::body_data(&body)?;
    let payload = reservation::validate(data, Local::now().naive_local())?;

    let updated = db::reservations::update(&state.pool, reservation_id, &payload)
        .await?
        .ok_or_else(|| AppError::not_found(reservation_id))?;
    Ok(Json(Data::new(updated)))
}

/// PUT /reservations/{reservation_id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(reservation_id): Path<i64>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Data<Reservation>>> {
    let data = validate::body_data(&body)?;

    let current = db::reservations::read(&state.pool, reservation_id)
        .await?
        .ok_or_else(|| AppError::not_found(reservation_id))?;
    if current.status == crate::models::ReservationStatus::Finished {
        return Err(AppError::conflict("finished"));
    }

    let next = reservation::parse_status(data)?;
    if !current.status.can_transition_to(next) {
        return Err(AppError::conflict(format!(
            "cannot transition from {} to {}",
            current.status, next
        )));
    }

    let updated = db::reservations::set_status(&state.pool, reservation_id, next)
        .await?
        .ok_or_else(|| AppError::not_found(reservation_id))?;
    Ok(Json(Data::new(updated)))
}

//! Table request handlers.

use axum::Json;
use axum::extract::{Path, State};
use http::StatusCode;
use serde_json::Value;

use crate::db;
use crate::error::{ApiResult, AppError};
use crate::models::Table;
use crate::state::AppState;
use crate::validate::{self, table};

use super::Data;

/// GET /tables — all tables, ordered by name.
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Data<Vec<Table>>>> {
    let rows = db::tables::list(&state.pool).await?;
    Ok(Json(Data::new(rows)))
}

/// POST /tables
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> ApiResult<(StatusCode, Json<Data<Table>>)> {
    let data = validate::body_data(&body)?;
    let payload = table::parse_payload(data)?;

    let created = db::tables::create(&state.pool, &payload).await?;
    Ok((StatusCode::CREATED, Json(Data::new(created))))
}

/// PUT /tables/{table_id}/seat — assign a reservation to a free table.
///
/// The chain checks give the caller a precise error; the store-level seat
/// transaction is the final arbiter for occupancy, so a concurrent winner
/// surfaces as `occupied` rather than a double booking.
pub async fn seat(
    State(state): State<AppState>,
    Path(table_id): Path<i64>,
    Json(body): Json<Value>,
) -> ApiResult<Json<Data<Table>>> {
    let data = validate::body_data(&body)?;
    let reservation_id = table::seat_reservation_id(data)?;

    let reservation = db::reservations::read(&state.pool, reservation_id)
        .await?
        .ok_or_else(|| AppError::not_found(reservation_id))?;
    table::check_not_already_seated(&reservation)?;

    let target = db::tables::read(&state.pool, table_id)
        .await?
        .ok_or_else(|| AppError::not_found(table_id))?;
    table::check_capacity(&target, &reservation)?;
    table::check_free(&target)?;

    let seated = db::tables::seat(&state.pool, table_id, reservation.reservation_id)
        .await?
        .ok_or_else(|| AppError::conflict("occupied"))?;
    Ok(Json(Data::new(seated)))
}

/// DELETE /tables/{table_id}/seat — free the table and finish its
/// reservation.
pub async fn finish(
    State(state): State<AppState>,
    Path(table_id): Path<i64>,
) -> ApiResult<Json<Data<Table>>> {
    let target = db::tables::read(&state.pool, table_id)
        .await?
        .ok_or_else(|| AppError::not_found(table_id))?;
    table::check_occupied(&target)?;

    let freed = db::tables::finish(&state.pool, table_id)
        .await?
        .ok_or_else(|| AppError::conflict("not occupied"))?;
    Ok(Json(Data::new(freed)))
}

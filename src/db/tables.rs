//! Table database operations.
//!
//! Seat and finish are single transactions that lock the table row
//! (`SELECT ... FOR UPDATE`) and re-check occupancy before writing, so two
//! concurrent seat requests cannot double-book a table.

use sqlx::PgPool;

use crate::models::{NewTable, ReservationStatus, Table};

const COLUMNS: &str = "table_id, table_name, capacity, reservation_id, created_at, updated_at";

pub async fn list(pool: &PgPool) -> sqlx::Result<Vec<Table>> {
    sqlx::query_as(&format!("SELECT {COLUMNS} FROM tables ORDER BY table_name"))
        .fetch_all(pool)
        .await
}

pub async fn create(pool: &PgPool, new: &NewTable) -> sqlx::Result<Table> {
    sqlx::query_as(&format!(
        "INSERT INTO tables (table_name, capacity) VALUES ($1, $2) RETURNING {COLUMNS}"
    ))
    .bind(&new.table_name)
    .bind(new.capacity)
    .fetch_one(pool)
    .await
}

pub async fn read(pool: &PgPool, table_id: i64) -> sqlx::Result<Option<Table>> {
    sqlx::query_as(&format!("SELECT {COLUMNS} FROM tables WHERE table_id = $1"))
        .bind(table_id)
        .fetch_optional(pool)
        .await
}

/// Seat a reservation: occupy the table and mark the reservation `seated`
/// in one transaction. Returns `None` if the table is gone or no longer
/// free by the time the row lock is taken.
pub async fn seat(
    pool: &PgPool,
    table_id: i64,
    reservation_id: i64,
) -> sqlx::Result<Option<Table>> {
    let mut tx = pool.begin().await?;

    let current: Option<Table> = sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM tables WHERE table_id = $1 FOR UPDATE"
    ))
    .bind(table_id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(table) = current else {
        return Ok(None);
    };
    if table.is_occupied() {
        return Ok(None);
    }

    let updated: Table = sqlx::query_as(&format!(
        "UPDATE tables SET reservation_id = $1, updated_at = now() \
         WHERE table_id = $2 RETURNING {COLUMNS}"
    ))
    .bind(reservation_id)
    .bind(table_id)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("UPDATE reservations SET status = $1, updated_at = now() WHERE reservation_id = $2")
        .bind(ReservationStatus::Seated)
        .bind(reservation_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(Some(updated))
}

/// Finish a seated party: free the table and mark its reservation
/// `finished` in one transaction. Returns `None` if the table is gone or
/// not occupied.
pub async fn finish(pool: &PgPool, table_id: i64) -> sqlx::Result<Option<Table>> {
    let mut tx = pool.begin().await?;

    let current: Option<Table> = sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM tables WHERE table_id = $1 FOR UPDATE"
    ))
    .bind(table_id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(table) = current else {
        return Ok(None);
    };
    let Some(reservation_id) = table.reservation_id else {
        return Ok(None);
    };

    let updated: Table = sqlx::query_as(&format!(
        "UPDATE tables SET reservation_id = NULL, updated_at = now() \
         WHERE table_id = $1 RETURNING {COLUMNS}"
    ))
    .bind(table_id)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("UPDATE reservations SET status = $1, updated_at = now() WHERE reservation_id = $2")
        .bind(ReservationStatus::Finished)
        .bind(reservation_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(Some(updated))
}

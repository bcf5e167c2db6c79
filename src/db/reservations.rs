//! Reservation database operations.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::models::{NewReservation, Reservation, ReservationStatus};

const COLUMNS: &str = "reservation_id, first_name, last_name, mobile_number, \
     reservation_date, reservation_time, people, status, created_at, updated_at";

pub async fn list_all(pool: &PgPool) -> sqlx::Result<Vec<Reservation>> {
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM reservations ORDER BY reservation_date, reservation_time"
    ))
    .fetch_all(pool)
    .await
}

/// All reservations for a calendar date, earliest first. Every status is
/// returned; the UI decides what to display.
pub async fn list_on_date(pool: &PgPool, date: NaiveDate) -> sqlx::Result<Vec<Reservation>> {
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM reservations \
         WHERE reservation_date = $1 ORDER BY reservation_time"
    ))
    .bind(date)
    .fetch_all(pool)
    .await
}

/// Partial match on the digits of the stored number, most recent first.
pub async fn search_by_mobile(pool: &PgPool, mobile_number: &str) -> sqlx::Result<Vec<Reservation>> {
    let digits: String = mobile_number.chars().filter(|c| c.is_ascii_digit()).collect();
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM reservations \
         WHERE translate(mobile_number, '() -', '') LIKE $1 \
         ORDER BY reservation_date DESC, reservation_time DESC"
    ))
    .bind(format!("%{digits}%"))
    .fetch_all(pool)
    .await
}

/// Insert a new reservation. Status is forced to `booked` here, not taken
/// from the payload.
pub async fn create(pool: &PgPool, new: &NewReservation) -> sqlx::Result<Option<Reservation>> {
    sqlx::query_as(&format!(
        "INSERT INTO reservations \
         (first_name, last_name, mobile_number, reservation_date, reservation_time, people, status) \
         VALUES ($1, $2, $3, $4, $5, $6, 'booked') \
         RETURNING {COLUMNS}"
    ))
    .bind(&new.first_name)
    .bind(&new.last_name)
    .bind(&new.mobile_number)
    .bind(new.reservation_date)
    .bind(new.reservation_time)
    .bind(new.people)
    .fetch_optional(pool)
    .await
}

pub async fn read(pool: &PgPool, reservation_id: i64) -> sqlx::Result<Option<Reservation>> {
    sqlx::query_as(&format!(
        "SELECT {COLUMNS} FROM reservations WHERE reservation_id = $1"
    ))
    .bind(reservation_id)
    .fetch_optional(pool)
    .await
}

/// Full replacement of the editable fields; status is left untouched.
pub async fn update(
    pool: &PgPool,
    reservation_id: i64,
    new: &NewReservation,
) -> sqlx::Result<Option<Reservation>> {
    sqlx::query_as(&format!(
        "UPDATE reservations SET \
             first_name = $1, last_name = $2, mobile_number = $3, \
             reservation_date = $4, reservation_time = $5, people = $6, \
             updated_at = now() \
         WHERE reservation_id = $7 \
         RETURNING {COLUMNS}"
    ))
    .bind(&new.first_name)
    .bind(&new.last_name)
    .bind(&new.mobile_number)
    .bind(new.reservation_date)
    .bind(new.reservation_time)
    .bind(new.people)
    .bind(reservation_id)
    .fetch_optional(pool)
    .await
}

pub async fn set_status(
    pool: &PgPool,
    reservation_id: i64,
    status: ReservationStatus,
) -> sqlx::Result<Option<Reservation>> {
    sqlx::query_as(&format!(
        "UPDATE reservations SET status = $1, updated_at = now() \
         WHERE reservation_id = $2 \
         RETURNING {COLUMNS}"
    ))
    .bind(status)
    .bind(reservation_id)
    .fetch_optional(pool)
    .await
}

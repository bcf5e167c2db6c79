//! Table validation chain.

use serde_json::Value;

use crate::error::AppError;
use crate::models::{NewTable, Reservation, Table};

/// Shape checks for table creation: capacity present, name at least two
/// characters, capacity a positive integer.
pub fn parse_payload(data: &Value) -> Result<NewTable, AppError> {
    if data.get("capacity").filter(|v| !v.is_null()).is_none() {
        return Err(AppError::validation("capacity"));
    }
    let table_name = data
        .get("table_name")
        .and_then(Value::as_str)
        .filter(|name| name.chars().count() >= 2)
        .map(str::to_owned)
        .ok_or_else(|| AppError::validation("table_name"))?;
    let capacity = data
        .get("capacity")
        .and_then(Value::as_i64)
        .filter(|c| *c > 0)
        .and_then(|c| i32::try_from(c).ok())
        .ok_or_else(|| AppError::validation("capacity"))?;

    Ok(NewTable {
        table_name,
        capacity,
    })
}

/// Seat request body must carry the reservation to seat.
pub fn seat_reservation_id(data: &Value) -> Result<i64, AppError> {
    data.get("reservation_id")
        .and_then(Value::as_i64)
        .ok_or_else(|| AppError::validation("reservation_id"))
}

/// A reservation that is already seated cannot be seated again.
pub fn check_not_already_seated(reservation: &Reservation) -> Result<(), AppError> {
    if reservation.status == crate::models::ReservationStatus::Seated {
        return Err(AppError::conflict("reservation is already seated"));
    }
    Ok(())
}

/// A table must hold the whole party.
pub fn check_capacity(table: &Table, reservation: &Reservation) -> Result<(), AppError> {
    if table.capacity < reservation.people {
        return Err(AppError::validation("capacity"));
    }
    Ok(())
}

/// Seating requires a free table.
pub fn check_free(table: &Table) -> Result<(), AppError> {
    if table.is_occupied() {
        return Err(AppError::conflict("occupied"));
    }
    Ok(())
}

/// Finishing requires an occupied table.
pub fn check_occupied(table: &Table) -> Result<(), AppError> {
    if !table.is_occupied() {
        return Err(AppError::conflict("not occupied"));
    }
    Ok(())
}

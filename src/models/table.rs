//! Dining table model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Dining table entity. `reservation_id` is NULL while the table is free
/// and carries the seated reservation's id while occupied.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Table {
    pub table_id: i64,
    pub table_name: String,
    pub capacity: i32,
    pub reservation_id: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Table {
    pub fn is_occupied(&self) -> bool {
        self.reservation_id.is_some()
    }
}

/// Validated table creation payload.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTable {
    pub table_name: String,
    pub capacity: i32,
}

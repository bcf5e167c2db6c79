//! corvina — restaurant reservation management backend
//!
//! Reservation CRUD with ordered request-validation chains, table CRUD
//! plus the seat/finish occupancy transitions, backed by PostgreSQL.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod state;
pub mod util;
pub mod validate;

//! Store adapters: sqlx query functions over the shared pool.
//!
//! All queries are runtime-checked `query_as` against normalized columns;
//! callers receive `sqlx::Result` and map infrastructure failures to a
//! generic 500 at the API boundary.

pub mod reservations;
pub mod tables;

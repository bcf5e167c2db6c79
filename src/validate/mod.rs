//! Request validation chains.
//!
//! Each endpoint runs an ordered list of pure checks over the incoming
//! `{ "data": ... }` payload, stopping at the first failure. Shape checks
//! lift the loose JSON into a typed payload; business rules then run over
//! that payload via [`run_rules`], so no check depends on hidden
//! request-scoped state.

pub mod reservation;
pub mod table;

use chrono::NaiveDateTime;
use serde_json::Value;

use crate::error::AppError;

/// A business rule over a validated payload and the current wall-clock time.
pub type Rule<P> = fn(&P, NaiveDateTime) -> Result<(), AppError>;

/// Run an ordered rule list, short-circuiting on the first failure.
pub fn run_rules<P>(rules: &[Rule<P>], payload: &P, now: NaiveDateTime) -> Result<(), AppError> {
    for rule in rules {
        rule(payload, now)?;
    }
    Ok(())
}

/// Extract the `data` envelope from a request body.
pub fn body_data(body: &Value) -> Result<&Value, AppError> {
    body.get("data")
        .filter(|v| !v.is_null())
        .ok_or_else(|| AppError::validation("body"))
}

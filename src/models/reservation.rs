//! Reservation model and status state machine.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Reservation lifecycle status.
///
/// `Booked` is the only state a reservation can be created in. `Finished`
/// and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "reservation_status", rename_all = "lowercase")]
pub enum ReservationStatus {
    Booked,
    Seated,
    Finished,
    Cancelled,
}

impl ReservationStatus {
    /// Parse a client-supplied status string. Anything outside the four
    /// known values is rejected by the caller.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "booked" => Some(Self::Booked),
            "seated" => Some(Self::Seated),
            "finished" => Some(Self::Finished),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Booked => "booked",
            Self::Seated => "seated",
            Self::Finished => "finished",
            Self::Cancelled => "cancelled",
        }
    }

    /// Explicit transition table:
    /// booked -> seated | cancelled, seated -> finished | cancelled.
    /// Assigning the current status again is a permitted no-op.
    pub fn can_transition_to(self, next: Self) -> bool {
        if self == next {
            return true;
        }
        matches!(
            (self, next),
            (Self::Booked, Self::Seated)
                | (Self::Booked, Self::Cancelled)
                | (Self::Seated, Self::Finished)
                | (Self::Seated, Self::Cancelled)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished | Self::Cancelled)
    }
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reservation entity as stored in the `reservations` relation.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Reservation {
    pub reservation_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub reservation_date: NaiveDate,
    pub reservation_time: NaiveTime,
    pub people: i32,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated reservation payload, produced by the create/update chain.
///
/// Status is intentionally absent: new reservations always start `booked`
/// and field updates never touch status.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReservation {
    pub first_name: String,
    pub last_name: String,
    pub mobile_number: String,
    pub reservation_date: NaiveDate,
    pub reservation_time: NaiveTime,
    pub people: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_statuses() {
        assert_eq!(ReservationStatus::parse("booked"), Some(ReservationStatus::Booked));
        assert_eq!(ReservationStatus::parse("seated"), Some(ReservationStatus::Seated));
        assert_eq!(ReservationStatus::parse("finished"), Some(ReservationStatus::Finished));
        assert_eq!(ReservationStatus::parse("cancelled"), Some(ReservationStatus::Cancelled));
        assert_eq!(ReservationStatus::parse("waiting"), None);
        assert_eq!(ReservationStatus::parse("Booked"), None);
    }

    #[test]
    fn test_booked_transitions() {
        let booked = ReservationStatus::Booked;
        assert!(booked.can_transition_to(ReservationStatus::Seated));
        assert!(booked.can_transition_to(ReservationStatus::Cancelled));
        assert!(booked.can_transition_to(ReservationStatus::Booked));
        assert!(!booked.can_transition_to(ReservationStatus::Finished));
    }

    #[test]
    fn test_seated_transitions() {
        let seated = ReservationStatus::Seated;
        assert!(seated.can_transition_to(ReservationStatus::Finished));
        assert!(seated.can_transition_to(ReservationStatus::Cancelled));
        assert!(!seated.can_transition_to(ReservationStatus::Booked));
    }

    #[test]
    fn test_finished_is_terminal() {
        let finished = ReservationStatus::Finished;
        assert!(finished.is_terminal());
        assert!(!finished.can_transition_to(ReservationStatus::Booked));
        assert!(!finished.can_transition_to(ReservationStatus::Seated));
        assert!(!finished.can_transition_to(ReservationStatus::Cancelled));
    }

    #[test]
    fn test_cancelled_is_terminal() {
        let cancelled = ReservationStatus::Cancelled;
        assert!(cancelled.is_terminal());
        assert!(!cancelled.can_transition_to(ReservationStatus::Booked));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ReservationStatus::Seated).unwrap();
        assert_eq!(json, "\"seated\"");
        let back: ReservationStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(back, ReservationStatus::Cancelled);
    }
}

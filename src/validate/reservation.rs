//! Reservation validation chain.
//!
//! Check order matches the endpoint contract: field shape first
//! (first_name, last_name, mobile_number, reservation_date,
//! reservation_time, people), then the business rules (future date, no
//! Tuesdays, open hours). Error messages name the offending field or rule
//! and are part of the wire contract.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};
use serde_json::Value;

use crate::error::AppError;
use crate::models::{NewReservation, ReservationStatus};

use super::{Rule, run_rules};

/// Business rules applied after shape checks, in order.
const RULES: &[Rule<NewReservation>] = &[must_be_in_future, not_on_tuesday, during_open_hours];

/// Validate a create/update payload against the full chain.
pub fn validate(data: &Value, now: NaiveDateTime) -> Result<NewReservation, AppError> {
    let payload = parse_payload(data)?;
    run_rules(RULES, &payload, now)?;
    Ok(payload)
}

/// Creation only: a client may not submit an already-progressed status.
/// New reservations always start `booked`.
pub fn reject_premature_status(data: &Value) -> Result<(), AppError> {
    if let Some(status) = data.get("status").and_then(Value::as_str) {
        if status == "seated" || status == "finished" {
            return Err(AppError::validation(status));
        }
    }
    Ok(())
}

/// Status change: the new value must be one of the four known statuses.
/// An unknown value is echoed back in the error.
pub fn parse_status(data: &Value) -> Result<ReservationStatus, AppError> {
    match data.get("status").and_then(Value::as_str) {
        Some(s) => ReservationStatus::parse(s).ok_or_else(|| AppError::validation(s)),
        None => Err(AppError::validation("status")),
    }
}

/// Shape checks: presence and form of every field, in contract order.
fn parse_payload(data: &Value) -> Result<NewReservation, AppError> {
    let first_name = non_empty_string(data, "first_name")?;
    let last_name = non_empty_string(data, "last_name")?;
    let mobile_number = non_empty_string(data, "mobile_number")?;

    let reservation_date = data
        .get("reservation_date")
        .and_then(Value::as_str)
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .ok_or_else(|| AppError::validation("reservation_date"))?;

    let reservation_time = data
        .get("reservation_time")
        .and_then(Value::as_str)
        .and_then(normalize_time)
        .ok_or_else(|| AppError::validation("reservation_time"))?;

    let people = data
        .get("people")
        .and_then(Value::as_i64)
        .filter(|p| *p > 0)
        .and_then(|p| i32::try_from(p).ok())
        .ok_or_else(|| AppError::validation("people"))?;

    Ok(NewReservation {
        first_name,
        last_name,
        mobile_number,
        reservation_date,
        reservation_time,
        people,
    })
}

fn non_empty_string(data: &Value, field: &str) -> Result<String, AppError> {
    data.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| AppError::validation(field))
}

/// Normalize a time string to minute precision.
///
/// Accepts `HH:MM` (a colon at index 2 is stripped and the rest truncated
/// to four digits, so `HH:MM:SS` also works) or a bare `HHMM` digit run.
fn normalize_time(raw: &str) -> Option<NaiveTime> {
    let digits: String = if raw.as_bytes().get(2) == Some(&b':') {
        raw.replacen(':', "", 1).chars().take(4).collect()
    } else {
        raw.to_string()
    };
    if digits.len() < 4 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let hour: u32 = digits[0..2].parse().ok()?;
    let minute: u32 = digits[2..4].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn must_be_in_future(payload: &NewReservation, now: NaiveDateTime) -> Result<(), AppError> {
    let at = payload.reservation_date.and_time(payload.reservation_time);
    if at <= now {
        return Err(AppError::validation("Reservation must be in the future"));
    }
    Ok(())
}

fn not_on_tuesday(payload: &NewReservation, _now: NaiveDateTime) -> Result<(), AppError> {
    if payload.reservation_date.weekday() == Weekday::Tue {
        return Err(AppError::validation("Restaurant is closed on Tuesdays"));
    }
    Ok(())
}

/// Open 10:31 through 21:59. The literal rule (reject hour >= 22, or
/// hour <= 10 with minute <= 30) is authoritative.
fn during_open_hours(payload: &NewReservation, _now: NaiveDateTime) -> Result<(), AppError> {
    let hour = payload.reservation_time.hour();
    let minute = payload.reservation_time.minute();
    if hour >= 22 || (hour <= 10 && minute <= 30) {
        return Err(AppError::validation("We are not open at that time"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn noon(date: &str) -> NaiveDateTime {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn valid_payload() -> Value {
        json!({
            "first_name": "Rick",
            "last_name": "Sanchez",
            "mobile_number": "202-555-0164",
            "reservation_date": "2030-01-04",
            "reservation_time": "18:00",
            "people": 4,
        })
    }

    #[test]
    fn test_valid_payload_passes() {
        let payload = validate(&valid_payload(), noon("2024-06-01")).unwrap();
        assert_eq!(payload.people, 4);
        assert_eq!(
            payload.reservation_time,
            NaiveTime::from_hms_opt(18, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_missing_fields_name_the_field() {
        for field in [
            "first_name",
            "last_name",
            "mobile_number",
            "reservation_date",
            "reservation_time",
            "people",
        ] {
            let mut data = valid_payload();
            data.as_object_mut().unwrap().remove(field);
            let err = validate(&data, noon("2024-06-01")).unwrap_err();
            assert_eq!(err.message, field, "missing {field}");
        }
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut data = valid_payload();
        data["first_name"] = json!("");
        let err = validate(&data, noon("2024-06-01")).unwrap_err();
        assert_eq!(err.message, "first_name");
    }

    #[test]
    fn test_garbage_date_rejected() {
        let mut data = valid_payload();
        data["reservation_date"] = json!("not-a-date");
        let err = validate(&data, noon("2024-06-01")).unwrap_err();
        assert_eq!(err.message, "reservation_date");
    }

    #[test]
    fn test_time_accepts_hhmm_without_colon() {
        let mut data = valid_payload();
        data["reservation_time"] = json!("1800");
        assert!(validate(&data, noon("2024-06-01")).is_ok());
    }

    #[test]
    fn test_time_with_seconds_truncated() {
        let mut data = valid_payload();
        data["reservation_time"] = json!("18:00:30");
        let payload = validate(&data, noon("2024-06-01")).unwrap();
        assert_eq!(
            payload.reservation_time,
            NaiveTime::from_hms_opt(18, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_non_digit_time_rejected() {
        for bad in ["half past six", "9:30", "18-00", "1:00"] {
            let mut data = valid_payload();
            data["reservation_time"] = json!(bad);
            let err = validate(&data, noon("2024-06-01")).unwrap_err();
            assert_eq!(err.message, "reservation_time", "time {bad:?}");
        }
    }

    #[test]
    fn test_people_must_be_positive_integer() {
        for bad in [json!(0), json!(-2), json!(2.5), json!("4")] {
            let mut data = valid_payload();
            data["people"] = bad.clone();
            let err = validate(&data, noon("2024-06-01")).unwrap_err();
            assert_eq!(err.message, "people", "people {bad}");
        }
    }

    #[test]
    fn test_past_reservation_rejected() {
        let mut data = valid_payload();
        data["reservation_date"] = json!("2020-01-03");
        let err = validate(&data, noon("2024-06-01")).unwrap_err();
        assert_eq!(err.message, "Reservation must be in the future");
    }

    #[test]
    fn test_same_instant_is_not_in_the_future() {
        let mut data = valid_payload();
        data["reservation_date"] = json!("2030-01-04");
        data["reservation_time"] = json!("12:00");
        let err = validate(&data, noon("2030-01-04")).unwrap_err();
        assert_eq!(err.message, "Reservation must be in the future");
    }

    #[test]
    fn test_tuesday_rejected() {
        // 2024-01-02 is a Tuesday
        let mut data = valid_payload();
        data["reservation_date"] = json!("2024-01-02");
        let err = validate(&data, noon("2023-06-01")).unwrap_err();
        assert_eq!(err.message, "Restaurant is closed on Tuesdays");
    }

    #[test]
    fn test_open_hours_boundaries() {
        let cases = [
            ("21:45", None),
            ("22:00", Some("We are not open at that time")),
            ("23:15", Some("We are not open at that time")),
            ("10:00", Some("We are not open at that time")),
            ("10:30", Some("We are not open at that time")),
            ("10:31", None),
            ("09:00", Some("We are not open at that time")),
            ("11:00", None),
        ];
        for (time, expected) in cases {
            let mut data = valid_payload();
            data["reservation_time"] = json!(time);
            let result = validate(&data, noon("2024-06-01"));
            match expected {
                None => assert!(result.is_ok(), "time {time} should pass"),
                Some(msg) => {
                    assert_eq!(result.unwrap_err().message, msg, "time {time}");
                }
            }
        }
    }

    #[test]
    fn test_future_check_runs_before_tuesday_check() {
        // Past date on a Tuesday: the future rule fires first
        let mut data = valid_payload();
        data["reservation_date"] = json!("2020-01-07");
        let err = validate(&data, noon("2024-06-01")).unwrap_err();
        assert_eq!(err.message, "Reservation must be in the future");
    }

    #[test]
    fn test_premature_status_rejected_on_create() {
        for status in ["seated", "finished"] {
            let mut data = valid_payload();
            data["status"] = json!(status);
            let err = reject_premature_status(&data).unwrap_err();
            assert_eq!(err.message, status);
        }
    }

    #[test]
    fn test_booked_status_allowed_on_create() {
        let mut data = valid_payload();
        data["status"] = json!("booked");
        assert!(reject_premature_status(&data).is_ok());
        assert!(reject_premature_status(&valid_payload()).is_ok());
    }

    #[test]
    fn test_parse_status() {
        assert_eq!(
            parse_status(&json!({ "status": "cancelled" })).unwrap(),
            ReservationStatus::Cancelled
        );
        let err = parse_status(&json!({ "status": "waiting" })).unwrap_err();
        assert_eq!(err.message, "waiting");
        let err = parse_status(&json!({})).unwrap_err();
        assert_eq!(err.message, "status");
    }
}

//! Pure calendar-date helpers.
//!
//! The admin dashboard pages by date; these mirror the date arithmetic its
//! previous/today/next controls rely on. All values are `YYYY-MM-DD`
//! strings.

use chrono::{Days, Local, NaiveDate};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date as a `YYYY-MM-DD` string.
pub fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

/// The day after the given date, or `None` if the input does not parse.
pub fn next(date: &str) -> Option<String> {
    shift(date, 1)
}

/// The day before the given date, or `None` if the input does not parse.
pub fn previous(date: &str) -> Option<String> {
    shift(date, -1)
}

fn shift(date: &str, days: i64) -> Option<String> {
    let parsed = NaiveDate::parse_from_str(date, DATE_FORMAT).ok()?;
    let shifted = if days >= 0 {
        parsed.checked_add_days(Days::new(days as u64))?
    } else {
        parsed.checked_sub_days(Days::new(days.unsigned_abs()))?
    };
    Some(shifted.format(DATE_FORMAT).to_string())
}

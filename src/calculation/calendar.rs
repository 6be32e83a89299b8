//! Day classification and working-day counting.
//!
//! This module provides utilities for determining the day type (weekday,
//! Saturday, Sunday) of a date and for counting the working days of a month.
//! Working days are Monday through Friday; there is no holiday calendar.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{EngineError, EngineResult};
use crate::models::YearMonth;

/// Represents the type of day for working-day calculation.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// assert!(!day_type.is_working_day());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl DayType {
    /// Only weekdays count towards expected working time.
    pub fn is_working_day(self) -> bool {
        self == DayType::Weekday
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2025-03-01 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Saturday);
///
/// // 2025-03-03 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
/// assert_eq!(get_day_type(monday), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Returns true if `date` falls Monday through Friday.
pub fn is_working_day(date: NaiveDate) -> bool {
    get_day_type(date).is_working_day()
}

/// Counts the working days (Monday to Friday) in a month.
///
/// Every calendar day of the month is visited; Saturdays and Sundays are
/// skipped. Public holidays are not considered.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::working_days_in_month;
/// use attendance_engine::models::YearMonth;
///
/// // March 2025 has 31 days and starts on a Saturday.
/// let march: YearMonth = "2025-03".parse().unwrap();
/// assert_eq!(working_days_in_month(march), 21);
/// ```
pub fn working_days_in_month(year_month: YearMonth) -> u32 {
    year_month.days().filter(|day| is_working_day(*day)).count() as u32
}

/// Parses a `yyyy-MM-dd` date.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::parse_date;
/// use chrono::NaiveDate;
///
/// assert_eq!(parse_date("2025-03-03").unwrap(), NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());
/// assert!(parse_date("03/03/2025").is_err());
/// ```
pub fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    let malformed =
        || EngineError::invalid_input("date", format!("expected yyyy-MM-dd, got '{value}'"));

    // chrono accepts unpadded fields; the wire format does not.
    let bytes = value.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shape_ok {
        return Err(malformed());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| malformed())
}

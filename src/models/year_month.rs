//! Year-month value type.
//!
//! A [`YearMonth`] names one calendar month and is written `yyyy-MM`
//! (e.g. `2025-03`), both on the wire and in reports.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, EngineResult};

/// A validated calendar month.
///
/// Holds the first day of the month and the first day of the following
/// month, so month boundaries never need to be recomputed.
///
/// # Example
///
/// ```
/// use attendance_engine::models::YearMonth;
///
/// let march: YearMonth = "2025-03".parse().unwrap();
/// assert_eq!(march.year(), 2025);
/// assert_eq!(march.month(), 3);
/// assert_eq!(march.to_string(), "2025-03");
/// assert!("2025-3".parse::<YearMonth>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    first_day: NaiveDate,
    next_first_day: NaiveDate,
}

impl YearMonth {
    /// Creates a year-month, failing for months outside 1..=12 or years
    /// chrono cannot represent.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        let first_day = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            EngineError::invalid_input("month", format!("{year}-{month} is not a valid month"))
        })?;
        let next_first_day = first_day
            .checked_add_months(Months::new(1))
            .ok_or_else(|| {
                EngineError::invalid_input("month", format!("{year}-{month} is out of range"))
            })?;
        Ok(Self {
            first_day,
            next_first_day,
        })
    }

    /// The year component.
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// The month component (1..=12).
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// The first day of the following month (exclusive end of this month).
    pub fn next_month_first_day(&self) -> NaiveDate {
        self.next_first_day
    }

    /// Iterates over every calendar day of the month, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.next_first_day;
        self.first_day.iter_days().take_while(move |day| *day < end)
    }
}

impl FromStr for YearMonth {
    type Err = EngineError;

    /// Parses strictly `yyyy-MM`: four year digits, a dash, two month digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed =
            || EngineError::invalid_input("month", format!("expected yyyy-MM, got '{s}'"));

        let (year, month) = s.split_once('-').ok_or_else(malformed)?;
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if year.len() != 4 || month.len() != 2 || !all_digits(year) || !all_digits(month) {
            return Err(malformed());
        }

        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;
        if !(1..=12).contains(&month) {
            return Err(malformed());
        }

        Self::new(year, month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

//! Time report model.
//!
//! A [`TimeReport`] is the outcome of a daily or monthly report request.
//! It is built fresh for each request and never persisted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::YearMonth;

/// The period a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportScope {
    /// A single calendar day.
    Day(NaiveDate),
    /// A whole calendar month.
    Month(YearMonth),
}

impl std::fmt::Display for ReportScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportScope::Day(date) => write!(f, "day {}", date),
            ReportScope::Month(month) => write!(f, "month {}", month),
        }
    }
}

/// Time worked by one employee over one period, with a sufficiency verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeReport {
    /// The employee the report is for.
    pub employee_id: String,
    /// The day or month covered.
    pub scope: ReportScope,
    /// Sum of all paired session durations, in minutes.
    pub total_minutes: i64,
    /// `total_minutes` expressed in hours, rounded to two decimal places.
    pub total_hours: Decimal,
    /// Minutes the policy expects for this period.
    pub expected_minutes: i64,
    /// Whether `total_minutes` reaches `expected_minutes`.
    pub sufficient: bool,
    /// Number of badge events that could not be paired.
    pub unpaired_events: usize,
}

/// Converts whole minutes into hours rounded to two decimal places.
///
/// # Examples
///
/// ```
/// use attendance_engine::models::minutes_to_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(minutes_to_hours(420), Decimal::new(700, 2));
/// assert_eq!(minutes_to_hours(419), Decimal::new(698, 2));
/// ```
pub fn minutes_to_hours(minutes: i64) -> Decimal {
    (Decimal::new(minutes, 0) / Decimal::new(60, 0)).round_dp(2)
}

//! Report windows.
//!
//! A report covers a half-open interval `[start, end)`: an event stamped
//! exactly at `end` belongs to the next day or month.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{EngineError, EngineResult};
use crate::models::YearMonth;

/// Half-open time interval covered by a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindow {
    /// First instant inside the window.
    pub start: NaiveDateTime,
    /// First instant after the window.
    pub end: NaiveDateTime,
}

impl ReportWindow {
    /// Window from midnight of `date` to midnight of the following day.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::calculation::ReportWindow;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
    /// let window = ReportWindow::for_day(date).unwrap();
    ///
    /// let midnight = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// assert_eq!(window.end, midnight);
    /// assert!(!window.contains(midnight));
    /// ```
    pub fn for_day(date: NaiveDate) -> EngineResult<Self> {
        let next_day = date.checked_add_days(Days::new(1)).ok_or_else(|| {
            EngineError::invalid_input("date", format!("{date} is the last representable day"))
        })?;
        Ok(Self {
            start: date.and_time(NaiveTime::MIN),
            end: next_day.and_time(NaiveTime::MIN),
        })
    }

    /// Window from midnight of the first day of the month to midnight of
    /// the first day of the next month.
    pub fn for_month(year_month: YearMonth) -> Self {
        Self {
            start: year_month.first_day().and_time(NaiveTime::MIN),
            end: year_month.next_month_first_day().and_time(NaiveTime::MIN),
        }
    }

    /// Returns true if `timestamp` lies in `[start, end)`.
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.start <= timestamp && timestamp < self.end
    }
}

//! Work session model.
//!
//! Sessions are derived from badge events and never persisted.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::BadgeEvent;

/// A paired clock-in / clock-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Timestamp of the IN event.
    pub start: NaiveDateTime,
    /// Timestamp of the OUT event that closed the session.
    pub end: NaiveDateTime,
    /// Whole minutes between `start` and `end`, truncated.
    pub duration_minutes: i64,
}

impl Session {
    /// Builds a session from an IN and the OUT that follows it.
    ///
    /// Seconds are truncated: 09:00:00 to 09:59:59 is 59 minutes.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::{BadgeEvent, BadgeType, Session};
    /// use chrono::NaiveDateTime;
    /// use uuid::Uuid;
    ///
    /// let at = |s: &str| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap();
    /// let clock_in = BadgeEvent {
    ///     id: Uuid::new_v4(),
    ///     employee_id: "emp_001".to_string(),
    ///     timestamp: at("2025-03-03 09:00:00"),
    ///     badge_type: BadgeType::In,
    /// };
    /// let clock_out = BadgeEvent {
    ///     timestamp: at("2025-03-03 16:00:59"),
    ///     badge_type: BadgeType::Out,
    ///     ..clock_in.clone()
    /// };
    ///
    /// let session = Session::between(&clock_in, &clock_out);
    /// assert_eq!(session.duration_minutes, 420);
    /// ```
    pub fn between(clock_in: &BadgeEvent, clock_out: &BadgeEvent) -> Self {
        let start = clock_in.timestamp;
        let end = clock_out.timestamp;
        Self {
            start,
            end,
            duration_minutes: (end - start).num_minutes(),
        }
    }
}

//! Time aggregation over paired sessions.

use crate::models::Session;

/// Sums the durations of `sessions`, in minutes.
///
/// Truncation to whole minutes already happened per session, so the total
/// can be lower than the exact elapsed time when badges carry seconds.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::total_minutes;
///
/// assert_eq!(total_minutes(&[]), 0);
/// ```
pub fn total_minutes(sessions: &[Session]) -> i64 {
    sessions.iter().map(|session| session.duration_minutes).sum()
}

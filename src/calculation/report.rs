//! Daily and monthly report building.
//!
//! Both reports share one pipeline: keep the events inside the report
//! window, pair them, sum the sessions, and compare against the minutes the
//! work policy expects for the period.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::config::WorkPolicy;
use crate::error::EngineResult;
use crate::models::{BadgeEvent, ReportScope, TimeReport, YearMonth, minutes_to_hours};

use super::aggregation::total_minutes;
use super::calendar::working_days_in_month;
use super::pairing::pair_events;
use super::window::ReportWindow;

/// Builds the report for one employee on one day.
///
/// Events outside `[date 00:00, date+1 00:00)` are ignored. The day is
/// sufficient when the total reaches the policy's minutes per working day,
/// whatever the weekday.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::daily_report;
/// use attendance_engine::config::WorkPolicy;
/// use attendance_engine::models::{BadgeEvent, BadgeType};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use uuid::Uuid;
///
/// let badge = |time: &str, badge_type| BadgeEvent {
///     id: Uuid::new_v4(),
///     employee_id: "emp_001".to_string(),
///     timestamp: NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M").unwrap(),
///     badge_type,
/// };
/// let events = vec![
///     badge("2025-03-03 09:00", BadgeType::In),
///     badge("2025-03-03 16:00", BadgeType::Out),
/// ];
///
/// let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
/// let report = daily_report("emp_001", date, &events, &WorkPolicy::default()).unwrap();
/// assert_eq!(report.total_minutes, 420);
/// assert!(report.sufficient);
/// ```
pub fn daily_report(
    employee_id: &str,
    date: NaiveDate,
    events: &[BadgeEvent],
    policy: &WorkPolicy,
) -> EngineResult<TimeReport> {
    let window = ReportWindow::for_day(date)?;
    Ok(build_report(
        employee_id,
        ReportScope::Day(date),
        window,
        events,
        policy.minutes_per_working_day,
    ))
}

/// Builds the report for one employee over one calendar month.
///
/// The expected total is the number of working days in the month times the
/// policy's minutes per working day.
pub fn monthly_report(
    employee_id: &str,
    year_month: YearMonth,
    events: &[BadgeEvent],
    policy: &WorkPolicy,
) -> TimeReport {
    let working_days = working_days_in_month(year_month);
    let expected_minutes = policy.expected_minutes(working_days);
    debug!(
        employee_id = %employee_id,
        month = %year_month,
        working_days,
        expected_minutes,
        "Expected time for month"
    );

    build_report(
        employee_id,
        ReportScope::Month(year_month),
        ReportWindow::for_month(year_month),
        events,
        expected_minutes,
    )
}

fn build_report(
    employee_id: &str,
    scope: ReportScope,
    window: ReportWindow,
    events: &[BadgeEvent],
    expected_minutes: i64,
) -> TimeReport {
    let in_window: Vec<BadgeEvent> = events
        .iter()
        .filter(|event| window.contains(event.timestamp))
        .cloned()
        .collect();

    let pairing = pair_events(&in_window);
    for orphan in &pairing.orphans {
        warn!(
            employee_id = %orphan.employee_id,
            event_id = %orphan.id,
            timestamp = %orphan.timestamp,
            badge_type = %orphan.badge_type,
            scope = %scope,
            "Unpaired badge event ignored"
        );
    }

    let total = total_minutes(&pairing.sessions);

    TimeReport {
        employee_id: employee_id.to_string(),
        scope,
        total_minutes: total,
        total_hours: minutes_to_hours(total),
        expected_minutes,
        sufficient: total >= expected_minutes,
        unpaired_events: pairing.orphans.len(),
    }
}

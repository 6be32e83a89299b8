//! Time-accounting logic for the attendance engine.
//!
//! This module contains the pure, synchronous core: working-day counting,
//! report windows, greedy session pairing, minute aggregation and the
//! daily/monthly report builders.

mod aggregation;
mod calendar;
mod pairing;
mod report;
mod window;

pub use aggregation::total_minutes;
pub use calendar::{DayType, get_day_type, is_working_day, parse_date, working_days_in_month};
pub use pairing::{PairingResult, pair_events};
pub use report::{daily_report, monthly_report};
pub use window::ReportWindow;

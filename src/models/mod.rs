//! Core data models for the attendance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod badge_event;
mod employee;
mod session;
mod time_report;
mod year_month;

pub use badge_event::{BadgeEvent, BadgeType, NewBadgeEvent};
pub use employee::Employee;
pub use session::Session;
pub use time_report::{ReportScope, TimeReport, minutes_to_hours};
pub use year_month::YearMonth;

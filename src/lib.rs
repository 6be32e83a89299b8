//! Attendance engine for badge-based time tracking.
//!
//! This crate turns raw clock-in/clock-out badge events into paired work
//! sessions, totals the minutes worked over a day or a month, and checks
//! them against an expected-hours policy (7 hours per working day,
//! Monday to Friday).

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

#[cfg(test)]
mod test_logs;

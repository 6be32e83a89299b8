//! Configuration types for the attendance engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `engine.yaml`.

use serde::Deserialize;

/// Minutes per day the engine expects from every employee (7 hours).
pub const DEFAULT_MINUTES_PER_WORKING_DAY: i64 = 420;

/// Upper bound for the per-day figure: the minutes in one calendar day.
pub const MAX_MINUTES_PER_WORKING_DAY: i64 = 24 * 60;

/// Expected-time policy.
///
/// The same per-day figure is used for the daily check and, multiplied by
/// the working days of the month, for the monthly check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct WorkPolicy {
    /// Minutes expected on each working day.
    pub minutes_per_working_day: i64,
}

impl WorkPolicy {
    /// Minutes expected over `working_days` working days.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::config::WorkPolicy;
    ///
    /// assert_eq!(WorkPolicy::default().expected_minutes(21), 8820);
    /// ```
    pub fn expected_minutes(&self, working_days: u32) -> i64 {
        // `ConfigLoader::from_config` skips range validation
        i64::from(working_days).saturating_mul(self.minutes_per_working_day)
    }
}

impl Default for WorkPolicy {
    fn default() -> Self {
        Self {
            minutes_per_working_day: DEFAULT_MINUTES_PER_WORKING_DAY,
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
}

impl ServerConfig {
    /// Returns `host:port`, suitable for a TCP bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// The complete engine configuration loaded from `engine.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Expected-time policy.
    #[serde(default)]
    pub work_policy: WorkPolicy,
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,
}

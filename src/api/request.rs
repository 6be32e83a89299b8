//! Request types for the attendance engine API.
//!
//! This module defines the JSON request bodies for the employee and badge
//! endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::BadgeType;

/// Request body for creating or updating an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
}

/// Request body for recording a badge event.
///
/// The employee comes from the URL path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeRequest {
    /// When the badge happened.
    pub timestamp: NaiveDateTime,
    /// IN or OUT.
    #[serde(rename = "type")]
    pub badge_type: BadgeType,
}

//! Employee model.
//!
//! Employees are owned by the employee directory; the engine only needs
//! to know whether one exists before accepting badges or building reports.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Represents an employee who can badge in and out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Contact email address.
    pub email: String,
}

impl Employee {
    /// Checks the name and email carried by an employee payload.
    ///
    /// Both fields are required; the email must look like `local@domain`.
    ///
    /// # Examples
    ///
    /// ```
    /// use attendance_engine::models::Employee;
    ///
    /// assert!(Employee::validate_fields("John Doe", "john@example.com").is_ok());
    /// assert!(Employee::validate_fields("", "john@example.com").is_err());
    /// assert!(Employee::validate_fields("John Doe", "not-an-email").is_err());
    /// ```
    pub fn validate_fields(name: &str, email: &str) -> EngineResult<()> {
        if name.trim().is_empty() {
            return Err(EngineError::invalid_input("name", "name is required"));
        }
        if email.trim().is_empty() {
            return Err(EngineError::invalid_input("email", "email is required"));
        }
        if !looks_like_email(email) {
            return Err(EngineError::invalid_input(
                "email",
                format!("'{email}' is not a valid email address"),
            ));
        }
        Ok(())
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

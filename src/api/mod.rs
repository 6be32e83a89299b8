//! HTTP API module for the attendance engine.
//!
//! This module provides the REST endpoints for managing employees,
//! recording badge events and reading daily or monthly time reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BadgeRequest, EmployeeRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;

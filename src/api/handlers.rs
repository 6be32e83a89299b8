//! HTTP request handlers for the attendance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineError;

use super::request::{BadgeRequest, EmployeeRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/employees",
            post(create_employee_handler).get(list_employees_handler),
        )
        .route(
            "/api/employees/:id",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .route(
            "/api/badges/employee/:employee_id",
            post(record_badge_handler),
        )
        .route(
            "/api/badges/employee/:employee_id/day/:date",
            get(daily_report_handler),
        )
        .route(
            "/api/badges/employee/:employee_id/month/:month",
            get(monthly_report_handler),
        )
        .with_state(state)
}

/// Handler for POST /api/employees.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create employee request");

    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(rejection) => return rejection.into_response(),
    };

    match state.employees().create(&request.name, &request.email).await {
        Ok(employee) => json_response(StatusCode::CREATED, &employee),
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for GET /api/employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing list employees request");

    match state.employees().list().await {
        Ok(employees) => json_response(StatusCode::OK, &employees),
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for GET /api/employees/:id.
async fn get_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Processing get employee request");

    match state.employees().get(&id).await {
        Ok(employee) => json_response(StatusCode::OK, &employee),
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for PUT /api/employees/:id.
async fn update_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Processing update employee request");

    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(rejection) => return rejection.into_response(),
    };

    match state
        .employees()
        .update(&id, &request.name, &request.email)
        .await
    {
        Ok(employee) => json_response(StatusCode::OK, &employee),
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for DELETE /api/employees/:id.
async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Processing delete employee request");

    match state.employees().delete(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for POST /api/badges/employee/:employee_id.
///
/// Records a badge event for an existing employee.
async fn record_badge_handler(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
    payload: Result<Json<BadgeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %employee_id, "Processing badge request");

    let request = match parse_body(payload, correlation_id) {
        Ok(request) => request,
        Err(rejection) => return rejection.into_response(),
    };

    match state
        .badges()
        .record_badge(&employee_id, request.timestamp, request.badge_type)
        .await
    {
        Ok(event) => json_response(StatusCode::CREATED, &event),
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for GET /api/badges/employee/:employee_id/day/:date.
async fn daily_report_handler(
    State(state): State<AppState>,
    Path((employee_id, date)): Path<(String, String)>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let start_time = Instant::now();

    match state.badges().daily_report(&employee_id, &date).await {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                date = %date,
                total_minutes = report.total_minutes,
                sufficient = report.sufficient,
                duration_us = start_time.elapsed().as_micros(),
                "Daily report built"
            );
            json_response(StatusCode::OK, &report)
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Handler for GET /api/badges/employee/:employee_id/month/:month.
async fn monthly_report_handler(
    State(state): State<AppState>,
    Path((employee_id, month)): Path<(String, String)>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let start_time = Instant::now();

    match state.badges().monthly_report(&employee_id, &month).await {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee_id,
                month = %month,
                total_minutes = report.total_minutes,
                expected_minutes = report.expected_minutes,
                sufficient = report.sufficient,
                duration_us = start_time.elapsed().as_micros(),
                "Monthly report built"
            );
            json_response(StatusCode::OK, &report)
        }
        Err(err) => error_response(err, correlation_id),
    }
}

/// Unwraps a JSON body, turning axum's rejection into a 400 response.
fn parse_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(ApiErrorResponse::bad_request(error))
        }
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

//! HTTP request handlers for the Leave Engine API.
//!
//! This module contains the handler functions for all API endpoints.

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

use crate::error::LeaveError;
use crate::processor::LeaveRequest;

use super::request::{ApplyLeaveRequest, RegisterEmployeeRequest};
use super::response::{ApiError, ApiErrorResponse, ApprovalResponse, RegistrationResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employees", post(register_employee_handler))
        .route("/employees/:name/balance", get(leave_balance_handler))
        .route("/employees/:name/history", get(leave_history_handler))
        .route("/leave", post(apply_leave_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(err: LeaveError) -> Response {
    ApiErrorResponse::from(err).into_response()
}

/// Turns a body rejection into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
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
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /employees.
///
/// Registers an employee. A repeat registration is reported with status
/// `already_registered` and HTTP 200 rather than as an error.
async fn register_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<RegisterEmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let outcome = match state.processor().register_employee(&request.name) {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee = %request.name,
                error = %err,
                "Registration failed"
            );
            return error_response(err);
        }
    };
    info!(
        correlation_id = %correlation_id,
        employee = %request.name,
        created = outcome.is_new(),
        "Processed registration request"
    );

    let status = if outcome.is_new() {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    json_response(status, RegistrationResponse::from(&outcome))
}

/// Handler for POST /leave.
///
/// Accepts a leave request and returns the approval or the reason it was
/// rejected.
async fn apply_leave_handler(
    State(state): State<AppState>,
    payload: Result<Json<ApplyLeaveRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    info!(
        correlation_id = %correlation_id,
        employee = %request.employee,
        leave_type = %request.leave_type,
        "Processing leave request"
    );

    let request: LeaveRequest = request.into();
    match state.processor().apply_leave(&request) {
        Ok(approval) => json_response(StatusCode::OK, ApprovalResponse::from(approval)),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Leave request failed");
            error_response(err)
        }
    }
}

/// Handler for GET /employees/:name/balance.
async fn leave_balance_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    match state.processor().get_leave_balance(&name) {
        Ok(balances) => json_response(StatusCode::OK, balances),
        Err(err) => error_response(err),
    }
}

/// Handler for GET /employees/:name/history.
async fn leave_history_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Response {
    match state.processor().get_leave_history(&name) {
        Ok(history) => json_response(StatusCode::OK, history),
        Err(err) => error_response(err),
    }
}

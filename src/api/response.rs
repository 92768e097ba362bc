//! Response types for the Leave Engine API.
//!
//! This module defines the success and error payloads returned by the HTTP
//! API, and how engine errors map to status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::LeaveError;
use crate::models::LeaveRecord;
use crate::processor::{LeaveApproval, RegistrationOutcome};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<LeaveError> for ApiErrorResponse {
    fn from(error: LeaveError) -> Self {
        let message = error.to_string();
        let (status, error) = match error {
            LeaveError::EmployeeNotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiError::new("EMPLOYEE_NOT_FOUND", message),
            ),
            // Registration reports repeats as a 200 outcome; this arm only
            // covers direct directory callers.
            LeaveError::AlreadyRegistered { .. } => (
                StatusCode::CONFLICT,
                ApiError::new("ALREADY_REGISTERED", message),
            ),
            LeaveError::UnknownCategory { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("UNKNOWN_LEAVE_TYPE", message),
            ),
            LeaveError::InvalidDateFormat { input } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_DATE_FORMAT",
                    message,
                    format!("Could not parse '{}' as a calendar date", input),
                ),
            ),
            LeaveError::InvalidRange { start, end } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_RANGE",
                    message,
                    format!("Requested {} to {}", start, end),
                ),
            ),
            LeaveError::InsufficientBalance { requested, .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INSUFFICIENT_BALANCE",
                    message,
                    format!("Requested {} day(s)", requested),
                ),
            ),
            LeaveError::Overlap { first_conflict } => (
                StatusCode::CONFLICT,
                ApiError::with_details(
                    "LEAVE_OVERLAP",
                    message,
                    format!("{} is already booked", first_conflict),
                ),
            ),
            LeaveError::ConfigNotFound { .. } | LeaveError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
        };
        ApiErrorResponse { status, error }
    }
}

/// Response body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationResponse {
    /// `registered` or `already_registered`.
    pub status: String,
    /// User-facing description of the outcome.
    pub message: String,
}

impl From<&RegistrationOutcome> for RegistrationResponse {
    fn from(outcome: &RegistrationOutcome) -> Self {
        let status = match outcome {
            RegistrationOutcome::Registered { .. } => "registered",
            RegistrationOutcome::AlreadyRegistered { .. } => "already_registered",
        };
        Self {
            status: status.to_string(),
            message: outcome.message(),
        }
    }
}

/// Response body for an approved `POST /leave`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApprovalResponse {
    /// Always `approved`.
    pub status: String,
    /// Confirmation text with day count and span.
    pub message: String,
    /// The record added to the employee's history.
    pub record: LeaveRecord,
}

impl From<LeaveApproval> for ApprovalResponse {
    fn from(approval: LeaveApproval) -> Self {
        Self {
            status: "approved".to_string(),
            message: approval.message(),
            record: approval.record,
        }
    }
}

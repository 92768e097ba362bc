//! Request types for the Leave Engine API.
//!
//! This module defines the JSON request bodies for the `/employees` and
//! `/leave` endpoints.

use serde::{Deserialize, Serialize};

use crate::processor::LeaveRequest;

/// Request body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterEmployeeRequest {
    /// Identifier of the employee to register.
    pub name: String,
}

/// Request body for `POST /leave`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplyLeaveRequest {
    /// Employee identifier.
    pub employee: String,
    /// Leave category name (e.g., "casual").
    pub leave_type: String,
    /// First day of leave, `YYYY-MM-DD`.
    pub start: String,
    /// Last day of leave, `YYYY-MM-DD`.
    pub end: String,
    /// Optional free-text reason.
    #[serde(default)]
    pub reason: String,
}

impl From<ApplyLeaveRequest> for LeaveRequest {
    fn from(req: ApplyLeaveRequest) -> Self {
        LeaveRequest {
            employee: req.employee,
            leave_type: req.leave_type,
            start: req.start,
            end: req.end,
            reason: req.reason,
        }
    }
}

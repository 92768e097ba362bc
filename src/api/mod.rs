//! HTTP API module for the Leave Engine.
//!
//! This module exposes the four leave operations as JSON endpoints and
//! renders engine errors as user-facing payloads.
//!
//! | Method | Path | Operation |
//! |---|---|---|
//! | POST | `/employees` | register an employee |
//! | POST | `/leave` | apply for leave |
//! | GET | `/employees/:name/balance` | current balances |
//! | GET | `/employees/:name/history` | approved leave |

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ApplyLeaveRequest, RegisterEmployeeRequest};
pub use response::{ApiError, ApiErrorResponse, ApprovalResponse, RegistrationResponse};
pub use state::AppState;

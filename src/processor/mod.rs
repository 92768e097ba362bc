//! Request processing for the Leave Engine.
//!
//! This module validates incoming leave requests and orchestrates the
//! ledger updates behind the four supported operations: registering an
//! employee, applying for leave, and reading balances or history.

mod outcome;
mod service;

pub use outcome::{LeaveApproval, RegistrationOutcome};
pub use service::{DATE_FORMAT, LeaveRequest, RequestProcessor, parse_date};

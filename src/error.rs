//! Error types for the Leave Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition a leave request or a policy load can fail with.
//! The `Display` text of each variant is the message shown to the person
//! who made the request.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Leave Engine.
///
/// Every failure is local to a single request and leaves stored state
/// untouched.
///
/// # Example
///
/// ```
/// use leave_engine::error::LeaveError;
///
/// let error = LeaveError::EmployeeNotFound {
///     employee: "carol".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee 'carol' not found.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LeaveError {
    /// No ledger is registered for the employee.
    #[error("Employee '{employee}' not found.")]
    EmployeeNotFound {
        /// The identifier that was looked up.
        employee: String,
    },

    /// The employee already has a ledger.
    #[error("Employee '{employee}' is already registered.")]
    AlreadyRegistered {
        /// The identifier that was registered twice.
        employee: String,
    },

    /// The leave category is not recognized for this employee.
    #[error("Invalid leave type '{category}'. Valid types: [{}]", .valid.join(", "))]
    UnknownCategory {
        /// The category that was requested.
        category: String,
        /// The categories the ledger recognizes, sorted.
        valid: Vec<String>,
    },

    /// A date string was not an ISO calendar date.
    #[error("Invalid date format. Use YYYY-MM-DD.")]
    InvalidDateFormat {
        /// The raw input that failed to parse.
        input: String,
    },

    /// The end of a date range falls before its start.
    #[error("End date cannot be before start date.")]
    InvalidRange {
        /// The requested first day.
        start: NaiveDate,
        /// The requested last day.
        end: NaiveDate,
    },

    /// The request needs more days than remain in the category.
    #[error("Insufficient {category} leave balance. Available: {available} days.")]
    InsufficientBalance {
        /// The category that was debited.
        category: String,
        /// Days requested.
        requested: u32,
        /// Days remaining.
        available: u32,
    },

    /// At least one requested day is already booked.
    #[error(
        "Leave dates overlap with previously approved leave. You cannot take multiple leaves on the same day."
    )]
    Overlap {
        /// The earliest requested day that is already booked.
        first_conflict: NaiveDate,
    },

    /// Policy file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Policy file could not be parsed or is inconsistent.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return LeaveError.
pub type LeaveResult<T> = Result<T, LeaveError>;

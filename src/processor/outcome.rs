//! Outcomes of processed requests.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::LeaveRecord;

/// A leave request that passed every check and was committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveApproval {
    /// The employee the leave was booked for.
    pub employee: String,
    /// The record appended to the employee's history.
    pub record: LeaveRecord,
}

impl LeaveApproval {
    /// Confirmation text including the day count and span.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_engine::processor::{LeaveRequest, RequestProcessor};
    ///
    /// let processor = RequestProcessor::default();
    /// processor.register_employee("bob").unwrap();
    /// let approval = processor
    ///     .apply_leave(&LeaveRequest::new("bob", "casual", "2024-01-01", "2024-01-03"))
    ///     .unwrap();
    /// assert_eq!(
    ///     approval.message(),
    ///     "Leave approved for 3 day(s) (2024-01-01 to 2024-01-03) of casual leave for bob."
    /// );
    /// ```
    pub fn message(&self) -> String {
        format!(
            "Leave approved for {} day(s) ({} to {}) of {} leave for {}.",
            self.record.days(),
            self.record.start().format("%Y-%m-%d"),
            self.record.end().format("%Y-%m-%d"),
            self.record.category(),
            self.employee
        )
    }
}

impl fmt::Display for LeaveApproval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Result of a registration request.
///
/// Registering an identifier that already exists is informational, not a
/// failure, so both cases are values of this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RegistrationOutcome {
    /// A new ledger was created with default balances.
    Registered {
        /// The registered identifier.
        employee: String,
    },
    /// The identifier already had a ledger; nothing changed.
    AlreadyRegistered {
        /// The identifier that was already present.
        employee: String,
    },
}

impl RegistrationOutcome {
    /// Returns true if this call created the ledger.
    pub fn is_new(&self) -> bool {
        matches!(self, RegistrationOutcome::Registered { .. })
    }

    /// The identifier the outcome refers to.
    pub fn employee(&self) -> &str {
        match self {
            RegistrationOutcome::Registered { employee }
            | RegistrationOutcome::AlreadyRegistered { employee } => employee,
        }
    }

    /// User-facing description of the outcome.
    pub fn message(&self) -> String {
        match self {
            RegistrationOutcome::Registered { employee } => {
                format!("Employee '{}' registered with default leave balances.", employee)
            }
            RegistrationOutcome::AlreadyRegistered { employee } => {
                format!("Employee '{}' is already registered.", employee)
            }
        }
    }
}

impl fmt::Display for RegistrationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

//! The request processor.
//!
//! [`RequestProcessor`] is the entry point for the four supported
//! operations. It parses and validates raw input, resolves the employee
//! and hands the checked request to that employee's ledger.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::LeavePolicy;
use crate::error::{LeaveError, LeaveResult};
use crate::ledger::EmployeeDirectory;
use crate::models::{Balances, DateRange, LeaveRecord};

use super::outcome::{LeaveApproval, RegistrationOutcome};

/// Date format accepted for request dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A raw leave request as received from a caller.
///
/// Dates are kept as strings here; parsing them is part of processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Employee identifier.
    pub employee: String,
    /// Leave category name.
    pub leave_type: String,
    /// First day of leave, `YYYY-MM-DD`.
    pub start: String,
    /// Last day of leave, `YYYY-MM-DD`.
    pub end: String,
    /// Optional free-text reason.
    #[serde(default)]
    pub reason: String,
}

impl LeaveRequest {
    /// Creates a request with an empty reason.
    pub fn new(
        employee: impl Into<String>,
        leave_type: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            employee: employee.into(),
            leave_type: leave_type.into(),
            start: start.into(),
            end: end.into(),
            reason: String::new(),
        }
    }

    /// Sets the reason.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }
}

/// Parses an ISO calendar date (`YYYY-MM-DD`, no time of day).
///
/// # Example
///
/// ```
/// use leave_engine::processor::parse_date;
///
/// assert!(parse_date("2024-02-29").is_ok());
/// assert!(parse_date("2023-02-29").is_err());
/// assert!(parse_date("2024-01-01T09:00:00").is_err());
/// assert!(parse_date("2024-1-1").is_err());
/// ```
pub fn parse_date(input: &str) -> LeaveResult<NaiveDate> {
    let invalid = || LeaveError::InvalidDateFormat {
        input: input.to_string(),
    };

    // chrono alone accepts unpadded fields, a sign and leading whitespace.
    if !has_iso_date_shape(input) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid())
}

/// Exactly four digits, dash, two digits, dash, two digits.
fn has_iso_date_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Validates leave requests and applies them to employee ledgers.
///
/// Each processor owns its own [`EmployeeDirectory`], so independent
/// instances never share state. All methods take `&self` and are safe to
/// call from many threads at once.
#[derive(Debug, Default)]
pub struct RequestProcessor {
    directory: EmployeeDirectory,
}

impl RequestProcessor {
    /// Creates a processor with an empty directory governed by `policy`.
    pub fn new(policy: LeavePolicy) -> Self {
        Self::with_directory(EmployeeDirectory::new(policy))
    }

    /// Creates a processor around an existing directory.
    pub fn with_directory(directory: EmployeeDirectory) -> Self {
        Self { directory }
    }

    /// Returns the directory this processor works against.
    pub fn directory(&self) -> &EmployeeDirectory {
        &self.directory
    }

    /// Registers an employee with the policy's default balances.
    ///
    /// An identifier that is already registered yields
    /// [`RegistrationOutcome::AlreadyRegistered`] and leaves its ledger
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Any directory failure other than [`LeaveError::AlreadyRegistered`]
    /// is returned as is.
    pub fn register_employee(&self, employee: &str) -> LeaveResult<RegistrationOutcome> {
        match self.directory.register(employee) {
            Ok(_) => {
                info!(employee, "Employee registered");
                Ok(RegistrationOutcome::Registered {
                    employee: employee.to_string(),
                })
            }
            Err(LeaveError::AlreadyRegistered { .. }) => {
                info!(employee, "Employee already registered");
                Ok(RegistrationOutcome::AlreadyRegistered {
                    employee: employee.to_string(),
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Validates a leave request and commits it to the employee's ledger.
    ///
    /// Validation order: date format, employee, leave category, date order,
    /// then the ledger's balance and overlap checks. A rejected request
    /// changes nothing.
    ///
    /// # Errors
    ///
    /// [`LeaveError::InvalidDateFormat`], [`LeaveError::EmployeeNotFound`],
    /// [`LeaveError::UnknownCategory`], [`LeaveError::InvalidRange`],
    /// [`LeaveError::InsufficientBalance`] or [`LeaveError::Overlap`].
    pub fn apply_leave(&self, request: &LeaveRequest) -> LeaveResult<LeaveApproval> {
        let result = self.try_apply_leave(request);
        match &result {
            Ok(approval) => info!(
                employee = %request.employee,
                leave_type = %request.leave_type,
                record_id = %approval.record.id(),
                days = approval.record.days(),
                "Leave approved"
            ),
            Err(err) => warn!(
                employee = %request.employee,
                leave_type = %request.leave_type,
                start = %request.start,
                end = %request.end,
                error = %err,
                "Leave request rejected"
            ),
        }
        result
    }

    fn try_apply_leave(&self, request: &LeaveRequest) -> LeaveResult<LeaveApproval> {
        let start = parse_date(&request.start)?;
        let end = parse_date(&request.end)?;

        let ledger = self.directory.lookup(&request.employee)?;

        ledger.ensure_category(&request.leave_type)?;

        let range = DateRange::new(start, end)?;
        let record = ledger.try_apply(&request.leave_type, range, request.reason.as_str())?;

        Ok(LeaveApproval {
            employee: request.employee.clone(),
            record,
        })
    }

    /// Returns the employee's current balances.
    ///
    /// # Errors
    ///
    /// Returns [`LeaveError::EmployeeNotFound`] if the employee is not
    /// registered.
    pub fn get_leave_balance(&self, employee: &str) -> LeaveResult<Balances> {
        Ok(self.directory.lookup(employee)?.balances())
    }

    /// Returns the employee's approved leave in approval order.
    ///
    /// # Errors
    ///
    /// Returns [`LeaveError::EmployeeNotFound`] if the employee is not
    /// registered.
    pub fn get_leave_history(&self, employee: &str) -> LeaveResult<Vec<LeaveRecord>> {
        Ok(self.directory.lookup(employee)?.history_snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn processor_with_bob() -> RequestProcessor {
        let processor = RequestProcessor::default();
        assert!(processor.register_employee("bob").unwrap().is_new());
        processor
    }

    fn balance(processor: &RequestProcessor, employee: &str, category: &str) -> u32 {
        processor.get_leave_balance(employee).unwrap()[category]
    }

    #[test]
    fn test_register_gives_default_balances() {
        let processor = processor_with_bob();
        let balances = processor.get_leave_balance("bob").unwrap();
        assert_eq!(balances, LeavePolicy::default().default_balances());
    }

    #[test]
    fn test_register_twice_is_informational() {
        let processor = processor_with_bob();
        processor
            .apply_leave(&LeaveRequest::new("bob", "casual", "2024-01-01", "2024-01-01"))
            .unwrap();

        let outcome = processor.register_employee("bob").unwrap();
        assert_eq!(
            outcome,
            RegistrationOutcome::AlreadyRegistered {
                employee: "bob".to_string()
            }
        );
        assert_eq!(balance(&processor, "bob", "casual"), 7);
    }

    #[test]
    fn test_apply_leave_success_message() {
        let processor = processor_with_bob();
        let approval = processor
            .apply_leave(&LeaveRequest::new("bob", "casual", "2024-01-01", "2024-01-03"))
            .unwrap();

        assert_eq!(approval.record.days(), 3);
        assert_eq!(
            approval.to_string(),
            "Leave approved for 3 day(s) (2024-01-01 to 2024-01-03) of casual leave for bob."
        );
        assert_eq!(balance(&processor, "bob", "casual"), 5);
    }

    #[test]
    fn test_apply_leave_keeps_reason() {
        let processor = processor_with_bob();
        let request =
            LeaveRequest::new("bob", "sick", "2024-05-01", "2024-05-02").with_reason("flu");
        processor.apply_leave(&request).unwrap();

        let history = processor.get_leave_history("bob").unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].reason(), "flu");
    }

    #[test]
    fn test_invalid_date_format_is_rejected() {
        let processor = processor_with_bob();
        for bad in [
            "2024/01/01",
            "01-02-2024",
            "2024-13-01",
            "",
            "2024-01-01T00:00:00",
            "2024-1-1",
            "2024-01-1",
            "2024-1-01",
            " 2024-01-01",
            "2024-01-01 ",
            "+2024-01-01",
            "-0001-01-01",
            "+02024-01-01",
            "２０２４-01-01",
        ] {
            let result = processor.apply_leave(&LeaveRequest::new("bob", "casual", bad, "2024-01-02"));
            assert!(
                matches!(result, Err(LeaveError::InvalidDateFormat { .. })),
                "expected format error for {:?}, got {:?}",
                bad,
                result
            );
        }
        assert!(processor.get_leave_history("bob").unwrap().is_empty());
    }

    #[test]
    fn test_parse_date_accepts_padded_iso_dates() {
        assert_eq!(
            parse_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            parse_date("0001-01-01").unwrap(),
            NaiveDate::from_ymd_opt(1, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_date_rejects_unpadded_signed_and_padded_input() {
        for bad in ["2024-1-1", "2024-01-1", " 2024-01-01", "+2024-01-01", "-0001-01-01"] {
            assert_eq!(
                parse_date(bad),
                Err(LeaveError::InvalidDateFormat {
                    input: bad.to_string()
                }),
                "expected {:?} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_date_format_checked_before_employee() {
        let processor = RequestProcessor::default();
        let result = processor.apply_leave(&LeaveRequest::new("carol", "casual", "bad", "2024-01-01"));
        assert!(matches!(result, Err(LeaveError::InvalidDateFormat { .. })));
    }

    #[test]
    fn test_unknown_employee_creates_no_state() {
        let processor = processor_with_bob();
        let result =
            processor.apply_leave(&LeaveRequest::new("carol", "casual", "2024-01-01", "2024-01-02"));
        assert_eq!(
            result.unwrap_err(),
            LeaveError::EmployeeNotFound {
                employee: "carol".to_string()
            }
        );
        assert!(!processor.directory().contains("carol"));
        assert_eq!(processor.directory().len(), 1);
    }

    #[test]
    fn test_unknown_category_checked_before_range() {
        let processor = processor_with_bob();
        let result =
            processor.apply_leave(&LeaveRequest::new("bob", "vacation", "2024-01-05", "2024-01-01"));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Invalid leave type 'vacation'. Valid types: [casual, floater, sick]"
        );
    }

    #[test]
    fn test_repeat_registration_is_an_outcome_not_an_error() {
        let processor = processor_with_bob();
        let outcome = processor.register_employee("bob").unwrap();
        assert!(!outcome.is_new());
        assert_eq!(processor.directory().len(), 1);
        assert_eq!(
            processor.register_employee("carol"),
            Ok(RegistrationOutcome::Registered {
                employee: "carol".to_string()
            })
        );
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let processor = processor_with_bob();
        let result =
            processor.apply_leave(&LeaveRequest::new("bob", "casual", "2024-01-05", "2024-01-01"));
        assert!(matches!(result, Err(LeaveError::InvalidRange { .. })));
        assert_eq!(balance(&processor, "bob", "casual"), 8);
    }

    #[test]
    fn test_balance_and_history_for_unknown_employee() {
        let processor = RequestProcessor::default();
        assert!(matches!(
            processor.get_leave_balance("nobody"),
            Err(LeaveError::EmployeeNotFound { .. })
        ));
        assert!(matches!(
            processor.get_leave_history("nobody"),
            Err(LeaveError::EmployeeNotFound { .. })
        ));
    }

    #[test]
    fn test_independent_processors_do_not_share_state() {
        let first = processor_with_bob();
        let second = RequestProcessor::default();
        assert!(second.get_leave_balance("bob").is_err());
        assert!(second.register_employee("bob").unwrap().is_new());

        first
            .apply_leave(&LeaveRequest::new("bob", "sick", "2024-01-01", "2024-01-10"))
            .unwrap();
        assert_eq!(balance(&second, "bob", "sick"), 30);
    }

    #[test]
    fn test_concurrent_requests_for_different_employees() {
        let processor = Arc::new(RequestProcessor::default());
        for i in 0..4 {
            processor.register_employee(&format!("emp_{}", i)).unwrap();
        }

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let processor = Arc::clone(&processor);
                thread::spawn(move || {
                    let employee = format!("emp_{}", i);
                    for day in 1..=8 {
                        let date = format!("2024-03-{:02}", day);
                        processor
                            .apply_leave(&LeaveRequest::new(&employee, "casual", &date, &date))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        for i in 0..4 {
            let employee = format!("emp_{}", i);
            assert_eq!(balance(&processor, &employee, "casual"), 0);
            assert_eq!(processor.get_leave_history(&employee).unwrap().len(), 8);
        }
    }
}

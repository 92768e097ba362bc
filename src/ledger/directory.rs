//! Registry of employee ledgers.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::config::LeavePolicy;
use crate::error::{LeaveError, LeaveResult};

use super::LeaveLedger;

/// Maps employee identifiers to their ledgers.
///
/// Identifiers are matched exactly (case-sensitive, no trimming). The
/// directory only grows: there is no way to remove an employee.
///
/// Lookups hand out an `Arc` to the ledger and release the directory lock
/// straight away, so work on one employee's ledger never holds up another.
///
/// # Example
///
/// ```
/// use leave_engine::config::LeavePolicy;
/// use leave_engine::error::LeaveError;
/// use leave_engine::ledger::EmployeeDirectory;
///
/// let directory = EmployeeDirectory::new(LeavePolicy::default());
/// directory.register("alice").unwrap();
///
/// assert!(directory.lookup("alice").is_ok());
/// assert!(matches!(
///     directory.register("alice"),
///     Err(LeaveError::AlreadyRegistered { .. })
/// ));
/// ```
#[derive(Debug, Default)]
pub struct EmployeeDirectory {
    policy: LeavePolicy,
    ledgers: RwLock<HashMap<String, Arc<LeaveLedger>>>,
}

impl EmployeeDirectory {
    /// Creates an empty directory whose new ledgers follow `policy`.
    pub fn new(policy: LeavePolicy) -> Self {
        Self {
            policy,
            ledgers: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the policy used for newly registered employees.
    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }

    /// Creates a ledger with the policy's starting balances.
    ///
    /// # Errors
    ///
    /// Returns [`LeaveError::AlreadyRegistered`] if the identifier already
    /// has a ledger; the existing ledger is left as it was.
    pub fn register(&self, employee: &str) -> LeaveResult<Arc<LeaveLedger>> {
        let mut ledgers = self.ledgers.write();
        match ledgers.entry(employee.to_string()) {
            Entry::Occupied(_) => Err(LeaveError::AlreadyRegistered {
                employee: employee.to_string(),
            }),
            Entry::Vacant(slot) => {
                let ledger = Arc::new(LeaveLedger::new(&self.policy));
                slot.insert(Arc::clone(&ledger));
                debug!(employee, "Registered employee ledger");
                Ok(ledger)
            }
        }
    }

    /// Returns the employee's ledger.
    ///
    /// # Errors
    ///
    /// Returns [`LeaveError::EmployeeNotFound`] if the identifier is not
    /// registered.
    pub fn lookup(&self, employee: &str) -> LeaveResult<Arc<LeaveLedger>> {
        self.ledgers
            .read()
            .get(employee)
            .cloned()
            .ok_or_else(|| LeaveError::EmployeeNotFound {
                employee: employee.to_string(),
            })
    }

    /// Checks whether the identifier is registered.
    pub fn contains(&self, employee: &str) -> bool {
        self.ledgers.read().contains_key(employee)
    }

    /// Returns the registered identifiers, sorted.
    pub fn employees(&self) -> Vec<String> {
        let mut names: Vec<String> = self.ledgers.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered employees.
    pub fn len(&self) -> usize {
        self.ledgers.read().len()
    }

    /// Returns true if nobody is registered.
    pub fn is_empty(&self) -> bool {
        self.ledgers.read().is_empty()
    }
}

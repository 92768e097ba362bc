//! Per-employee leave ledger.
//!
//! A [`LeaveLedger`] holds one employee's balances and approved history and
//! is the only place either can change. Every mutation goes through
//! [`LeaveLedger::try_apply`], which validates and commits under a single
//! lock so balances and history never disagree.

use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use parking_lot::Mutex;
use tracing::debug;

use crate::config::LeavePolicy;
use crate::error::{LeaveError, LeaveResult};
use crate::models::{Balances, DateRange, LeaveCategory, LeaveRecord};

/// One employee's leave balances and approved history.
///
/// # Example
///
/// ```
/// use leave_engine::config::LeavePolicy;
/// use leave_engine::ledger::LeaveLedger;
/// use leave_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let ledger = LeaveLedger::new(&LeavePolicy::default());
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
/// ).unwrap();
///
/// let record = ledger.try_apply("casual", range, "").unwrap();
/// assert_eq!(record.days(), 3);
/// assert_eq!(ledger.balance_of("casual").unwrap(), 5);
/// ```
#[derive(Debug)]
pub struct LeaveLedger {
    state: Mutex<LedgerState>,
}

#[derive(Debug)]
struct LedgerState {
    balances: Balances,
    history: Vec<LeaveRecord>,
    /// Booked spans keyed by first day, mapping to last day. Spans never
    /// overlap, so they are also sorted by last day.
    booked: BTreeMap<NaiveDate, NaiveDate>,
}

impl LedgerState {
    fn unknown_category(&self, category: &str) -> LeaveError {
        LeaveError::UnknownCategory {
            category: category.to_string(),
            valid: self.balances.keys().map(|c| c.to_string()).collect(),
        }
    }

    /// Returns the earliest day of `range` that is already booked.
    fn first_conflict(&self, range: &DateRange) -> Option<NaiveDate> {
        self.booked
            .range(..=range.end())
            .rev()
            .take_while(|(_, end)| **end >= range.start())
            .last()
            .map(|(start, _)| (*start).max(range.start()))
    }
}

impl LeaveLedger {
    /// Creates a ledger with the policy's starting balances and no history.
    pub fn new(policy: &LeavePolicy) -> Self {
        Self::with_balances(policy.default_balances())
    }

    /// Creates a ledger with explicit starting balances and no history.
    ///
    /// The keys of `balances` become the ledger's recognized categories.
    pub fn with_balances(balances: Balances) -> Self {
        Self {
            state: Mutex::new(LedgerState {
                balances,
                history: Vec::new(),
                booked: BTreeMap::new(),
            }),
        }
    }

    /// Returns the remaining balance for a category.
    ///
    /// # Errors
    ///
    /// Returns [`LeaveError::UnknownCategory`] if the ledger does not
    /// recognize the category.
    pub fn balance_of(&self, category: &str) -> LeaveResult<u32> {
        let state = self.state.lock();
        match state.balances.get(category) {
            Some(balance) => Ok(*balance),
            None => Err(state.unknown_category(category)),
        }
    }

    /// Returns a snapshot of every balance.
    pub fn balances(&self) -> Balances {
        self.state.lock().balances.clone()
    }

    /// Returns the recognized category names, sorted.
    pub fn categories(&self) -> Vec<LeaveCategory> {
        self.state.lock().balances.keys().cloned().collect()
    }

    /// Checks that the ledger holds a balance for `category`.
    ///
    /// # Errors
    ///
    /// Returns [`LeaveError::UnknownCategory`] listing the valid categories.
    pub fn ensure_category(&self, category: &str) -> LeaveResult<()> {
        let state = self.state.lock();
        if state.balances.contains_key(category) {
            Ok(())
        } else {
            Err(state.unknown_category(category))
        }
    }

    /// Returns a copy of the approved records in approval order.
    pub fn history_snapshot(&self) -> Vec<LeaveRecord> {
        self.state.lock().history.clone()
    }

    /// Returns balances and history captured under the same lock.
    pub fn snapshot(&self) -> (Balances, Vec<LeaveRecord>) {
        let state = self.state.lock();
        (state.balances.clone(), state.history.clone())
    }

    /// Checks whether `day` is covered by any approved record.
    pub fn is_booked(&self, day: NaiveDate) -> bool {
        self.state
            .lock()
            .first_conflict(&DateRange::single(day))
            .is_some()
    }

    /// Validates a request and, if it passes, debits the balance and
    /// records the leave.
    ///
    /// Checks run in this order, and the first failure is returned with no
    /// change to the ledger:
    ///
    /// 1. the category is recognized ([`LeaveError::UnknownCategory`])
    /// 2. the range is not reversed ([`LeaveError::InvalidRange`])
    /// 3. enough days remain ([`LeaveError::InsufficientBalance`])
    /// 4. no requested day is already booked under any category
    ///    ([`LeaveError::Overlap`])
    ///
    /// The whole sequence holds the ledger lock, so concurrent calls on the
    /// same ledger commit one at a time and each sees every earlier commit.
    pub fn try_apply(
        &self,
        category: &str,
        range: DateRange,
        reason: impl Into<String>,
    ) -> LeaveResult<LeaveRecord> {
        let mut state = self.state.lock();

        let (category, available) = match state.balances.get_key_value(category) {
            Some((key, balance)) => (key.clone(), *balance),
            None => return Err(state.unknown_category(category)),
        };

        if range.end() < range.start() {
            return Err(LeaveError::InvalidRange {
                start: range.start(),
                end: range.end(),
            });
        }

        let requested = range.day_count();
        if requested > available {
            return Err(LeaveError::InsufficientBalance {
                category: category.to_string(),
                requested,
                available,
            });
        }

        if let Some(first_conflict) = state.first_conflict(&range) {
            return Err(LeaveError::Overlap { first_conflict });
        }

        let record = LeaveRecord::new(category.clone(), range, reason.into(), Utc::now());
        state.balances.insert(category, available - requested);
        state.booked.insert(range.start(), range.end());
        state.history.push(record.clone());

        debug!(
            record_id = %record.id(),
            leave_type = %record.category(),
            days = requested,
            remaining = available - requested,
            "Committed leave record"
        );

        Ok(record)
    }
}

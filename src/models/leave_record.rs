//! Approved leave records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{DateRange, LeaveCategory};

/// A single approved leave entry in an employee's history.
///
/// Records are created only by
/// [`LeaveLedger::try_apply`](crate::ledger::LeaveLedger::try_apply) and
/// never change afterwards; fields are exposed through accessors only.
///
/// Serialized field names follow the payload exposed to callers: `type`,
/// `start`, `end`, `days`, `reason` and `applied_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    id: Uuid,
    #[serde(rename = "type")]
    category: LeaveCategory,
    start: NaiveDate,
    end: NaiveDate,
    days: u32,
    #[serde(default)]
    reason: String,
    applied_at: DateTime<Utc>,
}

impl LeaveRecord {
    pub(crate) fn new(
        category: LeaveCategory,
        range: DateRange,
        reason: String,
        applied_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            start: range.start(),
            end: range.end(),
            days: range.day_count(),
            reason,
            applied_at,
        }
    }

    /// Unique identifier of the record.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The category the days were taken from.
    pub fn category(&self) -> &LeaveCategory {
        &self.category
    }

    /// First day of leave.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of leave.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days taken, counting both ends.
    pub fn days(&self) -> u32 {
        self.days
    }

    /// Free-text reason given with the request. May be empty.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// When the leave was approved.
    pub fn applied_at(&self) -> DateTime<Utc> {
        self.applied_at
    }

    /// Checks whether `day` is one of the days this record covers.
    pub fn covers(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }
}

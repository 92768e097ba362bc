//! Leave category names.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A named kind of leave, such as `casual` or `sick`.
///
/// Categories are plain case-sensitive names. Which names are valid is
/// decided by the [`LeavePolicy`](crate::config::LeavePolicy) an employee's
/// ledger was created with, not by this type.
///
/// # Example
///
/// ```
/// use leave_engine::models::LeaveCategory;
///
/// let category = LeaveCategory::new("sick");
/// assert_eq!(category, LeaveCategory::sick());
/// assert_eq!(category.to_string(), "sick");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeaveCategory(String);

impl LeaveCategory {
    /// Name of the casual leave category.
    pub const CASUAL: &'static str = "casual";
    /// Name of the floater leave category.
    pub const FLOATER: &'static str = "floater";
    /// Name of the sick leave category.
    pub const SICK: &'static str = "sick";

    /// Creates a category with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Casual leave.
    pub fn casual() -> Self {
        Self::new(Self::CASUAL)
    }

    /// Floating holiday.
    pub fn floater() -> Self {
        Self::new(Self::FLOATER)
    }

    /// Sick leave.
    pub fn sick() -> Self {
        Self::new(Self::SICK)
    }

    /// Returns the category name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeaveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for LeaveCategory {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LeaveCategory {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Remaining whole days per category.
pub type Balances = BTreeMap<LeaveCategory, u32>;

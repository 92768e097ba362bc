//! Configuration types for leave policies.
//!
//! This module contains the strongly-typed policy structure that is
//! deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::models::{Balances, LeaveCategory};

/// The leave categories an organisation offers and the balance each new
/// employee starts with.
///
/// The category set is fixed once a ledger is created from the policy.
///
/// # Example
///
/// ```
/// use leave_engine::config::LeavePolicy;
///
/// let policy = LeavePolicy::default();
/// assert_eq!(policy.default_balance("casual"), Some(8));
/// assert_eq!(policy.default_balance("floater"), Some(2));
/// assert_eq!(policy.default_balance("sick"), Some(30));
/// assert!(!policy.recognizes("vacation"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeavePolicy {
    /// Human-readable policy name.
    #[serde(default = "default_policy_name")]
    pub name: String,
    /// Starting balance for each recognized category.
    pub categories: Balances,
}

fn default_policy_name() -> String {
    "Standard leave policy".to_string()
}

impl LeavePolicy {
    /// Creates a policy from a name and its category balances.
    pub fn new(name: impl Into<String>, categories: Balances) -> Self {
        Self {
            name: name.into(),
            categories,
        }
    }

    /// Returns the balances a newly registered employee starts with.
    pub fn default_balances(&self) -> Balances {
        self.categories.clone()
    }

    /// Returns the starting balance for a category, if the policy has it.
    pub fn default_balance(&self, category: &str) -> Option<u32> {
        self.categories.get(category).copied()
    }

    /// Checks whether the policy offers the named category.
    pub fn recognizes(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }
}

impl Default for LeavePolicy {
    fn default() -> Self {
        let categories = Balances::from([
            (LeaveCategory::casual(), 8),
            (LeaveCategory::floater(), 2),
            (LeaveCategory::sick(), 30),
        ]);
        Self::new(default_policy_name(), categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_policy_from_yaml() {
        let yaml = r#"
name: Engineering
categories:
  casual: 10
  sick: 12
  parental: 60
"#;
        let policy: LeavePolicy = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(policy.name, "Engineering");
        assert_eq!(policy.default_balance("parental"), Some(60));
        assert!(!policy.recognizes("floater"));
    }

    #[test]
    fn test_name_defaults_when_missing() {
        let yaml = "categories:\n  casual: 1\n";
        let policy: LeavePolicy = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(policy.name, "Standard leave policy");
    }

    #[test]
    fn test_negative_balance_is_rejected() {
        let yaml = "categories:\n  casual: -1\n";
        assert!(serde_yaml::from_str::<LeavePolicy>(yaml).is_err());
    }

    #[test]
    fn test_default_balances_are_independent_copies() {
        let policy = LeavePolicy::default();
        let mut balances = policy.default_balances();
        balances.insert(LeaveCategory::casual(), 0);
        assert_eq!(policy.default_balance("casual"), Some(8));
    }
}

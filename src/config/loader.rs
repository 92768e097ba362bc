//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading leave
//! policies from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{LeaveError, LeaveResult};

use super::types::LeavePolicy;

/// File name of the policy inside a configuration directory.
pub const POLICY_FILE: &str = "policy.yaml";

/// Loads and provides access to a leave policy.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── policy.yaml   # Leave categories and starting balances
/// ```
///
/// with `policy.yaml` shaped like:
///
/// ```yaml
/// name: Standard leave policy
/// categories:
///   casual: 8
///   floater: 2
///   sick: 30
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Loaded policy: {}", loader.policy().name);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    policy: LeavePolicy,
}

impl ConfigLoader {
    /// Loads the policy from `policy.yaml` in the specified directory.
    ///
    /// # Errors
    ///
    /// - [`LeaveError::ConfigNotFound`] if the file cannot be read
    /// - [`LeaveError::ConfigParseError`] if the file is not valid YAML, a
    ///   field is missing, or the policy defines no categories
    pub fn load<P: AsRef<Path>>(path: P) -> LeaveResult<Self> {
        let policy_path = path.as_ref().join(POLICY_FILE);
        let policy = Self::load_yaml::<LeavePolicy>(&policy_path)?;

        if policy.categories.is_empty() {
            return Err(LeaveError::ConfigParseError {
                path: policy_path.display().to_string(),
                message: "policy defines no leave categories".to_string(),
            });
        }

        debug!(
            policy = %policy.name,
            categories = policy.categories.len(),
            "Loaded leave policy"
        );

        Ok(Self { policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> LeaveResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| LeaveError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| LeaveError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }

    /// Consumes the loader and returns the policy.
    pub fn into_policy(self) -> LeavePolicy {
        self.policy
    }
}

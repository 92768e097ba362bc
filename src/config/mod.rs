//! Configuration loading and management for the Leave Engine.
//!
//! This module provides functionality to load the leave policy (which
//! categories exist and what each employee starts with) from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Loaded policy: {}", config.policy().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, POLICY_FILE};
pub use types::LeavePolicy;

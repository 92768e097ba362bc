//! Application state for the Leave Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::LeavePolicy;
use crate::processor::RequestProcessor;

/// Shared application state.
///
/// Every handler works against the same [`RequestProcessor`]; cloning the
/// state clones the handle, not the employee data.
#[derive(Clone, Default)]
pub struct AppState {
    processor: Arc<RequestProcessor>,
}

impl AppState {
    /// Creates application state around an existing processor.
    pub fn new(processor: RequestProcessor) -> Self {
        Self {
            processor: Arc::new(processor),
        }
    }

    /// Creates application state with an empty directory for `policy`.
    pub fn from_policy(policy: LeavePolicy) -> Self {
        Self::new(RequestProcessor::new(policy))
    }

    /// Returns the request processor.
    pub fn processor(&self) -> &RequestProcessor {
        &self.processor
    }
}

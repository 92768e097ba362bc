//! Core data models for the Leave Engine.
//!
//! This module contains the domain values shared by the ledger, the request
//! processor and the HTTP layer.

mod date_range;
mod leave_category;
mod leave_record;

pub use date_range::{DateRange, Days};
pub use leave_category::{Balances, LeaveCategory};
pub use leave_record::LeaveRecord;

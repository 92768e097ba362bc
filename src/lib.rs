//! Leave Engine
//!
//! This crate tracks employee leave balances and approves or rejects leave
//! requests. A request is approved only if the employee has enough days left
//! in the requested category and none of the requested days is already
//! booked under any category. Approval debits the balance and appends an
//! immutable record to the employee's history in one atomic step.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod processor;

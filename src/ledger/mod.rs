//! Leave state: per-employee ledgers and the directory that owns them.

mod directory;
mod leave_ledger;

pub use directory::EmployeeDirectory;
pub use leave_ledger::LeaveLedger;

//! Activity log for pocket-budget
//!
//! Every mutation (expense added or removed, budget set or cleared, balance
//! set or deposited) is appended to `audit.log` as one JSON line. The log is
//! read back by `pocket activity`.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;

//! R8 Core - framework-independent helpers for business applications
//!
//! - Audit trail support: field-level change sets and audit records
//! - Phone number grouping into consecutive runs with compact labels
//! - Currency and digit humanization for Persian-language front ends
//! - Canonical error and logging facilities shared by the CLI
//!
//! Everything here is a pure, synchronous transformation over plain data.

pub mod audit;
pub mod config;
pub mod errors;
pub mod humanize;
pub mod logging_facility;

#[doc(hidden)]
pub use r8_core_types as core_types;

// Re-export commonly used types
pub use audit::{
    diff_fields, find_changes, generate_audit, AuditContext, AuditFlag, AuditRecord, ChangeSet,
    EntrySnapshot, EntryState,
};
pub use config::R8Config;
pub use errors::{ExError, ExErrorKind, R8Error, Result};
pub use humanize::{group_phone_numbers, PhoneGroup, PhoneGroups};

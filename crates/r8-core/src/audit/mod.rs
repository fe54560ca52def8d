//! Audit trail support
//!
//! [`changes`] computes which fields of a record actually changed between
//! two snapshots; [`record`] wraps that change set with actor, origin and
//! call-site data into an [`AuditRecord`]. Storage is the caller's concern.

pub mod changes;
pub mod record;

pub use changes::{
    diff_fields, find_changes, ChangeSet, EntrySnapshot, EntryState, FieldChange, FieldValues,
};
pub use record::{
    generate_audit, record_audit, AuditContext, AuditFlag, AuditRecord, AuditTrail, CallSite,
};

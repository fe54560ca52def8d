//! Audit record generation.
//!
//! An [`AuditRecord`] is the change set of one entry plus who made the
//! change, from where and through which code path. Records are appended
//! to the entity's [`AuditTrail`]; persisting the trail is up to the
//! caller.

use crate::audit::changes::{find_changes, EntrySnapshot, FieldValues};
use crate::errors::{R8Error, Result};
use crate::{log_op_end, log_op_error, log_op_start};
use chrono::{DateTime, Utc};
use r8_core_types::{RequestId, Sensitive};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::net::IpAddr;
use std::panic::Location;
use std::time::Instant;
use uuid::Uuid;

/// What happened to the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditFlag {
    Created,
    Changed,
    Deleted,
    UnDeleted,
}

/// Source location that triggered the change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallSite {
    pub function: Option<String>,
    pub file: Option<String>,
    pub line: u32,
}

impl CallSite {
    /// Location of the caller of this function.
    #[track_caller]
    pub fn here() -> Self {
        let location = Location::caller();
        Self {
            function: None,
            file: Some(location.file().to_string()),
            line: location.line(),
        }
    }

    pub fn with_function(mut self, function: impl Into<String>) -> Self {
        self.function = Some(function.into());
        self
    }

    /// `"{file}::{line}"`, with an empty file when unknown.
    pub fn location(&self) -> String {
        format!("{}::{}", self.file.as_deref().unwrap_or_default(), self.line)
    }
}

/// Who, from where, and through which code path.
#[derive(Debug, Clone, Default)]
pub struct AuditContext {
    user_id: Option<Uuid>,
    ip_address: Option<IpAddr>,
    user_agent: Option<String>,
    call_site: Option<CallSite>,
    request_id: Option<RequestId>,
}

impl AuditContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_id(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_ip_address(mut self, ip_address: IpAddr) -> Self {
        self.ip_address = Some(ip_address);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_call_site(mut self, call_site: CallSite) -> Self {
        self.call_site = Some(call_site);
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }
}

/// One entry of an entity's audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id: Uuid,
    pub row_id: String,
    pub flag: AuditFlag,
    pub user_id: Option<Uuid>,
    pub ip_address: Option<IpAddr>,
    pub user_agent: Option<Sensitive<String>>,
    pub caller: Option<String>,
    pub caller_location: String,
    pub request_id: Option<RequestId>,
    pub created_at: DateTime<Utc>,
    pub old_values: FieldValues,
    pub new_values: FieldValues,
}

impl AuditRecord {
    pub fn has_changes(&self) -> bool {
        !self.old_values.is_empty()
    }
}

/// Ordered audit records of one entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditTrail(Vec<AuditRecord>);

impl AuditTrail {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: AuditRecord) {
        self.0.push(record);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AuditRecord> {
        self.0.iter()
    }

    /// Most recently appended record.
    pub fn latest(&self) -> Option<&AuditRecord> {
        self.0.last()
    }
}

/// Build an audit record for `entry`.
///
/// Field changes come from [`find_changes`], so entries that are neither
/// modified nor added produce a record without values (e.g. a delete).
///
/// # Errors
///
/// `MissingRowReference` when the entry has an empty row id.
pub fn generate_audit(
    entry: &EntrySnapshot,
    flag: AuditFlag,
    context: &AuditContext,
    excluded: &BTreeSet<String>,
) -> Result<AuditRecord> {
    log_op_start!("generate_audit", row_id = entry.row_id());
    let start = Instant::now();

    let record = generate_audit_impl(entry, flag, context, excluded).map_err(|e| {
        log_op_error!(
            "generate_audit",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "generate_audit",
        duration_ms = start.elapsed().as_millis() as u64,
        row_id = entry.row_id(),
        change_count = record.old_values.len() as u64
    );

    Ok(record)
}

fn generate_audit_impl(
    entry: &EntrySnapshot,
    flag: AuditFlag,
    context: &AuditContext,
    excluded: &BTreeSet<String>,
) -> Result<AuditRecord> {
    if entry.row_id().is_empty() {
        return Err(R8Error::MissingRowReference);
    }

    let (old_values, new_values) = find_changes(entry, excluded).into_parts();
    let call_site = context.call_site.clone().unwrap_or_default();

    Ok(AuditRecord {
        id: Uuid::now_v7(),
        row_id: entry.row_id().to_string(),
        flag,
        user_id: context.user_id,
        ip_address: context.ip_address,
        user_agent: context.user_agent.clone().map(Sensitive::new),
        caller_location: call_site.location(),
        caller: call_site.function,
        request_id: context.request_id.clone(),
        created_at: Utc::now(),
        old_values,
        new_values,
    })
}

/// Generate a record and append it to the entity's trail, creating the
/// trail on first use.
///
/// # Errors
///
/// Same as [`generate_audit`]; the trail is left untouched on error.
pub fn record_audit<'t>(
    trail: &'t mut Option<AuditTrail>,
    entry: &EntrySnapshot,
    flag: AuditFlag,
    context: &AuditContext,
    excluded: &BTreeSet<String>,
) -> Result<&'t AuditRecord> {
    let record = generate_audit(entry, flag, context, excluded)?;
    let trail = trail.get_or_insert_with(AuditTrail::new);
    trail.push(record);
    trail.latest().ok_or_else(|| R8Error::Internal {
        message: "audit trail empty after push".to_string(),
    })
}

//! Audit command
//!
//! Usage: r8 audit --current <FILE> --original <FILE> --row-id <ID> [options]

use clap::{Args, ValueEnum};
use r8_core::audit::{generate_audit, AuditContext, AuditFlag, CallSite, EntrySnapshot, EntryState};
use r8_core::errors::ExError;
use r8_core::R8Config;
use r8_core_types::RequestId;
use std::net::IpAddr;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FlagArg {
    Created,
    Changed,
    Deleted,
    Undeleted,
}

impl From<FlagArg> for AuditFlag {
    fn from(flag: FlagArg) -> Self {
        match flag {
            FlagArg::Created => AuditFlag::Created,
            FlagArg::Changed => AuditFlag::Changed,
            FlagArg::Deleted => AuditFlag::Deleted,
            FlagArg::Undeleted => AuditFlag::UnDeleted,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StateArg {
    Detached,
    Unchanged,
    Deleted,
    Modified,
    Added,
}

impl From<StateArg> for EntryState {
    fn from(state: StateArg) -> Self {
        match state {
            StateArg::Detached => EntryState::Detached,
            StateArg::Unchanged => EntryState::Unchanged,
            StateArg::Deleted => EntryState::Deleted,
            StateArg::Modified => EntryState::Modified,
            StateArg::Added => EntryState::Added,
        }
    }
}

#[derive(Debug, Args)]
pub struct AuditArgs {
    /// JSON object with the current values
    #[arg(long)]
    pub current: PathBuf,

    /// JSON object with the original values
    #[arg(long)]
    pub original: PathBuf,

    /// Key of the audited row
    #[arg(long)]
    pub row_id: String,

    #[arg(long, value_enum, default_value = "changed")]
    pub flag: FlagArg,

    /// Tracking state of the row
    #[arg(long, value_enum, default_value = "modified")]
    pub state: StateArg,

    #[arg(long)]
    pub user_id: Option<Uuid>,

    #[arg(long)]
    pub ip: Option<IpAddr>,

    #[arg(long)]
    pub user_agent: Option<String>,

    /// Correlation id (default: a fresh UUIDv7)
    #[arg(long)]
    pub request_id: Option<String>,
}

/// Execute audit command
pub fn execute(args: AuditArgs, config: &R8Config) -> Result<(), Box<dyn std::error::Error>> {
    let current = super::read_values(&args.current)?;
    let original = super::read_values(&args.original)?;
    let entry = EntrySnapshot::from_values(args.row_id, args.state.into(), current, original);

    let request_id = args
        .request_id
        .map(RequestId::from_string)
        .unwrap_or_default();

    let mut context = AuditContext::new()
        .with_request_id(request_id.clone())
        .with_call_site(CallSite::here().with_function("r8 audit"));
    if let Some(user_id) = args.user_id {
        context = context.with_user_id(user_id);
    }
    if let Some(ip) = args.ip {
        context = context.with_ip_address(ip);
    }
    if let Some(user_agent) = args.user_agent {
        context = context.with_user_agent(user_agent);
    }

    let record = generate_audit(
        &entry,
        args.flag.into(),
        &context,
        &config.audit.excluded_set(),
    )
    .map_err(|e| ExError::from(e).with_request_id(request_id))?;

    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

//! Core types shared across the R8 facilities
//!
//! This crate provides foundational types used by the error, logging and
//! audit facilities:
//!
//! - **Correlation**: `RequestId` tying an audit record to the request that caused it
//! - **Sensitive data**: `Sensitive<T>` marker for redaction in logs
//! - **Schema constants**: canonical log field keys and event names

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::RequestId;
pub use sensitive::Sensitive;

//! Request correlation
//!
//! A `RequestId` is carried from the caller's request into audit records
//! and error context so the three can be joined later.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of the request or unit of work that produced a change
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a fresh, time-ordered id (UUIDv7)
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Adopt an id issued upstream (e.g. an `X-Request-Id` header value)
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_unique() {
        let a = RequestId::new();
        let b = RequestId::new();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_upstream_id_is_kept_verbatim() {
        let id = RequestId::from_string("req-42");
        assert_eq!(id.to_string(), "req-42");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = RequestId::from_string("req-7");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"req-7\"");
        let back: RequestId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}

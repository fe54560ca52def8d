//! Sensitive data marker
//!
//! `Sensitive<T>` keeps a value out of log lines and panic messages.
//! Serialization is transparent: an audit record written to storage still
//! carries the real value, only `Debug`/`Display` output is redacted.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Wrapper that redacts itself in `Debug` and `Display`
///
/// # Example
///
/// ```
/// use r8_core_types::Sensitive;
///
/// let agent = Sensitive::new("Mozilla/5.0 (X11; Linux x86_64)");
/// assert_eq!(format!("{:?}", agent), "***REDACTED***");
/// assert_eq!(agent.expose(), &"Mozilla/5.0 (X11; Linux x86_64)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the wrapped value
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***REDACTED***")
    }
}

impl<T: Serialize> Serialize for Sensitive<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Sensitive<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Sensitive)
    }
}

//! TOML configuration.
//!
//! ```toml
//! [audit]
//! excluded_fields = ["Id", "Audits", "RowVersion"]
//!
//! [currency]
//! thousand = "هزار"
//! separator = " و "
//! ```
//!
//! Every section and key is optional.

use crate::errors::{R8Error, Result};
use crate::humanize::currency::CurrencyUnits;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Fields never tracked in audit change sets: the key, the audit
/// collection itself and the concurrency token.
pub const DEFAULT_EXCLUDED_FIELDS: [&str; 3] = ["Id", "Audits", "RowVersion"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct R8Config {
    pub audit: AuditConfig,
    pub currency: CurrencyUnits,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuditConfig {
    pub excluded_fields: Vec<String>,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            excluded_fields: DEFAULT_EXCLUDED_FIELDS.iter().map(|f| f.to_string()).collect(),
        }
    }
}

impl AuditConfig {
    pub fn excluded_set(&self) -> BTreeSet<String> {
        self.excluded_fields.iter().cloned().collect()
    }
}

impl R8Config {
    /// Parse a TOML document.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` on malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: R8Config = toml::from_str(text)?;
        tracing::debug!(
            excluded_fields = config.audit.excluded_fields.len() as u64,
            "configuration parsed"
        );
        Ok(config)
    }

    /// Read and parse a TOML file.
    ///
    /// # Errors
    ///
    /// `Io` when the file cannot be read, `InvalidConfig` when it does not
    /// parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| R8Error::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }
}

pub mod audit;
pub mod currency;
pub mod diff;
pub mod digits;
pub mod phones;

use r8_core::audit::FieldValues;
use r8_core::errors::{ExError, R8Error};
use std::path::Path;

/// Read a JSON object from disk, keeping its key order.
pub fn read_values(path: &Path) -> Result<FieldValues, ExError> {
    let text = std::fs::read_to_string(path).map_err(|e| R8Error::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let values = serde_json::from_str(&text).map_err(R8Error::from)?;
    Ok(values)
}

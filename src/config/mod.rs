//! Configuration for form export and import.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FormError, Result};

/// Configuration for the form exporter and importer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Fail on columns whose type has no field kind instead of emitting them
    /// without one
    pub strict_field_kinds: bool,
    /// Fail on submitted keys that are not eligible columns instead of
    /// ignoring them
    pub reject_unknown_columns: bool,
}

impl FormConfig {
    /// Both strictness switches on
    #[must_use]
    pub fn strict() -> Self {
        Self {
            strict_field_kinds: true,
            reject_unknown_columns: true,
        }
    }

    /// Parse a configuration from JSON; missing keys take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(FormError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            FormError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json_str(&content)
    }
}

//! Error boundary configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::classification::ErrorClassification;

/// Adjustments to the built-in classification-to-status table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorMappingConfig {
    /// Status for unclassified and unmapped errors.
    #[serde(default = "default_status")]
    pub default_status: u16,
    /// Per-classification status overrides, keyed by snake_case name.
    #[serde(default)]
    pub overrides: HashMap<ErrorClassification, u16>,
}

impl Default for ErrorMappingConfig {
    fn default() -> Self {
        Self {
            default_status: default_status(),
            overrides: HashMap::new(),
        }
    }
}

fn default_status() -> u16 {
    500
}

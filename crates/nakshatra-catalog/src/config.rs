//! Catalog validation configuration

use serde::{Deserialize, Serialize};

/// Configuration for catalog validation rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reject repeated question or entity ids
    pub validate_duplicates: bool,

    /// Reject weights that are not finite and strictly positive
    pub validate_weights: bool,

    /// Warn when an axis has no questions
    pub require_axis_coverage: bool,

    /// Warn when an axis has no reverse-scored question
    pub require_reverse_items: bool,

    /// Treat every warning as a rejection
    pub warnings_as_errors: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            validate_duplicates: true,
            validate_weights: true,
            require_axis_coverage: true,
            require_reverse_items: true,
            warnings_as_errors: false,
        }
    }
}

impl ValidationConfig {
    /// Create a permissive configuration (structural checks only)
    pub fn permissive() -> Self {
        Self {
            require_axis_coverage: false,
            require_reverse_items: false,
            ..Self::default()
        }
    }

    /// Create a strict configuration (warnings reject the catalog)
    pub fn strict() -> Self {
        Self {
            warnings_as_errors: true,
            ..Self::default()
        }
    }

    /// Look up a preset by name: `default`, `permissive` or `strict`
    pub fn preset(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "default" => Some(Self::default()),
            "permissive" => Some(Self::permissive()),
            "strict" => Some(Self::strict()),
            _ => None,
        }
    }
}

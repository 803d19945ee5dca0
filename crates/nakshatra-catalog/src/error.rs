//! Catalog error types

use std::path::PathBuf;

use nakshatra_domain::DomainError;
use thiserror::Error;

use crate::validator::RejectionReason;

/// Errors that can occur while loading or validating a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to read a catalog file
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("Failed to parse catalog TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to parse JSON
    #[error("Failed to parse catalog JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// File extension is neither `.toml` nor `.json`
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    /// A record could not be turned into a domain value
    #[error("Invalid record '{id}': {reason}")]
    InvalidRecord {
        /// Record identifier as written in the file
        id: String,
        /// What is wrong with it
        reason: String,
    },

    /// Domain rule violated while converting a record
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Validator refused the catalog
    #[error("Catalog rejected: {}", format_reasons(.0))]
    Rejected(Vec<RejectionReason>),
}

fn format_reasons(reasons: &[RejectionReason]) -> String {
    reasons
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

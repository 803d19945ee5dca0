//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use nakshatra_catalog::loader::{load_entities, load_questions};
use nakshatra_catalog::{Catalog, ValidationConfig};
use nakshatra_domain::EntityKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Catalog file overrides
    #[serde(default)]
    pub catalog: CatalogPaths,

    /// Catalog validation rules
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Where the in-progress quiz is saved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_path: Option<PathBuf>,

    /// Message bundle layered over the built-in English text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<PathBuf>,
}

/// Files replacing the built-in catalogs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogPaths {
    /// Question catalog (`.toml` or `.json`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<PathBuf>,

    /// Party catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parties: Option<PathBuf>,

    /// Leader catalog
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaders: Option<PathBuf>,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Config {
    /// Directory holding config and session files.
    pub fn dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".nakshatra"))
    }

    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("config.toml"))
    }

    /// Load configuration from a file; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            let config: Config = toml::from_str(&contents)?;
            debug!(path = %path.display(), "loaded configuration");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Path of the saved quiz session.
    pub fn session_path(&self) -> Result<PathBuf> {
        match &self.settings.session_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::dir()?.join("session.json")),
        }
    }

    /// Built-in catalogs with configured overrides, validated.
    pub fn catalog(&self) -> Result<Catalog> {
        let mut catalog = Catalog::builtin()?;

        if let Some(path) = &self.catalog.questions {
            catalog = catalog.with_questions(load_questions(path)?);
        }
        if let Some(path) = &self.catalog.parties {
            catalog = catalog.with_parties(load_entities(path, Some(EntityKind::Party))?);
        }
        if let Some(path) = &self.catalog.leaders {
            catalog = catalog.with_leaders(load_entities(path, Some(EntityKind::Leader))?);
        }

        Ok(catalog.validated(&self.validation)?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            session_path: None,
            messages: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

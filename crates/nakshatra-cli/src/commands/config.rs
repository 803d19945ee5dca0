//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::{Config, OutputFormat};
use crate::error::{CliError, Result};
use crate::output::Formatter;
use nakshatra_catalog::ValidationConfig;
use std::path::Path;

/// Execute the config command against the file at `path`.
pub fn execute_config(
    args: ConfigArgs,
    config: &mut Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => show_config(config, formatter),
        ConfigAction::Init { force } => init_config(path, force, formatter),
        ConfigAction::Validation { preset } => set_validation(config, path, &preset, formatter),
    }
}

fn show_config(config: &Config, formatter: &Formatter) -> Result<()> {
    let rendered = match formatter.format() {
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
        _ => toml::to_string_pretty(config)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?,
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

fn init_config(path: &Path, force: bool, formatter: &Formatter) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }

    Config::default().save_to(path)?;
    println!(
        "{}",
        formatter.success(&format!("Wrote {}", path.display()))
    );
    Ok(())
}

fn set_validation(
    config: &mut Config,
    path: &Path,
    preset: &str,
    formatter: &Formatter,
) -> Result<()> {
    let validation = ValidationConfig::preset(preset).ok_or_else(|| {
        CliError::InvalidInput(format!(
            "Unknown validation preset '{}' (expected default, permissive or strict)",
            preset
        ))
    })?;

    config.validation = validation;
    config.save_to(path)?;
    println!(
        "{}",
        formatter.success(&format!("Validation preset set to '{}'", preset))
    );
    Ok(())
}

//! Parsing of user-supplied positions and answer files.

use crate::cli::PositionArgs;
use crate::error::{CliError, Result};
use nakshatra_catalog::Catalog;
use nakshatra_domain::{scoring, Position, ResponseSet};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parse "statism,recognition,sid".
pub fn parse_position(text: &str) -> Result<Position> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(CliError::InvalidInput(format!(
            "Expected three comma-separated coordinates, got '{}'",
            text
        )));
    }

    let mut values = [0.0; 3];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .map_err(|_| CliError::InvalidInput(format!("'{}' is not a number", part)))?;
    }

    Ok(Position::from_components(values)?)
}

/// Read an answers file: a TOML or JSON map of question id to 1-5.
pub fn load_answers(path: &Path) -> Result<ResponseSet> {
    let contents = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let raw: BTreeMap<String, i64> = if is_json {
        serde_json::from_str(&contents)?
    } else {
        toml::from_str(&contents)?
    };

    debug!(path = %path.display(), answers = raw.len(), "read answers file");
    Ok(ResponseSet::from_raw(raw)?)
}

/// Resolve whichever position source the user gave.
pub fn resolve_position(args: &PositionArgs, catalog: &Catalog) -> Result<Position> {
    if let Some(text) = &args.position {
        return parse_position(text);
    }
    if let Some(token) = &args.token {
        return Ok(nakshatra_share::decode(token)?);
    }
    if let Some(path) = &args.answers {
        let responses = load_answers(path)?;
        return Ok(scoring::score_all(&responses, catalog.questions()));
    }

    Err(CliError::InvalidInput(
        "One of --position, --token or --answers is required".to_string(),
    ))
}

//! Catalog file loading
//!
//! Files are TOML or JSON, chosen by extension. Loading converts records to
//! domain values; validation is a separate step (see [`crate::Catalog`]).

use std::path::Path;

use nakshatra_domain::{Entity, EntityKind, Question};
use tracing::{debug, info};

use crate::records::{entity_from_record, question_from_record, resolve_kind, EntityFile, QuestionFile};
use crate::CatalogError;

/// Serialization format of a catalog file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `.toml`
    Toml,
    /// `.json`
    Json,
}

impl Format {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Format::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Format::Json),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

fn read(path: &Path) -> Result<String, CatalogError> {
    std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a question catalog from text
pub fn parse_questions(contents: &str, format: Format) -> Result<Vec<Question>, CatalogError> {
    let file: QuestionFile = match format {
        Format::Toml => toml::from_str(contents)?,
        Format::Json => serde_json::from_str(contents)?,
    };

    debug!(version = ?file.version, count = file.questions.len(), "parsed question records");
    file.questions.into_iter().map(question_from_record).collect()
}

/// Parse a party or leader catalog from text
///
/// `kind` overrides the kind declared in the file.
pub fn parse_entities(
    contents: &str,
    format: Format,
    kind: Option<EntityKind>,
) -> Result<Vec<Entity>, CatalogError> {
    let file: EntityFile = match format {
        Format::Toml => toml::from_str(contents)?,
        Format::Json => serde_json::from_str(contents)?,
    };

    let kind = resolve_kind(&file, kind)?;
    let scale = file.scale;
    debug!(kind = kind.as_str(), scale, count = file.entities.len(), "parsed entity records");

    file.entities
        .into_iter()
        .map(|record| entity_from_record(record, kind, scale))
        .collect()
}

/// Load a question catalog from a `.toml` or `.json` file
pub fn load_questions<P: AsRef<Path>>(path: P) -> Result<Vec<Question>, CatalogError> {
    let path = path.as_ref();
    let questions = parse_questions(&read(path)?, Format::from_path(path)?)?;
    info!(path = %path.display(), count = questions.len(), "loaded question catalog");
    Ok(questions)
}

/// Load a party or leader catalog from a `.toml` or `.json` file
pub fn load_entities<P: AsRef<Path>>(
    path: P,
    kind: Option<EntityKind>,
) -> Result<Vec<Entity>, CatalogError> {
    let path = path.as_ref();
    let entities = parse_entities(&read(path)?, Format::from_path(path)?, kind)?;
    info!(path = %path.display(), count = entities.len(), "loaded entity catalog");
    Ok(entities)
}

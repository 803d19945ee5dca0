//! On-disk record types and their conversion to domain values
//!
//! Catalog files deserialize into these records; the conversion functions
//! are the only place where authored scales are mapped onto [-1, +1].

use std::collections::BTreeMap;

use nakshatra_domain::{AttributeValue, Axis, Entity, EntityKind, Position, Question, QuestionId};
use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// Question ids may be written as strings (`"ST_01"`) or bare numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Textual id
    Text(String),
    /// Numeric id, kept as its decimal string
    Number(u32),
}

impl From<RecordId> for QuestionId {
    fn from(id: RecordId) -> Self {
        match id {
            RecordId::Text(s) => QuestionId::new(s),
            RecordId::Number(n) => QuestionId::from(n),
        }
    }
}

/// A question catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionFile {
    /// Authoring version, informational only
    #[serde(default)]
    pub version: Option<u32>,

    /// Questions in presentation order
    pub questions: Vec<QuestionRecord>,
}

/// A single question as authored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Question id
    pub id: RecordId,

    /// Axis name (`statism`, `recognition`, `sid`)
    pub axis: String,

    /// Whether agreement moves towards the negative pole
    #[serde(default)]
    pub reverse: bool,

    /// Positive weight (default 1.0)
    #[serde(default = "default_weight")]
    pub weight: f64,

    /// Optional grouping label
    #[serde(default)]
    pub category: Option<String>,

    /// Statement shown to the respondent
    #[serde(default)]
    pub text: Option<String>,
}

fn default_weight() -> f64 {
    1.0
}

/// A party or leader catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityFile {
    /// `party` or `leader`; callers may override
    #[serde(default)]
    pub kind: Option<String>,

    /// Authored coordinate range is `[-scale, +scale]`
    #[serde(default = "default_scale")]
    pub scale: f64,

    /// Entities in catalog order
    pub entities: Vec<EntityRecord>,
}

fn default_scale() -> f64 {
    1.0
}

/// A single entity as authored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Stable id
    pub id: String,

    /// Full name
    pub name: String,

    /// Abbreviation
    #[serde(default, alias = "abbreviation")]
    pub short_name: Option<String>,

    /// Display colour
    #[serde(default)]
    pub color: Option<String>,

    /// Coordinates on the file's scale
    pub position: PositionRecord,

    /// Opaque metadata
    #[serde(default)]
    pub attributes: BTreeMap<String, AttributeRecord>,
}

/// An attribute as authored: a string, a whole number or a list of strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeRecord {
    /// Plain text
    Text(String),
    /// Whole number such as a founding year, kept as text in memory
    Number(i64),
    /// Tags or policy lists
    List(Vec<String>),
}

impl From<AttributeRecord> for AttributeValue {
    fn from(record: AttributeRecord) -> Self {
        match record {
            AttributeRecord::Text(text) => AttributeValue::Text(text),
            AttributeRecord::Number(n) => AttributeValue::Text(n.to_string()),
            AttributeRecord::List(items) => AttributeValue::List(items),
        }
    }
}

/// Position as authored
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PositionRecord {
    /// Statism coordinate
    pub statism: f64,
    /// Recognition coordinate
    pub recognition: f64,
    /// SID coordinate
    pub sid: f64,
}

/// Convert a question record to a domain question
pub fn question_from_record(record: QuestionRecord) -> Result<Question, CatalogError> {
    let id = QuestionId::from(record.id);
    let axis: Axis = record.axis.parse().map_err(|_| CatalogError::InvalidRecord {
        id: id.to_string(),
        reason: format!("unknown axis '{}'", record.axis),
    })?;

    Ok(Question {
        id,
        axis,
        reverse: record.reverse,
        weight: record.weight,
        category: record.category,
        text: record.text,
    })
}

/// Convert a domain question back to its record form
pub fn question_to_record(question: &Question) -> QuestionRecord {
    QuestionRecord {
        id: RecordId::Text(question.id.to_string()),
        axis: question.axis.as_str().to_string(),
        reverse: question.reverse,
        weight: question.weight,
        category: question.category.clone(),
        text: question.text.clone(),
    }
}

/// Resolve the entity kind of a file, preferring an explicit override
pub fn resolve_kind(file: &EntityFile, kind: Option<EntityKind>) -> Result<EntityKind, CatalogError> {
    if let Some(kind) = kind {
        return Ok(kind);
    }
    let declared = file.kind.as_deref().unwrap_or("party");
    EntityKind::parse(declared).ok_or_else(|| CatalogError::InvalidRecord {
        id: "kind".to_string(),
        reason: format!("unknown entity kind '{}'", declared),
    })
}

/// Convert an entity record, dividing its coordinates by `scale`
pub fn entity_from_record(
    record: EntityRecord,
    kind: EntityKind,
    scale: f64,
) -> Result<Entity, CatalogError> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(CatalogError::InvalidRecord {
            id: record.id,
            reason: format!("scale must be positive, got {}", scale),
        });
    }

    let p = record.position;
    let position = Position::from_scaled(p.statism, p.recognition, p.sid, scale).map_err(|e| {
        CatalogError::InvalidRecord {
            id: record.id.clone(),
            reason: e.to_string(),
        }
    })?;

    Ok(Entity {
        id: record.id,
        kind,
        position,
        name: record.name,
        short_name: record.short_name,
        color: record.color,
        attributes: record
            .attributes
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect(),
    })
}

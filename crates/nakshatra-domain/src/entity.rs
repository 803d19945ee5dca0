//! Reference entities (parties and leaders)

use crate::traits::Positioned;
use crate::Position;
use std::collections::BTreeMap;

/// Kind of reference entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Political party
    Party,
    /// Individual political leader
    Leader,
}

impl EntityKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Party => "party",
            EntityKind::Leader => "leader",
        }
    }

    /// Parse a kind from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "party" | "parties" => Some(EntityKind::Party),
            "leader" | "leaders" => Some(EntityKind::Leader),
            _ => None,
        }
    }
}

/// One piece of opaque entity metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// Single string (role, region, founding year, ...)
    Text(String),
    /// Ordered list of strings (ideology tags, key policies, ...)
    List(Vec<String>),
}

impl AttributeValue {
    /// The string, when this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(text) => Some(text),
            AttributeValue::List(_) => None,
        }
    }

    /// The items, when this is a list value
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AttributeValue::Text(_) => None,
            AttributeValue::List(items) => Some(items),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(text: &str) -> Self {
        AttributeValue::Text(text.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(text: String) -> Self {
        AttributeValue::Text(text)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(items: Vec<String>) -> Self {
        AttributeValue::List(items)
    }
}

/// Catalog record compared against a user's position
///
/// Everything except `id` and `position` is display metadata that the
/// comparison engine never reads.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Unique identifier within its catalog
    pub id: String,
    /// Party or leader
    pub kind: EntityKind,
    /// Reference position, always canonical [-1, 1]
    pub position: Position,
    /// Display name
    pub name: String,
    /// Abbreviation (parties) or role (leaders)
    pub short_name: Option<String>,
    /// Display colour, e.g. `#FF9933`
    pub color: Option<String>,
    /// Further opaque attributes (party id, region, ideology tags, ...)
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl Entity {
    /// Create an entity with no optional metadata
    pub fn new(
        id: impl Into<String>,
        kind: EntityKind,
        name: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            position,
            name: name.into(),
            short_name: None,
            color: None,
            attributes: BTreeMap::new(),
        }
    }

    /// Look up a text attribute
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(AttributeValue::as_text)
    }

    /// Look up a list attribute; missing or text-valued keys give an empty slice
    pub fn attribute_list(&self, key: &str) -> &[String] {
        self.attributes
            .get(key)
            .and_then(AttributeValue::as_list)
            .unwrap_or_default()
    }

    /// Ideology tags, in authored order
    pub fn ideology(&self) -> &[String] {
        self.attribute_list("ideology")
    }

    /// Label for tables: the short name when present, otherwise the name
    pub fn display_name(&self) -> &str {
        self.short_name.as_deref().unwrap_or(&self.name)
    }
}

impl Positioned for Entity {
    fn position(&self) -> Position {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_metadata() {
        let mut party = Entity::new("bjp", EntityKind::Party, "Bharatiya Janata Party", Position::ORIGIN);
        party.short_name = Some("BJP".to_string());
        party.attributes.insert("founded".to_string(), "1980".into());
        party.attributes.insert(
            "ideology".to_string(),
            vec!["Hindu Nationalism".to_string(), "Economic Nationalism".to_string()].into(),
        );

        assert_eq!(party.display_name(), "BJP");
        assert_eq!(party.attribute("founded"), Some("1980"));
        assert_eq!(party.attribute("region"), None);
        assert_eq!(party.ideology(), ["Hindu Nationalism", "Economic Nationalism"]);
        // Kinds do not cross over
        assert_eq!(party.attribute("ideology"), None);
        assert!(party.attribute_list("founded").is_empty());
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(EntityKind::parse("Leaders"), Some(EntityKind::Leader));
        assert_eq!(EntityKind::parse("party"), Some(EntityKind::Party));
        assert_eq!(EntityKind::parse("mp"), None);
    }
}

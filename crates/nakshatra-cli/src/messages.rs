//! Message bundle resolving domain message keys to display text.

use crate::error::{CliError, Result};
use nakshatra_domain::traits::MessageCatalog;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use toml::Value;

/// English bundle shipped with the binary.
pub const ENGLISH: &str = include_str!("../locales/en.toml");

/// Flattened message bundle.
///
/// Nested TOML tables become dotted keys; string arrays become lists.
#[derive(Debug, Clone, Default)]
pub struct Messages {
    strings: HashMap<String, String>,
    lists: HashMap<String, Vec<String>>,
}

impl Messages {
    /// Parse a bundle from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(contents)?;
        let mut messages = Self::default();
        messages.flatten("", &table);
        Ok(messages)
    }

    /// The built-in English bundle.
    pub fn english() -> Result<Self> {
        Self::from_toml_str(ENGLISH)
    }

    /// English bundle with an optional override file layered on top.
    pub fn load(overlay: Option<&Path>) -> Result<Self> {
        let mut messages = Self::english()?;
        if let Some(path) = overlay {
            let contents = fs::read_to_string(path).map_err(|e| {
                CliError::Config(format!("Failed to read messages {}: {}", path.display(), e))
            })?;
            messages.extend(Self::from_toml_str(&contents)?);
        }
        Ok(messages)
    }

    /// Replace entries with those of `other`.
    pub fn extend(&mut self, other: Messages) {
        self.strings.extend(other.strings);
        self.lists.extend(other.lists);
    }

    /// Resolve a key and substitute `{target}`.
    pub fn resolve_with_target(&self, key: &str, target: &str) -> String {
        self.resolve(key).replace("{target}", target)
    }

    fn flatten(&mut self, prefix: &str, table: &toml::Table) {
        for (name, value) in table {
            let key = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{}.{}", prefix, name)
            };

            match value {
                Value::String(s) => {
                    self.strings.insert(key, s.clone());
                }
                Value::Array(items) => {
                    let list = items
                        .iter()
                        .filter_map(|item| item.as_str().map(str::to_string))
                        .collect();
                    self.lists.insert(key, list);
                }
                Value::Table(inner) => self.flatten(&key, inner),
                // Numbers and booleans carry no display text
                _ => {}
            }
        }
    }
}

impl MessageCatalog for Messages {
    fn message(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    fn message_list(&self, key: &str) -> Option<Vec<String>> {
        self.lists.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nakshatra_domain::comparison::{self, PoliticalLean};
    use nakshatra_domain::labeling::{self, axis_examples, DescriptionBucket};
    use nakshatra_domain::{Axis, Likert, Position};

    #[test]
    fn test_english_bundle_resolves_labels() {
        let messages = Messages::english().unwrap();

        let label = labeling::axis_label(0.7, Axis::Recognition);
        assert_eq!(label.render(&messages), "Very Pro-Recognition");

        let label = labeling::axis_label(0.0, Axis::Sid);
        assert_eq!(label.render(&messages), "Centrist on SID");

        assert_eq!(messages.resolve(Likert::AGREE.key().as_str()), "Agree");
    }

    #[test]
    fn test_every_description_and_example_key_exists() {
        let messages = Messages::english().unwrap();
        for axis in Axis::ALL {
            for bucket in [DescriptionBucket::High, DescriptionBucket::Low, DescriptionBucket::Neutral] {
                assert!(messages.message(&bucket.key(axis)).is_some());
            }
            for value in [0.9, 0.5, 0.0, -0.5, -0.9] {
                assert_eq!(axis_examples(value, axis).resolve(&messages).len(), 3);
            }
        }
    }

    #[test]
    fn test_lean_keys() {
        let messages = Messages::english().unwrap();
        let lean = comparison::political_lean(&Position::new(0.5, -0.5, 0.0).unwrap());
        let text: Vec<String> = lean.keys().iter().map(|k| messages.resolve(k)).collect();
        assert_eq!(text.join(" "), "Statist Majoritarian");
        assert_eq!(
            messages.resolve(PoliticalLean::CentristModerate.keys()[0]),
            "Centrist / Moderate"
        );
    }

    #[test]
    fn test_target_substitution() {
        let messages = Messages::english().unwrap();
        let key = comparison::comparative(0.8, 0.2).key(Axis::Statism);
        assert_eq!(
            messages.resolve_with_target(&key, "BJP"),
            "You favor more state intervention than BJP."
        );
    }

    #[test]
    fn test_overlay() {
        let mut messages = Messages::english().unwrap();
        messages.extend(Messages::from_toml_str("[labels.statism]\npositive = \"Statist\"").unwrap());
        assert_eq!(messages.resolve("labels.statism.positive"), "Statist");
        assert_eq!(messages.resolve("labels.statism.negative"), "Low Statism");
    }
}

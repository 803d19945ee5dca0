//! Question catalog entries

use crate::Axis;

/// Stable identifier of a catalog question
///
/// Catalogs may author ids as strings (`"ST_01"`) or integers (`7`);
/// integers are stored in their decimal string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(String);

impl QuestionId {
    /// Create a question id
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Get the id as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for QuestionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u32> for QuestionId {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable catalog question
///
/// `text` and `category` are display metadata; scoring only reads
/// `id`, `axis`, `reverse` and `weight`.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Unique identifier
    pub id: QuestionId,
    /// Axis this question measures
    pub axis: Axis,
    /// Agreement moves the score towards the negative pole
    pub reverse: bool,
    /// Positive weight applied to the signed response
    pub weight: f64,
    /// Grouping within the axis (e.g. "economic", "minority_rights")
    pub category: Option<String>,
    /// Statement shown to the respondent
    pub text: Option<String>,
}

impl Question {
    /// Create a question with weight 1.0 and no display metadata
    pub fn new(id: impl Into<QuestionId>, axis: Axis, reverse: bool) -> Self {
        Self {
            id: id.into(),
            axis,
            reverse,
            weight: 1.0,
            category: None,
            text: None,
        }
    }

    /// Set the weight
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the statement text
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

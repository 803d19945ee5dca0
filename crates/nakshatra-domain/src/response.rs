//! Likert responses and the response set

use crate::{DomainError, QuestionId};
use std::collections::BTreeMap;

/// Lowest Likert value (strongly disagree)
pub const LIKERT_MIN: u8 = 1;

/// Neutral Likert value
pub const LIKERT_NEUTRAL: u8 = 3;

/// Highest Likert value (strongly agree)
pub const LIKERT_MAX: u8 = 5;

/// A validated five-point Likert response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Likert(u8);

impl Likert {
    /// Strongly disagree
    pub const STRONGLY_DISAGREE: Likert = Likert(1);
    /// Disagree
    pub const DISAGREE: Likert = Likert(2);
    /// Neutral
    pub const NEUTRAL: Likert = Likert(3);
    /// Agree
    pub const AGREE: Likert = Likert(4);
    /// Strongly agree
    pub const STRONGLY_AGREE: Likert = Likert(5);

    /// All values from strongly disagree to strongly agree
    pub const ALL: [Likert; 5] = [
        Likert::STRONGLY_DISAGREE,
        Likert::DISAGREE,
        Likert::NEUTRAL,
        Likert::AGREE,
        Likert::STRONGLY_AGREE,
    ];

    /// Validate a raw response
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if (i64::from(LIKERT_MIN)..=i64::from(LIKERT_MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(DomainError::LikertOutOfRange(value))
        }
    }

    /// The raw 1..=5 value
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Signed score in [-2, +2]; neutral maps to 0
    pub fn to_score(&self) -> f64 {
        likert_to_score(self.0)
    }

    /// Message key for the option label (e.g. `likert.5`)
    pub fn key(&self) -> String {
        format!("likert.{}", self.0)
    }
}

impl TryFrom<i64> for Likert {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Likert::new(value)
    }
}

/// Convert a Likert value (1-5) to a signed score (-2 to +2)
pub fn likert_to_score(value: u8) -> f64 {
    f64::from(value) - f64::from(LIKERT_NEUTRAL)
}

/// Partial mapping from question id to Likert response
///
/// Ids are not checked against any catalog here: unknown ids are legal and
/// simply ignored by scoring. Values are validated on entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseSet {
    responses: BTreeMap<QuestionId, Likert>,
}

impl ResponseSet {
    /// Create an empty response set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw `(id, value)` pairs, failing on the first invalid value
    ///
    /// Intended for restoring untrusted input (saved sessions, answer files).
    /// A repeated id keeps the last value.
    pub fn from_raw<I, K>(pairs: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<QuestionId>,
    {
        let mut set = Self::new();
        for (id, value) in pairs {
            set.answer(id, value)?;
        }
        Ok(set)
    }

    /// Record a raw response, validating it first
    ///
    /// Returns the previous response for the question, if any.
    pub fn answer(
        &mut self,
        id: impl Into<QuestionId>,
        value: i64,
    ) -> Result<Option<Likert>, DomainError> {
        let id = id.into();
        let likert = Likert::new(value).map_err(|_| DomainError::InvalidLikert {
            question: id.to_string(),
            value,
        })?;
        Ok(self.responses.insert(id, likert))
    }

    /// Record an already validated response
    pub fn insert(&mut self, id: impl Into<QuestionId>, likert: Likert) -> Option<Likert> {
        self.responses.insert(id.into(), likert)
    }

    /// Response for a question
    pub fn get(&self, id: &QuestionId) -> Option<Likert> {
        self.responses.get(id).copied()
    }

    /// Whether the question has a response
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.responses.contains_key(id)
    }

    /// Remove a response
    pub fn remove(&mut self, id: &QuestionId) -> Option<Likert> {
        self.responses.remove(id)
    }

    /// Number of responses, including ids unknown to any catalog
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Whether no response has been recorded
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }

    /// Drop every response
    pub fn clear(&mut self) {
        self.responses.clear();
    }

    /// Iterate responses in id order
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, Likert)> {
        self.responses.iter().map(|(id, likert)| (id, *likert))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_likert_to_score() {
        assert_eq!(likert_to_score(1), -2.0);
        assert_eq!(likert_to_score(3), 0.0);
        assert_eq!(likert_to_score(5), 2.0);
    }

    #[test]
    fn test_likert_validation() {
        assert_eq!(Likert::new(0), Err(DomainError::LikertOutOfRange(0)));
        assert_eq!(Likert::new(6), Err(DomainError::LikertOutOfRange(6)));
        assert_eq!(Likert::new(4), Ok(Likert::AGREE));
        assert_eq!(Likert::try_from(1), Ok(Likert::STRONGLY_DISAGREE));
    }

    #[test]
    fn test_answer_rejects_invalid() {
        let mut set = ResponseSet::new();
        let err = set.answer("ST_01", 9).unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidLikert {
                question: "ST_01".to_string(),
                value: 9
            }
        );
        assert!(set.is_empty());
    }

    #[test]
    fn test_answer_overwrites() {
        let mut set = ResponseSet::new();
        assert_eq!(set.answer("ST_01", 2).unwrap(), None);
        assert_eq!(set.answer("ST_01", 5).unwrap(), Some(Likert::DISAGREE));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(&"ST_01".into()), Some(Likert::STRONGLY_AGREE));
    }

    #[test]
    fn test_from_raw_fails_fast() {
        let result = ResponseSet::from_raw(vec![("ST_01", 3), ("ST_02", -1)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_likert_key() {
        assert_eq!(Likert::NEUTRAL.key(), "likert.3");
    }
}

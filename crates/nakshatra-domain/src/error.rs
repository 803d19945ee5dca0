//! Domain error types

use crate::Axis;
use thiserror::Error;

/// Errors raised when caller input fails validation
///
/// Nothing in the domain layer performs I/O, so every error here is a
/// synchronous rejection of malformed input; none are retryable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A raw Likert value outside [1, 5]
    #[error("Likert value {0} out of range (expected 1-5)")]
    LikertOutOfRange(i64),

    /// A response outside [1, 5], labelled with its question
    #[error("Invalid Likert response {value} for question '{question}' (expected 1-5)")]
    InvalidLikert {
        /// Question the response was given for
        question: String,
        /// The rejected raw value
        value: i64,
    },

    /// A position component that is non-finite or outside [-1, 1]
    #[error("Invalid position: {axis} = {value} is not a finite number in [-1, 1]")]
    InvalidPosition {
        /// Offending axis
        axis: Axis,
        /// The rejected component
        value: f64,
    },

    /// A string that does not name any axis
    #[error("Unknown axis: {0}")]
    UnknownAxis(String),

    /// Results requested before every catalog question was answered
    #[error("Quiz not complete: {answered} of {total} questions answered")]
    IncompleteResponses {
        /// Catalog questions with a response
        answered: usize,
        /// Catalog size
        total: usize,
    },

    /// Navigation to a question index outside the catalog
    #[error("Question index {index} out of range (catalog has {total} questions)")]
    QuestionOutOfRange {
        /// Requested index
        index: usize,
        /// Catalog size
        total: usize,
    },
}

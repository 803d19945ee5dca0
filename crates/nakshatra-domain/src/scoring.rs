//! Scoring engine
//!
//! Converts a response set into a canonical [`Position`]:
//! 1. Each answered question contributes `(likert - 3)`, negated when reverse-scored
//! 2. Contributions are weighted and summed per axis
//! 3. The sum is min-max normalized against the bounds of the *answered* questions
//!    only, then mapped onto [-1, +1]
//!
//! Unanswered questions contribute to neither the raw score nor the bounds, and
//! response ids unknown to the catalog are ignored.

use crate::{Axis, Position, Question, ResponseSet};

/// Largest absolute signed score of a single response (Likert 5 - 3)
pub const MAX_SIGNED_SCORE: f64 = 2.0;

/// Running totals for one axis
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisTally {
    /// Weighted sum of signed responses
    pub raw_score: f64,
    /// Lowest achievable weighted sum over the answered questions
    pub min_possible: f64,
    /// Highest achievable weighted sum over the answered questions
    pub max_possible: f64,
    /// Number of questions that contributed
    pub answered: usize,
}

impl AxisTally {
    /// Map the raw score onto [-1, +1]; exactly 0 when nothing was answered
    pub fn normalized(&self) -> f64 {
        let range = self.max_possible - self.min_possible;
        if range == 0.0 {
            return 0.0;
        }

        let normalized = (self.raw_score - self.min_possible) / range;
        normalized * 2.0 - 1.0
    }
}

/// Accumulate the weighted raw score and bounds for one axis
pub fn tally_axis(responses: &ResponseSet, axis: Axis, questions: &[Question]) -> AxisTally {
    let mut tally = AxisTally::default();

    for question in questions.iter().filter(|q| q.axis == axis) {
        let Some(likert) = responses.get(&question.id) else {
            continue; // Unanswered: skip numerator and denominator
        };

        let mut value = likert.to_score();
        if question.reverse {
            value = -value;
        }

        tally.raw_score += value * question.weight;
        tally.min_possible += -MAX_SIGNED_SCORE * question.weight;
        tally.max_possible += MAX_SIGNED_SCORE * question.weight;
        tally.answered += 1;
    }

    tally
}

/// Normalized score for one axis in [-1, +1]
pub fn score_axis(responses: &ResponseSet, axis: Axis, questions: &[Question]) -> f64 {
    tally_axis(responses, axis, questions).normalized()
}

/// Score every axis; an empty response set yields [`Position::ORIGIN`]
pub fn score_all(responses: &ResponseSet, questions: &[Question]) -> Position {
    Position::from_scores(
        score_axis(responses, Axis::Statism, questions),
        score_axis(responses, Axis::Recognition, questions),
        score_axis(responses, Axis::Sid, questions),
    )
}

/// Number of catalog questions that have a response
pub fn answered_count(responses: &ResponseSet, questions: &[Question]) -> usize {
    questions
        .iter()
        .filter(|q| responses.contains(&q.id))
        .count()
}

/// Whether every catalog question has been answered
///
/// Compares the answered catalog-question count with the catalog length, so
/// stray ids that belong to no question cannot make a set look complete.
pub fn is_complete(responses: &ResponseSet, questions: &[Question]) -> bool {
    answered_count(responses, questions) == questions.len()
}

/// Share of the catalog answered, rounded to a whole percentage
pub fn completion_percent(responses: &ResponseSet, questions: &[Question]) -> u8 {
    if questions.is_empty() {
        return 0;
    }
    let ratio = answered_count(responses, questions) as f64 / questions.len() as f64;
    (ratio * 100.0).round() as u8
}

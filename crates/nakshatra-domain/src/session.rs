//! Caller-owned quiz state
//!
//! Holds the accumulating response set, the question cursor and the last
//! computed position. The session borrows the question catalog; persistence
//! is left to the caller (see nakshatra-share for snapshots).

use crate::scoring::{answered_count, is_complete, score_all};
use crate::{DomainError, Likert, Position, Question, QuestionId, ResponseSet};

/// Progress through the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 1-based number of the current question
    pub current: usize,
    /// Catalog size
    pub total: usize,
    /// `current / total` as a whole percentage
    pub percentage: u8,
    /// Catalog questions with a response
    pub answered: usize,
}

/// Quiz state for one respondent
#[derive(Debug, Clone)]
pub struct QuizSession<'c> {
    questions: &'c [Question],
    responses: ResponseSet,
    current_index: usize,
    result: Option<Position>,
}

impl<'c> QuizSession<'c> {
    /// Start an empty session over a question catalog
    pub fn new(questions: &'c [Question]) -> Self {
        Self {
            questions,
            responses: ResponseSet::new(),
            current_index: 0,
            result: None,
        }
    }

    /// Rebuild a session from previously saved parts
    ///
    /// # Errors
    /// Fails when the cursor is outside the catalog.
    pub fn restore(
        questions: &'c [Question],
        responses: ResponseSet,
        current_index: usize,
        result: Option<Position>,
    ) -> Result<Self, DomainError> {
        if current_index >= questions.len().max(1) {
            return Err(DomainError::QuestionOutOfRange {
                index: current_index,
                total: questions.len(),
            });
        }

        Ok(Self {
            questions,
            responses,
            current_index,
            result,
        })
    }

    /// The catalog this session runs over
    pub fn questions(&self) -> &'c [Question] {
        self.questions
    }

    /// Responses recorded so far
    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    /// Zero-based index of the current question
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The question under the cursor
    pub fn current_question(&self) -> Option<&'c Question> {
        self.questions.get(self.current_index)
    }

    /// Record a response for any question
    ///
    /// Invalidates a previously computed result.
    pub fn answer(&mut self, id: impl Into<QuestionId>, value: i64) -> Result<Option<Likert>, DomainError> {
        let previous = self.responses.answer(id, value)?;
        self.result = None;
        Ok(previous)
    }

    /// Record a response for the current question
    pub fn answer_current(&mut self, value: i64) -> Result<Option<Likert>, DomainError> {
        let question = self.current_question().ok_or(DomainError::QuestionOutOfRange {
            index: self.current_index,
            total: self.questions.len(),
        })?;
        self.answer(question.id.clone(), value)
    }

    /// Response recorded for a question
    pub fn response_for(&self, id: &QuestionId) -> Option<Likert> {
        self.responses.get(id)
    }

    /// Move the cursor to a question
    pub fn go_to(&mut self, index: usize) -> Result<(), DomainError> {
        if index >= self.questions.len() {
            return Err(DomainError::QuestionOutOfRange {
                index,
                total: self.questions.len(),
            });
        }
        self.current_index = index;
        Ok(())
    }

    /// Advance the cursor; returns false on the last question
    pub fn next(&mut self) -> bool {
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            true
        } else {
            false
        }
    }

    /// Step the cursor back; returns false on the first question
    pub fn previous(&mut self) -> bool {
        if self.current_index > 0 {
            self.current_index -= 1;
            true
        } else {
            false
        }
    }

    /// Whether the cursor is on the first question
    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    /// Whether the cursor is on the last question
    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    /// Whether the current question has been answered
    pub fn can_proceed(&self) -> bool {
        self.current_question()
            .is_some_and(|q| self.responses.contains(&q.id))
    }

    /// Progress counters for display
    pub fn progress(&self) -> Progress {
        let total = self.questions.len();
        let current = (self.current_index + 1).min(total);
        let percentage = if total == 0 {
            0
        } else {
            ((current as f64 / total as f64) * 100.0).round() as u8
        };

        Progress {
            current,
            total,
            percentage,
            answered: answered_count(&self.responses, self.questions),
        }
    }

    /// Whether every catalog question has a response
    pub fn is_complete(&self) -> bool {
        is_complete(&self.responses, self.questions)
    }

    /// Score the completed questionnaire and keep the result
    ///
    /// # Errors
    /// [`DomainError::IncompleteResponses`] until every question is answered.
    pub fn calculate(&mut self) -> Result<Position, DomainError> {
        if !self.is_complete() {
            return Err(DomainError::IncompleteResponses {
                answered: answered_count(&self.responses, self.questions),
                total: self.questions.len(),
            });
        }

        let position = score_all(&self.responses, self.questions);
        self.result = Some(position);
        Ok(position)
    }

    /// Last computed result, if still current
    pub fn result(&self) -> Option<Position> {
        self.result
    }

    /// Discard all responses and return to the first question
    pub fn reset(&mut self) {
        self.responses.clear();
        self.current_index = 0;
        self.result = None;
    }
}

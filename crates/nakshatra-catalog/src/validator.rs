//! Catalog validation logic

use std::collections::HashSet;
use std::fmt;

use nakshatra_domain::{Axis, Entity, Question};
use tracing::{debug, warn};

use crate::ValidationConfig;

/// Result of catalog validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    /// Whether the catalog passed validation
    pub status: ValidationStatus,

    /// Problems that reject the catalog
    pub reasons: Vec<RejectionReason>,

    /// Problems reported but tolerated under the current configuration
    pub warnings: Vec<RejectionReason>,
}

impl ValidationResult {
    /// Whether the catalog was accepted
    pub fn is_accepted(&self) -> bool {
        self.status == ValidationStatus::Accepted
    }

    /// Fold another result into this one
    pub fn merge(mut self, other: ValidationResult) -> Self {
        self.reasons.extend(other.reasons);
        self.warnings.extend(other.warnings);
        self.status = if self.reasons.is_empty() {
            ValidationStatus::Accepted
        } else {
            ValidationStatus::Rejected
        };
        self
    }
}

/// Validation status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    /// Catalog accepted
    Accepted,

    /// Catalog rejected
    Rejected,
}

/// Problems the validator can report
#[derive(Debug, Clone, PartialEq)]
pub enum RejectionReason {
    /// Two questions share an id
    DuplicateQuestionId(String),

    /// Weight is zero, negative or not finite
    InvalidWeight {
        /// Question id
        id: String,
        /// Rejected weight
        weight: f64,
    },

    /// No question targets the axis
    EmptyAxis(Axis),

    /// Every question on the axis is forward-scored
    NoReverseItem(Axis),

    /// Two entities share an id
    DuplicateEntityId(String),
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::DuplicateQuestionId(id) => write!(f, "duplicate question id '{}'", id),
            RejectionReason::InvalidWeight { id, weight } => {
                write!(f, "question '{}' has non-positive weight {}", id, weight)
            }
            RejectionReason::EmptyAxis(axis) => write!(f, "axis {} has no questions", axis),
            RejectionReason::NoReverseItem(axis) => {
                write!(f, "axis {} has no reverse-scored question", axis)
            }
            RejectionReason::DuplicateEntityId(id) => write!(f, "duplicate entity id '{}'", id),
        }
    }
}

/// Checks question and entity catalogs before they reach the engine
#[derive(Debug, Clone, Default)]
pub struct CatalogValidator {
    config: ValidationConfig,
}

impl CatalogValidator {
    /// Create a validator with the given configuration
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a question catalog
    pub fn validate_questions(&self, questions: &[Question]) -> ValidationResult {
        let mut reasons = Vec::new();
        let mut warnings = Vec::new();

        // 1. Duplicate ids
        if self.config.validate_duplicates {
            let mut seen = HashSet::new();
            for question in questions {
                if !seen.insert(question.id.as_str()) {
                    reasons.push(RejectionReason::DuplicateQuestionId(question.id.to_string()));
                }
            }
        }

        // 2. Weights
        if self.config.validate_weights {
            for question in questions {
                if !(question.weight.is_finite() && question.weight > 0.0) {
                    reasons.push(RejectionReason::InvalidWeight {
                        id: question.id.to_string(),
                        weight: question.weight,
                    });
                }
            }
        }

        // 3. Axis coverage and reverse items
        for axis in Axis::ALL {
            let on_axis: Vec<&Question> = questions.iter().filter(|q| q.axis == axis).collect();

            if on_axis.is_empty() {
                if self.config.require_axis_coverage {
                    warnings.push(RejectionReason::EmptyAxis(axis));
                }
                continue;
            }

            if self.config.require_reverse_items && !on_axis.iter().any(|q| q.reverse) {
                warnings.push(RejectionReason::NoReverseItem(axis));
            }
        }

        debug!(
            questions = questions.len(),
            rejected = reasons.len(),
            warnings = warnings.len(),
            "validated question catalog"
        );
        self.finish(reasons, warnings)
    }

    /// Validate a party or leader catalog
    pub fn validate_entities(&self, entities: &[Entity]) -> ValidationResult {
        let mut reasons = Vec::new();

        if self.config.validate_duplicates {
            let mut seen = HashSet::new();
            for entity in entities {
                if !seen.insert(entity.id.as_str()) {
                    reasons.push(RejectionReason::DuplicateEntityId(entity.id.clone()));
                }
            }
        }

        debug!(
            entities = entities.len(),
            rejected = reasons.len(),
            "validated entity catalog"
        );
        self.finish(reasons, Vec::new())
    }

    fn finish(
        &self,
        mut reasons: Vec<RejectionReason>,
        mut warnings: Vec<RejectionReason>,
    ) -> ValidationResult {
        for warning in &warnings {
            warn!("catalog warning: {}", warning);
        }
        if self.config.warnings_as_errors {
            reasons.append(&mut warnings);
        }

        let status = if reasons.is_empty() {
            ValidationStatus::Accepted
        } else {
            ValidationStatus::Rejected
        };

        ValidationResult {
            status,
            reasons,
            warnings,
        }
    }
}

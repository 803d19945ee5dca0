//! Political Nakshatra Catalogs
//!
//! Loads, validates and queries the question, party and leader catalogs
//! the scoring engine runs over.
//!
//! The catalog layer provides:
//! - Built-in catalogs compiled into the binary
//! - TOML/JSON loading with authored-scale rescaling
//! - Validation (duplicate ids, weights, axis coverage, reverse items)
//! - Lookup by id, abbreviation, party and region
//!
//! # Examples
//!
//! ```no_run
//! use nakshatra_catalog::{Catalog, ValidationConfig};
//!
//! let catalog = Catalog::builtin()
//!     .and_then(|c| c.validated(&ValidationConfig::default()))
//!     .expect("built-in catalog is valid");
//! let bjp = catalog.party_by_abbreviation("BJP");
//! ```

#![warn(missing_docs)]

pub mod builtin;
mod config;
mod error;
pub mod loader;
pub mod records;
mod validator;

pub use config::ValidationConfig;
pub use error::CatalogError;
pub use validator::{CatalogValidator, RejectionReason, ValidationResult, ValidationStatus};

use nakshatra_domain::{Axis, Entity, Question};
use tracing::warn;

/// Grouping of leaders by their `region` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionGroup {
    /// Region mentions "National"
    National,
    /// Neither national nor historical
    Regional,
    /// Region mentions "Historical"
    Historical,
}

impl RegionGroup {
    /// Classify a region string
    ///
    /// "Delhi / National" is national; "Tamil Nadu (Historical)" is historical.
    pub fn classify(region: &str) -> Self {
        if region.contains("Historical") {
            RegionGroup::Historical
        } else if region.contains("National") {
            RegionGroup::National
        } else {
            RegionGroup::Regional
        }
    }

    /// Parse a group name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "national" => Some(RegionGroup::National),
            "regional" => Some(RegionGroup::Regional),
            "historical" => Some(RegionGroup::Historical),
            _ => None,
        }
    }
}

/// Question, party and leader catalogs held together
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<Question>,
    parties: Vec<Entity>,
    leaders: Vec<Entity>,
}

impl Catalog {
    /// Assemble a catalog from parts
    pub fn new(questions: Vec<Question>, parties: Vec<Entity>, leaders: Vec<Entity>) -> Self {
        Self {
            questions,
            parties,
            leaders,
        }
    }

    /// The catalogs compiled into the binary
    pub fn builtin() -> Result<Self, CatalogError> {
        Ok(Self::new(
            builtin::questions()?,
            builtin::parties()?,
            builtin::leaders()?,
        ))
    }

    /// Replace the question catalog
    pub fn with_questions(mut self, questions: Vec<Question>) -> Self {
        self.questions = questions;
        self
    }

    /// Replace the party catalog
    pub fn with_parties(mut self, parties: Vec<Entity>) -> Self {
        self.parties = parties;
        self
    }

    /// Replace the leader catalog
    pub fn with_leaders(mut self, leaders: Vec<Entity>) -> Self {
        self.leaders = leaders;
        self
    }

    /// Run every check over all three catalogs
    pub fn validate(&self, validator: &CatalogValidator) -> ValidationResult {
        validator
            .validate_questions(&self.questions)
            .merge(validator.validate_entities(&self.parties))
            .merge(validator.validate_entities(&self.leaders))
    }

    /// Validate and return the catalog, or the rejection reasons
    pub fn validated(self, config: &ValidationConfig) -> Result<Self, CatalogError> {
        let result = self.validate(&CatalogValidator::new(config.clone()));
        if !result.is_accepted() {
            warn!(reasons = result.reasons.len(), "catalog rejected");
            return Err(CatalogError::Rejected(result.reasons));
        }
        Ok(self)
    }

    /// Questions in presentation order
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Questions on one axis
    pub fn questions_on(&self, axis: Axis) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.axis == axis)
    }

    /// Question by id
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id.as_str() == id)
    }

    /// Party catalog
    pub fn parties(&self) -> &[Entity] {
        &self.parties
    }

    /// Leader catalog
    pub fn leaders(&self) -> &[Entity] {
        &self.leaders
    }

    /// Party by id
    pub fn party(&self, id: &str) -> Option<&Entity> {
        self.parties.iter().find(|p| p.id == id)
    }

    /// Party by abbreviation, ignoring case
    pub fn party_by_abbreviation(&self, abbreviation: &str) -> Option<&Entity> {
        self.parties.iter().find(|p| {
            p.short_name
                .as_deref()
                .is_some_and(|s| s.eq_ignore_ascii_case(abbreviation))
        })
    }

    /// Party by id or abbreviation
    pub fn find_party(&self, key: &str) -> Option<&Entity> {
        self.party(key).or_else(|| self.party_by_abbreviation(key))
    }

    /// Leader by id
    pub fn leader(&self, id: &str) -> Option<&Entity> {
        self.leaders.iter().find(|l| l.id == id)
    }

    /// Leaders whose `party_id` attribute matches
    pub fn leaders_of_party(&self, party_id: &str) -> Vec<&Entity> {
        self.leaders
            .iter()
            .filter(|l| l.attribute("party_id") == Some(party_id))
            .collect()
    }

    /// Leaders in a region group
    pub fn leaders_in(&self, group: RegionGroup) -> Vec<&Entity> {
        self.leaders
            .iter()
            .filter(|l| RegionGroup::classify(l.attribute("region").unwrap_or_default()) == group)
            .collect()
    }

    /// Party or leader by id
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.find_party(id).or_else(|| self.leader(id))
    }
}

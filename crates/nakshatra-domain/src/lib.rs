//! Political Nakshatra Domain Layer
//!
//! The scoring and comparison core of the three-axis political compass for
//! Indian politics. It has no I/O and a single external dependency
//! (`thiserror`); catalogs, persistence and localization are collaborators
//! supplied by other crates.
//!
//! ## Key Concepts
//!
//! - **Axis**: statism, recognition, SID; independent of each other
//! - **Position**: a point in the canonical [-1, +1]³ space
//! - **Question**: catalog entry with an axis, a weight and a reverse flag
//! - **Response set**: partial map of question id to a validated Likert value
//! - **Entity**: party or leader carrying a reference position
//!
//! ## Flow
//!
//! Responses → [`scoring::score_all`] → Position → [`comparison::rank_by_distance`]
//! → [`labeling`] keys resolved by a [`traits::MessageCatalog`].
//!
//! Every operation is a pure function over immutable inputs, so concurrent
//! callers need no locking.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod axis;
pub mod comparison;
pub mod entity;
pub mod error;
pub mod labeling;
pub mod position;
pub mod question;
pub mod response;
pub mod scoring;
pub mod session;
pub mod traits;

// Re-exports for convenience
pub use axis::Axis;
pub use entity::{AttributeValue, Entity, EntityKind};
pub use error::DomainError;
pub use position::Position;
pub use question::{Question, QuestionId};
pub use response::{Likert, ResponseSet};
pub use session::{Progress, QuizSession};

//! Command implementations.

pub mod compare;
pub mod config;
pub mod explain;
pub mod questions;
pub mod quiz;
pub mod score;
pub mod share;
pub mod validate;

pub use self::compare::execute_compare;
pub use self::config::execute_config;
pub use self::explain::execute_explain;
pub use self::questions::execute_questions;
pub use self::quiz::execute_quiz;
pub use self::score::execute_score;
pub use self::share::execute_share;
pub use self::validate::execute_validate;

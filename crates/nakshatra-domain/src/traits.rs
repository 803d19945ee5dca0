//! Trait definitions for external collaborators
//!
//! These traits define the boundaries between the scoring/comparison core and
//! the layers around it. Implementations live in other crates.

use crate::Position;

/// Anything carrying a reference position that can be ranked against a user
///
/// Implemented by [`crate::Entity`]; callers may implement it for their own
/// records to reuse the comparison engine without converting.
pub trait Positioned {
    /// Canonical [-1, 1] position
    fn position(&self) -> Position;
}

impl Positioned for Position {
    fn position(&self) -> Position {
        *self
    }
}

impl<T: Positioned + ?Sized> Positioned for &T {
    fn position(&self) -> Position {
        (**self).position()
    }
}

/// Localization collaborator resolving message keys to text
///
/// The core only ever produces keys (`labels.statism.positive`,
/// `examples.sid.veryHigh`, ...). Implemented by the presentation layer
/// (nakshatra-cli ships an English bundle).
pub trait MessageCatalog {
    /// Resolve a single message
    fn message(&self, key: &str) -> Option<&str>;

    /// Resolve a list-valued message (example statements)
    fn message_list(&self, key: &str) -> Option<Vec<String>>;

    /// Resolve a message, falling back to the key itself when missing
    fn resolve(&self, key: &str) -> String {
        self.message(key)
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }
}

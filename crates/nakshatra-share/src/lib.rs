//! Political Nakshatra Sharing
//!
//! Turns positions into short URL-safe tokens and quiz sessions into
//! versioned JSON snapshots, and back.
//!
//! # Examples
//!
//! ```
//! use nakshatra_domain::Position;
//! use nakshatra_share::{decode, encode};
//!
//! let position = Position::new(0.5, -0.25, 0.0).unwrap();
//! let token = encode(&position).unwrap();
//! assert_eq!(decode(&token).unwrap(), position);
//! ```

#![warn(missing_docs)]

mod error;
pub mod snapshot;
pub mod token;

pub use error::ShareError;
pub use snapshot::{SessionSnapshot, SNAPSHOT_VERSION};
pub use token::{decode, encode, SharedPosition};

//! Position module - a point in the three-axis coordinate space

use crate::{Axis, DomainError};

/// Lower bound of every canonical coordinate
pub const MIN_COORDINATE: f64 = -1.0;

/// Upper bound of every canonical coordinate
pub const MAX_COORDINATE: f64 = 1.0;

/// Point in the canonical [-1, +1]³ political space
///
/// Both computed user positions and entity reference positions use this
/// range. Catalogs authored on another range (e.g. [-10, +10]) are rescaled
/// once, at load time, with [`Position::from_scaled`]; unscaled values never
/// reach a distance computation.
///
/// Fields are private: every value outside this module went through
/// [`Position::new`], so a `Position` is always in range.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    statism: f64,
    recognition: f64,
    sid: f64,
}

impl Position {
    /// The neutral centre of the space
    pub const ORIGIN: Position = Position {
        statism: 0.0,
        recognition: 0.0,
        sid: 0.0,
    };

    /// Create a validated position
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidPosition`] for the first component that is
    /// non-finite or outside [-1, 1].
    pub fn new(statism: f64, recognition: f64, sid: f64) -> Result<Self, DomainError> {
        let position = Self {
            statism,
            recognition,
            sid,
        };
        position.validate()?;
        Ok(position)
    }

    /// Create a position from coordinates authored on `[-scale, +scale]`
    ///
    /// This is a linear rescale (divide by `scale`) followed by validation.
    /// A scale of 10 maps the [-10, +10] party catalog onto the canonical range.
    pub fn from_scaled(
        statism: f64,
        recognition: f64,
        sid: f64,
        scale: f64,
    ) -> Result<Self, DomainError> {
        Self::new(statism / scale, recognition / scale, sid / scale)
    }

    /// Build a position from per-axis values in [`Axis::ALL`] order
    pub fn from_components(values: [f64; 3]) -> Result<Self, DomainError> {
        Self::new(values[0], values[1], values[2])
    }

    /// Normalized axis scores, clamped against floating-point drift
    pub(crate) fn from_scores(statism: f64, recognition: f64, sid: f64) -> Self {
        let clamp = |v: f64| v.clamp(MIN_COORDINATE, MAX_COORDINATE);
        Self {
            statism: clamp(statism),
            recognition: clamp(recognition),
            sid: clamp(sid),
        }
    }

    /// Statism coordinate
    pub fn statism(&self) -> f64 {
        self.statism
    }

    /// Recognition coordinate
    pub fn recognition(&self) -> f64 {
        self.recognition
    }

    /// SID coordinate
    pub fn sid(&self) -> f64 {
        self.sid
    }

    /// Coordinate on one axis
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Statism => self.statism,
            Axis::Recognition => self.recognition,
            Axis::Sid => self.sid,
        }
    }

    /// Coordinates in [`Axis::ALL`] order
    pub fn components(&self) -> [f64; 3] {
        [self.statism, self.recognition, self.sid]
    }

    /// Check every component is a finite number in [-1, 1]
    pub fn validate(&self) -> Result<(), DomainError> {
        for axis in Axis::ALL {
            let value = self.get(axis);
            if !is_valid_coordinate(value) {
                return Err(DomainError::InvalidPosition { axis, value });
            }
        }
        Ok(())
    }

    /// Whether [`Position::validate`] would succeed
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// A single coordinate is valid when finite and inside [-1, 1]
pub fn is_valid_coordinate(value: f64) -> bool {
    value.is_finite() && (MIN_COORDINATE..=MAX_COORDINATE).contains(&value)
}

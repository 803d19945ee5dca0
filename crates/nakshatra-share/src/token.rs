//! Share tokens
//!
//! A token is the URL-safe base64 (no padding) of
//! `{"statism":..,"recognition":..,"sid":..}` with each component rounded
//! to two decimals.

use base64::{engine::general_purpose, Engine as _};
use nakshatra_domain::Position;
use serde::{Deserialize, Serialize};

use crate::ShareError;

/// Wire form of a position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SharedPosition {
    /// Statism coordinate
    pub statism: f64,
    /// Recognition coordinate
    pub recognition: f64,
    /// SID coordinate
    pub sid: f64,
}

impl From<&Position> for SharedPosition {
    fn from(position: &Position) -> Self {
        Self {
            statism: position.statism(),
            recognition: position.recognition(),
            sid: position.sid(),
        }
    }
}

impl TryFrom<SharedPosition> for Position {
    type Error = ShareError;

    fn try_from(shared: SharedPosition) -> Result<Self, Self::Error> {
        Ok(Position::new(shared.statism, shared.recognition, shared.sid)?)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Encode a position as a share token
///
/// # Errors
/// [`ShareError::Json`] if serialization fails.
pub fn encode(position: &Position) -> Result<String, ShareError> {
    let rounded = SharedPosition {
        statism: round2(position.statism()),
        recognition: round2(position.recognition()),
        sid: round2(position.sid()),
    };
    let json = serde_json::to_vec(&rounded)?;
    Ok(general_purpose::URL_SAFE_NO_PAD.encode(json))
}

/// Decode a share token
///
/// Accepts padded tokens and the standard base64 alphabet as well.
///
/// # Errors
/// A distinct error for bad base64, bad JSON (including missing or
/// non-numeric components) and out-of-range values.
pub fn decode(token: &str) -> Result<Position, ShareError> {
    let normalized: String = token
        .trim()
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    let bytes = general_purpose::URL_SAFE_NO_PAD.decode(normalized)?;
    let shared: SharedPosition = serde_json::from_slice(&bytes)?;
    Position::try_from(shared)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_for(json: &str) -> String {
        general_purpose::URL_SAFE_NO_PAD.encode(json)
    }

    #[test]
    fn test_known_token() {
        let position = Position::new(0.5, -0.3, 0.0).unwrap();
        let token = encode(&position).unwrap();
        assert_eq!(token, token_for(r#"{"statism":0.5,"recognition":-0.3,"sid":0.0}"#));
        assert!(!token.contains('='));
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        let position = Position::new(0.123456, -0.987654, 0.005).unwrap();
        let decoded = decode(&encode(&position).unwrap()).unwrap();
        assert_eq!(decoded.statism(), 0.12);
        assert_eq!(decoded.recognition(), -0.99);
    }

    #[test]
    fn test_extremes_survive_rounding() {
        let position = Position::new(-1.0, 1.0, 0.999).unwrap();
        let decoded = decode(&encode(&position).unwrap()).unwrap();
        assert_eq!(decoded, Position::new(-1.0, 1.0, 1.0).unwrap());
    }

    #[test]
    fn test_decode_errors_are_distinct() {
        assert!(matches!(decode("!!!"), Err(ShareError::Base64(_))));
        assert!(matches!(
            decode(&token_for(r#"{"statism":0.1,"recognition":0.2}"#)),
            Err(ShareError::Json(_))
        ));
        assert!(matches!(
            decode(&token_for(r#"{"statism":"x","recognition":0.2,"sid":0}"#)),
            Err(ShareError::Json(_))
        ));
        assert!(matches!(
            decode(&token_for(r#"{"statism":1.2,"recognition":0.2,"sid":0}"#)),
            Err(ShareError::Invalid(_))
        ));
    }

    #[test]
    fn test_accepts_padding_and_standard_alphabet() {
        let json = r#"{"statism":-1,"recognition":1,"sid":0.25}"#;
        let padded = general_purpose::STANDARD.encode(json);
        let position = decode(&padded).unwrap();
        assert_eq!(position, Position::new(-1.0, 1.0, 0.25).unwrap());
    }
}

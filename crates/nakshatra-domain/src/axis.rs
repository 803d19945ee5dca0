//! Axis module - the three independent dimensions of political position

/// Axis of the political compass
///
/// The three axes are independent; no normalization ever crosses axes:
/// - Statism: state intervention vs. traditional/market autonomy
/// - Recognition: group-based rights vs. majoritarian/merit-based approaches
/// - Sid: universalist (rule-based) vs. particularist (identity-network) distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// State intervention in economy and society
    Statism,

    /// Group recognition and accommodation
    Recognition,

    /// State-institution distribution (universalist vs. particularist)
    Sid,
}

impl Axis {
    /// All axes in canonical order
    pub const ALL: [Axis; 3] = [Axis::Statism, Axis::Recognition, Axis::Sid];

    /// Get the axis name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Statism => "statism",
            Axis::Recognition => "recognition",
            Axis::Sid => "sid",
        }
    }

    /// Parse an axis from a string
    ///
    /// Accepts the canonical names and the single-letter aliases `a`, `b`, `c`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "statism" | "a" => Some(Axis::Statism),
            "recognition" | "b" => Some(Axis::Recognition),
            "sid" | "c" => Some(Axis::Sid),
            _ => None,
        }
    }

    /// Position of this axis in [`Axis::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Axis::Statism => 0,
            Axis::Recognition => 1,
            Axis::Sid => 2,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Axis {
    type Err = crate::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| crate::DomainError::UnknownAxis(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_round_trip_names() {
        for axis in Axis::ALL {
            assert_eq!(Axis::parse(axis.as_str()), Some(axis));
        }
    }

    #[test]
    fn test_axis_aliases() {
        assert_eq!(Axis::parse("A"), Some(Axis::Statism));
        assert_eq!(Axis::parse("b"), Some(Axis::Recognition));
        assert_eq!(Axis::parse("SID"), Some(Axis::Sid));
        assert_eq!(Axis::parse("economy"), None);
    }

    #[test]
    fn test_axis_index_matches_order() {
        for (i, axis) in Axis::ALL.iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }

    #[test]
    fn test_from_str_error() {
        let err = "liberty".parse::<Axis>().unwrap_err();
        assert!(err.to_string().contains("liberty"));
    }
}

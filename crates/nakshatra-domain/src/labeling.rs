//! Descriptive labeling
//!
//! Maps a coordinate on one axis to message keys. Two neutral bands coexist on
//! purpose and must not be unified:
//! - labels and descriptions treat `|c| < 0.15` as neutral
//! - example selection treats `|c| <= 0.3` as neutral

use crate::traits::MessageCatalog;
use crate::Axis;

/// Below this absolute value labels and descriptions are neutral
pub const LABEL_NEUTRAL_THRESHOLD: f64 = 0.15;

/// Above this absolute value the intensity is "moderately"
pub const MODERATE_THRESHOLD: f64 = 0.3;

/// Above this absolute value the intensity is "very"
pub const STRONG_THRESHOLD: f64 = 0.6;

/// Number of example statements shown for any bucket
pub const EXAMPLE_LIMIT: usize = 3;

/// Intensity qualifier of a non-neutral label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intensity {
    /// |c| > 0.6
    Very,
    /// |c| > 0.3
    Moderately,
    /// otherwise
    Slightly,
}

impl Intensity {
    /// Intensity bucket of a coordinate
    pub fn of(coordinate: f64) -> Self {
        let abs = coordinate.abs();
        if abs > STRONG_THRESHOLD {
            Intensity::Very
        } else if abs > MODERATE_THRESHOLD {
            Intensity::Moderately
        } else {
            Intensity::Slightly
        }
    }

    /// Message key for the qualifier
    pub fn key(&self) -> &'static str {
        match self {
            Intensity::Very => "labels.intensity.very",
            Intensity::Moderately => "labels.intensity.moderately",
            Intensity::Slightly => "labels.intensity.slightly",
        }
    }
}

/// Side of an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pole {
    /// Towards +1
    Positive,
    /// Towards -1
    Negative,
}

/// Short label for a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisLabel {
    /// Inside the ±0.15 band, e.g. "Centrist on Statism"
    Neutral(Axis),
    /// Intensity plus pole, e.g. "Moderately Pro-Recognition"
    Pole {
        /// Labelled axis
        axis: Axis,
        /// Qualifier
        intensity: Intensity,
        /// Side of the axis
        pole: Pole,
    },
}

impl AxisLabel {
    /// Message key of the pole (or neutral) text
    pub fn key(&self) -> String {
        match self {
            AxisLabel::Neutral(axis) => format!("labels.{}.neutral", axis.as_str()),
            AxisLabel::Pole { axis, pole, .. } => {
                let side = match pole {
                    Pole::Positive => "positive",
                    Pole::Negative => "negative",
                };
                format!("labels.{}.{}", axis.as_str(), side)
            }
        }
    }

    /// Render with a message catalog: "<intensity> <pole>" or the neutral text
    pub fn render<C: MessageCatalog + ?Sized>(&self, catalog: &C) -> String {
        match self {
            AxisLabel::Neutral(_) => catalog.resolve(&self.key()),
            AxisLabel::Pole { intensity, .. } => {
                format!("{} {}", catalog.resolve(intensity.key()), catalog.resolve(&self.key()))
            }
        }
    }
}

/// Descriptive label for a coordinate on an axis
pub fn axis_label(coordinate: f64, axis: Axis) -> AxisLabel {
    if coordinate.abs() < LABEL_NEUTRAL_THRESHOLD {
        return AxisLabel::Neutral(axis);
    }

    AxisLabel::Pole {
        axis,
        intensity: Intensity::of(coordinate),
        pole: if coordinate > 0.0 {
            Pole::Positive
        } else {
            Pole::Negative
        },
    }
}

/// Which prose block describes a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DescriptionBucket {
    /// c >= 0.15
    High,
    /// c <= -0.15
    Low,
    /// |c| < 0.15
    Neutral,
}

impl DescriptionBucket {
    /// Message key for the prose block on `axis`
    pub fn key(&self, axis: Axis) -> String {
        let bucket = match self {
            DescriptionBucket::High => "high",
            DescriptionBucket::Low => "low",
            DescriptionBucket::Neutral => "neutral",
        };
        format!("descriptions.{}.{}", axis.as_str(), bucket)
    }
}

/// Prose bucket for a coordinate (same ±0.15 band as [`axis_label`])
pub fn axis_description(coordinate: f64) -> DescriptionBucket {
    if coordinate.abs() < LABEL_NEUTRAL_THRESHOLD {
        DescriptionBucket::Neutral
    } else if coordinate > 0.0 {
        DescriptionBucket::High
    } else {
        DescriptionBucket::Low
    }
}

/// Which example list illustrates a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExampleBucket {
    /// c > 0.6
    VeryHigh,
    /// 0.3 < c <= 0.6
    High,
    /// |c| <= 0.3
    Neutral,
    /// -0.6 <= c < -0.3
    Low,
    /// c < -0.6
    VeryLow,
}

impl ExampleBucket {
    fn as_str(&self) -> &'static str {
        match self {
            ExampleBucket::VeryHigh => "veryHigh",
            ExampleBucket::High => "high",
            ExampleBucket::Neutral => "neutral",
            ExampleBucket::Low => "low",
            ExampleBucket::VeryLow => "veryLow",
        }
    }
}

/// Example list to show for a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExampleSelection {
    /// Axis of the coordinate
    pub axis: Axis,
    /// Selected bucket
    pub bucket: ExampleBucket,
    /// Maximum items to show; `None` returns the list whole
    pub limit: Option<usize>,
}

impl ExampleSelection {
    /// Message key of the list
    pub fn key(&self) -> String {
        format!("examples.{}.{}", self.axis.as_str(), self.bucket.as_str())
    }

    /// Resolve the list through a catalog and apply the limit
    pub fn resolve<C: MessageCatalog + ?Sized>(&self, catalog: &C) -> Vec<String> {
        let mut items = catalog.message_list(&self.key()).unwrap_or_default();
        if let Some(limit) = self.limit {
            items.truncate(limit);
        }
        items
    }
}

/// Example bucket for a coordinate (neutral band ±0.3)
///
/// Non-neutral buckets are truncated to three items; the neutral list is
/// authored with exactly three and is returned whole.
pub fn axis_examples(coordinate: f64, axis: Axis) -> ExampleSelection {
    let bucket = if coordinate > STRONG_THRESHOLD {
        ExampleBucket::VeryHigh
    } else if coordinate > MODERATE_THRESHOLD {
        ExampleBucket::High
    } else if coordinate.abs() <= MODERATE_THRESHOLD {
        ExampleBucket::Neutral
    } else if coordinate < -STRONG_THRESHOLD {
        ExampleBucket::VeryLow
    } else {
        ExampleBucket::Low
    };

    let limit = match bucket {
        ExampleBucket::Neutral => None,
        _ => Some(EXAMPLE_LIMIT),
    };

    ExampleSelection { axis, bucket, limit }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct TestCatalog {
        messages: HashMap<&'static str, &'static str>,
        lists: HashMap<&'static str, Vec<String>>,
    }

    impl MessageCatalog for TestCatalog {
        fn message(&self, key: &str) -> Option<&str> {
            self.messages.get(key).copied()
        }

        fn message_list(&self, key: &str) -> Option<Vec<String>> {
            self.lists.get(key).cloned()
        }
    }

    fn catalog() -> TestCatalog {
        let messages = HashMap::from([
            ("labels.intensity.slightly", "Slightly"),
            ("labels.intensity.very", "Very"),
            ("labels.statism.positive", "High Statism"),
            ("labels.statism.neutral", "Centrist on Statism"),
        ]);
        let items = |n: usize| (1..=n).map(|i| format!("example {}", i)).collect::<Vec<_>>();
        let lists = HashMap::from([
            ("examples.sid.veryHigh", items(5)),
            ("examples.sid.neutral", items(4)),
        ]);
        TestCatalog { messages, lists }
    }

    #[test]
    fn test_slightly_not_neutral_at_point_two() {
        let label = axis_label(0.2, Axis::Statism);
        assert_eq!(
            label,
            AxisLabel::Pole {
                axis: Axis::Statism,
                intensity: Intensity::Slightly,
                pole: Pole::Positive
            }
        );
        assert_eq!(label.render(&catalog()), "Slightly High Statism");
    }

    #[test]
    fn test_neutral_band() {
        assert_eq!(axis_label(0.149, Axis::Sid), AxisLabel::Neutral(Axis::Sid));
        assert_eq!(axis_label(-0.149, Axis::Sid), AxisLabel::Neutral(Axis::Sid));
        assert_eq!(
            axis_label(0.0, Axis::Statism).render(&catalog()),
            "Centrist on Statism"
        );
    }

    #[test]
    fn test_intensity_buckets() {
        assert_eq!(Intensity::of(0.61), Intensity::Very);
        assert_eq!(Intensity::of(-0.6), Intensity::Moderately);
        assert_eq!(Intensity::of(0.31), Intensity::Moderately);
        assert_eq!(Intensity::of(0.3), Intensity::Slightly);
    }

    #[test]
    fn test_negative_pole_key() {
        let label = axis_label(-0.7, Axis::Recognition);
        assert_eq!(label.key(), "labels.recognition.negative");
        // Missing keys fall back to the key itself
        assert_eq!(
            label.render(&catalog()),
            "Very labels.recognition.negative"
        );
    }

    #[test]
    fn test_description_buckets() {
        assert_eq!(axis_description(0.15), DescriptionBucket::High);
        assert_eq!(axis_description(-0.15), DescriptionBucket::Low);
        assert_eq!(axis_description(0.1), DescriptionBucket::Neutral);
        assert_eq!(DescriptionBucket::Low.key(Axis::Sid), "descriptions.sid.low");
    }

    #[test]
    fn test_example_buckets() {
        assert_eq!(axis_examples(0.61, Axis::Sid).bucket, ExampleBucket::VeryHigh);
        assert_eq!(axis_examples(0.6, Axis::Sid).bucket, ExampleBucket::High);
        assert_eq!(axis_examples(0.3, Axis::Sid).bucket, ExampleBucket::Neutral);
        assert_eq!(axis_examples(-0.3, Axis::Sid).bucket, ExampleBucket::Neutral);
        assert_eq!(axis_examples(-0.6, Axis::Sid).bucket, ExampleBucket::Low);
        assert_eq!(axis_examples(-0.61, Axis::Sid).bucket, ExampleBucket::VeryLow);
    }

    #[test]
    fn test_examples_and_labels_use_different_neutral_bands() {
        // 0.2 is a labelled (non-neutral) position but a neutral example bucket
        assert!(matches!(axis_label(0.2, Axis::Statism), AxisLabel::Pole { .. }));
        assert_eq!(axis_examples(0.2, Axis::Statism).bucket, ExampleBucket::Neutral);
    }

    #[test]
    fn test_example_truncation() {
        let selection = axis_examples(0.9, Axis::Sid);
        assert_eq!(selection.key(), "examples.sid.veryHigh");
        assert_eq!(selection.resolve(&catalog()).len(), 3);

        let neutral = axis_examples(0.0, Axis::Sid);
        assert_eq!(neutral.limit, None);
        assert_eq!(neutral.resolve(&catalog()).len(), 4);

        // Unknown list resolves to nothing
        assert!(axis_examples(-0.9, Axis::Sid).resolve(&catalog()).is_empty());
    }
}

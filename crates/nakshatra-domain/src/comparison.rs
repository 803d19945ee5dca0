//! Comparison engine
//!
//! Pure functions ranking reference entities against a user position. Nothing
//! is cached: callers recompute whenever the user position changes.

use crate::traits::Positioned;
use crate::{Axis, Position};

/// Largest Euclidean distance inside [-1, 1]³: sqrt(3 * 2²), corner to corner
pub const MAX_DISTANCE: f64 = 3.464_101_615_137_754_4;

/// Threshold beyond which an axis counts as leaning in `political_lean`
pub const LEAN_THRESHOLD: f64 = 0.3;

/// Per-axis difference below which two values are "similar" in comparative text
pub const COMPARATIVE_SIMILAR_THRESHOLD: f64 = 0.15;

/// Euclidean distance between two positions
pub fn distance(a: &Position, b: &Position) -> f64 {
    let dx = a.statism() - b.statism();
    let dy = a.recognition() - b.recognition();
    let dz = a.sid() - b.sid();
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Match percentage, linear in distance relative to [`MAX_DISTANCE`]
///
/// In-range positions always land in 0..=100; the result is clamped so an
/// out-of-range input cannot wrap.
pub fn match_score(user: &Position, target: &Position) -> u8 {
    let score = ((1.0 - distance(user, target) / MAX_DISTANCE) * 100.0).round();
    score.clamp(0.0, 100.0) as u8
}

/// An entity annotated with its distance from the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ranked<'a, T> {
    /// The ranked entity
    pub entity: &'a T,
    /// Euclidean distance from the user position
    pub distance: f64,
    /// Match percentage for that distance
    pub match_score: u8,
}

/// Rank entities closest first; equal distances keep catalog order
pub fn rank_by_distance<'a, T: Positioned>(user: &Position, entities: &'a [T]) -> Vec<Ranked<'a, T>> {
    let mut ranked: Vec<Ranked<'a, T>> = entities
        .iter()
        .map(|entity| {
            let target = entity.position();
            Ranked {
                entity,
                distance: distance(user, &target),
                match_score: match_score(user, &target),
            }
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    ranked
}

/// The single nearest entity; the first one wins a tie
pub fn closest<'a, T: Positioned>(user: &Position, entities: &'a [T]) -> Option<Ranked<'a, T>> {
    rank_by_distance(user, entities).into_iter().next()
}

/// Classification of a single-axis difference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignmentLevel {
    /// diff < 0.1
    VerySimilar,
    /// diff < 0.3
    Similar,
    /// diff < 0.5
    SomewhatDifferent,
    /// everything else
    Different,
}

impl AlignmentLevel {
    /// Message key for the label
    pub fn key(&self) -> &'static str {
        match self {
            AlignmentLevel::VerySimilar => "alignment.verySimilar",
            AlignmentLevel::Similar => "alignment.similar",
            AlignmentLevel::SomewhatDifferent => "alignment.somewhatDifferent",
            AlignmentLevel::Different => "alignment.different",
        }
    }

    /// Display symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            AlignmentLevel::VerySimilar | AlignmentLevel::Similar => "✓",
            AlignmentLevel::SomewhatDifferent => "~",
            AlignmentLevel::Different => "✗",
        }
    }
}

/// Alignment between a user and a target on one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisAlignment {
    /// Absolute difference, in [0, 2] for canonical values
    pub difference: f64,
    /// Classification of the difference
    pub level: AlignmentLevel,
    /// `round((1 - diff / 2) * 100)`
    pub match_percent: u8,
}

impl AxisAlignment {
    /// Display symbol of the classification
    pub fn symbol(&self) -> &'static str {
        self.level.symbol()
    }
}

/// Classify how closely two single-axis values agree
pub fn axis_alignment(user_value: f64, target_value: f64) -> AxisAlignment {
    let difference = (user_value - target_value).abs();
    let match_percent = ((1.0 - difference / 2.0) * 100.0).round().clamp(0.0, 100.0) as u8;

    let level = if difference < 0.1 {
        AlignmentLevel::VerySimilar
    } else if difference < 0.3 {
        AlignmentLevel::Similar
    } else if difference < 0.5 {
        AlignmentLevel::SomewhatDifferent
    } else {
        AlignmentLevel::Different
    };

    AxisAlignment {
        difference,
        level,
        match_percent,
    }
}

/// Full comparison of a user against one target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailedComparison {
    /// 3D distance
    pub distance: f64,
    /// Overall match percentage
    pub match_score: u8,
    /// Per-axis alignment in [`Axis::ALL`] order
    pub alignments: [AxisAlignment; 3],
}

/// Distance, match score and per-axis alignment in one pass
pub fn detailed_comparison(user: &Position, target: &Position) -> DetailedComparison {
    DetailedComparison {
        distance: distance(user, target),
        match_score: match_score(user, target),
        alignments: Axis::ALL.map(|axis| axis_alignment(user.get(axis), target.get(axis))),
    }
}

/// Entity closest to the user on a single axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisClosest<'a, T> {
    /// Axis the comparison was made on
    pub axis: Axis,
    /// Winning entity
    pub entity: &'a T,
    /// `|user[axis] - entity[axis]|`
    pub difference: f64,
    /// Entity's raw value on the axis
    pub value: f64,
}

/// For each axis, the entity with the smallest 1D difference
///
/// Returns one entry per axis in [`Axis::ALL`] order, or nothing for an empty
/// catalog. Ties keep catalog order.
pub fn closest_per_axis<'a, T: Positioned>(user: &Position, entities: &'a [T]) -> Vec<AxisClosest<'a, T>> {
    Axis::ALL
        .iter()
        .filter_map(|&axis| {
            let user_value = user.get(axis);
            entities
                .iter()
                .map(|entity| {
                    let value = entity.position().get(axis);
                    AxisClosest {
                        axis,
                        entity,
                        difference: (user_value - value).abs(),
                        value,
                    }
                })
                // min_by returns the first of equal minima
                .min_by(|a, b| a.difference.total_cmp(&b.difference))
        })
        .collect()
}

/// Entities at both ends of one axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisExtremes<'a, T> {
    /// Entity with the lowest value
    pub min: &'a T,
    /// Entity with the highest value
    pub max: &'a T,
    /// `max - min` on the axis
    pub range: f64,
}

/// Lowest and highest entity on an axis; `None` for an empty catalog
pub fn axis_extremes<'a, T: Positioned>(axis: Axis, entities: &'a [T]) -> Option<AxisExtremes<'a, T>> {
    let value = |e: &T| e.position().get(axis);
    let min = entities.iter().min_by(|a, b| value(*a).total_cmp(&value(*b)))?;
    let max = entities.iter().max_by(|a, b| value(*a).total_cmp(&value(*b)))?;

    Some(AxisExtremes {
        min,
        max,
        range: value(max) - value(min),
    })
}

/// Per-axis lean category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeanPole {
    /// Statism > 0.3
    Statist,
    /// Statism < -0.3
    MarketOriented,
    /// Statism within ±0.3
    Centrist,
    /// Recognition > 0.3
    Pluralist,
    /// Recognition < -0.3
    Majoritarian,
    /// Recognition within ±0.3
    Moderate,
    /// SID > 0.3
    Universalist,
    /// SID < -0.3
    Particularist,
    /// SID within ±0.3
    Balanced,
}

impl LeanPole {
    /// Message key for the label
    pub fn key(&self) -> &'static str {
        match self {
            LeanPole::Statist => "lean.statist",
            LeanPole::MarketOriented => "lean.marketOriented",
            LeanPole::Centrist => "lean.centrist",
            LeanPole::Pluralist => "lean.pluralist",
            LeanPole::Majoritarian => "lean.majoritarian",
            LeanPole::Moderate => "lean.moderate",
            LeanPole::Universalist => "lean.universalist",
            LeanPole::Particularist => "lean.particularist",
            LeanPole::Balanced => "lean.balanced",
        }
    }
}

/// Lean category of a single coordinate
pub fn axis_lean(value: f64, axis: Axis) -> LeanPole {
    let (high, low, neutral) = match axis {
        Axis::Statism => (LeanPole::Statist, LeanPole::MarketOriented, LeanPole::Centrist),
        Axis::Recognition => (LeanPole::Pluralist, LeanPole::Majoritarian, LeanPole::Moderate),
        Axis::Sid => (LeanPole::Universalist, LeanPole::Particularist, LeanPole::Balanced),
    };

    if value > LEAN_THRESHOLD {
        high
    } else if value < -LEAN_THRESHOLD {
        low
    } else {
        neutral
    }
}

/// Overall lean built from the statism and recognition axes
///
/// SID never participates; it has its own labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoliticalLean {
    /// Both statism and recognition lean: e.g. "Statist Pluralist"
    Compound(LeanPole, LeanPole),
    /// Exactly one of the two leans
    Single(LeanPole),
    /// Neither leans
    CentristModerate,
}

impl PoliticalLean {
    /// Message keys to resolve and join with a space, in display order
    pub fn keys(&self) -> Vec<&'static str> {
        match self {
            PoliticalLean::Compound(statism, recognition) => vec![statism.key(), recognition.key()],
            PoliticalLean::Single(pole) => vec![pole.key()],
            PoliticalLean::CentristModerate => vec!["lean.centristModerate"],
        }
    }
}

/// Composite lean label for a position
pub fn political_lean(position: &Position) -> PoliticalLean {
    let statism_leans = position.statism().abs() > LEAN_THRESHOLD;
    let recognition_leans = position.recognition().abs() > LEAN_THRESHOLD;
    let statism = axis_lean(position.statism(), Axis::Statism);
    let recognition = axis_lean(position.recognition(), Axis::Recognition);

    match (statism_leans, recognition_leans) {
        (true, true) => PoliticalLean::Compound(statism, recognition),
        (true, false) => PoliticalLean::Single(statism),
        (false, true) => PoliticalLean::Single(recognition),
        (false, false) => PoliticalLean::CentristModerate,
    }
}

/// Plain-language band for a 3D distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistanceBand {
    /// < 0.3
    VerySimilar,
    /// < 0.6
    Moderate,
    /// < 1.0
    Significant,
    /// >= 1.0
    VeryDifferent,
}

impl DistanceBand {
    /// Message key for the band
    pub fn key(&self) -> &'static str {
        match self {
            DistanceBand::VerySimilar => "distance.verySimilar",
            DistanceBand::Moderate => "distance.moderate",
            DistanceBand::Significant => "distance.significant",
            DistanceBand::VeryDifferent => "distance.veryDifferent",
        }
    }
}

/// Band a distance value
pub fn interpret_distance(distance: f64) -> DistanceBand {
    if distance < 0.3 {
        DistanceBand::VerySimilar
    } else if distance < 0.6 {
        DistanceBand::Moderate
    } else if distance < 1.0 {
        DistanceBand::Significant
    } else {
        DistanceBand::VeryDifferent
    }
}

/// Plain-language band for a match percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchBand {
    /// >= 80
    Strong,
    /// >= 60
    Moderate,
    /// >= 40
    Some,
    /// below 40
    Low,
}

impl MatchBand {
    /// Message key for the band
    pub fn key(&self) -> &'static str {
        match self {
            MatchBand::Strong => "match.strong",
            MatchBand::Moderate => "match.moderate",
            MatchBand::Some => "match.some",
            MatchBand::Low => "match.low",
        }
    }
}

/// Band a match percentage
pub fn interpret_match(match_percent: u8) -> MatchBand {
    match match_percent {
        80.. => MatchBand::Strong,
        60..=79 => MatchBand::Moderate,
        40..=59 => MatchBand::Some,
        _ => MatchBand::Low,
    }
}

/// How the user stands relative to a target on one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparative {
    /// Within 0.15 of each other
    Similar,
    /// User is further towards the positive pole
    FavorMore,
    /// User is further towards the negative pole
    FavorLess,
}

impl Comparative {
    /// Message key for the sentence on `axis`
    pub fn key(&self, axis: Axis) -> String {
        let suffix = match self {
            Comparative::Similar => "similar",
            Comparative::FavorMore => "youFavorMore",
            Comparative::FavorLess => "youFavorLess",
        };
        format!("comparison.{}.{}", axis.as_str(), suffix)
    }
}

/// Compare user and target on one axis
pub fn comparative(user_value: f64, target_value: f64) -> Comparative {
    let diff = user_value - target_value;
    if diff.abs() < COMPARATIVE_SIMILAR_THRESHOLD {
        Comparative::Similar
    } else if diff > 0.0 {
        Comparative::FavorMore
    } else {
        Comparative::FavorLess
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Entity, EntityKind};

    fn pos(s: f64, r: f64, sid: f64) -> Position {
        Position::new(s, r, sid).unwrap()
    }

    fn entity(id: &str, position: Position) -> Entity {
        Entity::new(id, EntityKind::Party, id.to_uppercase(), position)
    }

    #[test]
    fn test_distance_basics() {
        let a = pos(1.0, 0.0, 0.0);
        assert_eq!(distance(&a, &Position::ORIGIN), 1.0);
        assert_eq!(distance(&a, &a), 0.0);
    }

    #[test]
    fn test_max_distance_constant() {
        assert!((MAX_DISTANCE - 12f64.sqrt()).abs() < 1e-15);
        let corner = pos(1.0, 1.0, 1.0);
        let opposite = pos(-1.0, -1.0, -1.0);
        assert!((distance(&corner, &opposite) - MAX_DISTANCE).abs() < 1e-12);
        assert_eq!(match_score(&corner, &opposite), 0);
    }

    #[test]
    fn test_single_entity_ranking() {
        let entities = vec![entity("x", Position::ORIGIN)];
        let ranked = rank_by_distance(&pos(1.0, 0.0, 0.0), &entities);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].entity.id, "x");
        assert_eq!(ranked[0].distance, 1.0);
        assert_eq!(ranked[0].match_score, 71);
    }

    #[test]
    fn test_ranking_order_and_ties() {
        let entities = vec![
            entity("far", pos(-1.0, -1.0, -1.0)),
            entity("tie_a", pos(0.5, 0.0, 0.0)),
            entity("near", pos(0.1, 0.0, 0.0)),
            entity("tie_b", pos(-0.5, 0.0, 0.0)),
        ];
        let ranked = rank_by_distance(&Position::ORIGIN, &entities);
        let ids: Vec<&str> = ranked.iter().map(|r| r.entity.id.as_str()).collect();
        assert_eq!(ids, vec!["near", "tie_a", "tie_b", "far"]);
    }

    #[test]
    fn test_empty_catalog() {
        let entities: Vec<Entity> = Vec::new();
        assert!(rank_by_distance(&Position::ORIGIN, &entities).is_empty());
        assert!(closest(&Position::ORIGIN, &entities).is_none());
        assert!(closest_per_axis(&Position::ORIGIN, &entities).is_empty());
        assert!(axis_extremes(Axis::Sid, &entities).is_none());
    }

    #[test]
    fn test_self_match() {
        let p = pos(0.3, -0.7, 0.9);
        assert_eq!(match_score(&p, &p), 100);
    }

    #[test]
    fn test_axis_alignment_thresholds() {
        assert_eq!(axis_alignment(0.5, 0.45).level, AlignmentLevel::VerySimilar);
        assert_eq!(axis_alignment(0.5, 0.3).level, AlignmentLevel::Similar);
        assert_eq!(axis_alignment(0.5, 0.1).level, AlignmentLevel::SomewhatDifferent);
        assert_eq!(axis_alignment(0.5, 0.0).level, AlignmentLevel::Different);
        assert_eq!(axis_alignment(-1.0, 1.0).match_percent, 0);
        assert_eq!(axis_alignment(0.2, 0.2).match_percent, 100);
        assert_eq!(axis_alignment(0.0, 0.5).match_percent, 75);
    }

    #[test]
    fn test_alignment_symbols() {
        assert_eq!(axis_alignment(0.0, 0.0).symbol(), "✓");
        assert_eq!(axis_alignment(0.0, 0.2).symbol(), "✓");
        assert_eq!(axis_alignment(0.0, 0.4).symbol(), "~");
        assert_eq!(axis_alignment(0.0, 0.9).symbol(), "✗");
    }

    #[test]
    fn test_closest_per_axis() {
        let entities = vec![
            entity("a", pos(0.9, -0.5, 0.0)),
            entity("b", pos(0.0, 0.4, -0.9)),
        ];
        let user = pos(0.8, 0.5, 0.0);
        let result = closest_per_axis(&user, &entities);

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].axis, Axis::Statism);
        assert_eq!(result[0].entity.id, "a");
        assert!((result[0].difference - 0.1).abs() < 1e-12);
        assert_eq!(result[0].value, 0.9);
        assert_eq!(result[1].entity.id, "b");
        assert_eq!(result[2].entity.id, "a");
    }

    #[test]
    fn test_closest_per_axis_tie_keeps_catalog_order() {
        let entities = vec![entity("first", pos(0.2, 0.0, 0.0)), entity("second", pos(-0.2, 0.0, 0.0))];
        let result = closest_per_axis(&Position::ORIGIN, &entities);
        assert_eq!(result[0].entity.id, "first");
    }

    #[test]
    fn test_axis_extremes() {
        let entities = vec![
            entity("mid", pos(0.0, 0.0, 0.0)),
            entity("low", pos(-0.8, 0.0, 0.0)),
            entity("high", pos(0.9, 0.0, 0.0)),
        ];
        let extremes = axis_extremes(Axis::Statism, &entities).unwrap();
        assert_eq!(extremes.min.id, "low");
        assert_eq!(extremes.max.id, "high");
        assert!((extremes.range - 1.7).abs() < 1e-12);
    }

    #[test]
    fn test_political_lean() {
        assert_eq!(
            political_lean(&pos(0.5, 0.5, 0.9)),
            PoliticalLean::Compound(LeanPole::Statist, LeanPole::Pluralist)
        );
        assert_eq!(
            political_lean(&pos(-0.5, 0.1, -0.9)),
            PoliticalLean::Single(LeanPole::MarketOriented)
        );
        assert_eq!(
            political_lean(&pos(0.0, -0.31, 0.0)),
            PoliticalLean::Single(LeanPole::Majoritarian)
        );
        // SID never contributes
        assert_eq!(political_lean(&pos(0.3, -0.3, 1.0)), PoliticalLean::CentristModerate);
    }

    #[test]
    fn test_lean_keys() {
        let lean = PoliticalLean::Compound(LeanPole::Statist, LeanPole::Majoritarian);
        assert_eq!(lean.keys(), vec!["lean.statist", "lean.majoritarian"]);
        assert_eq!(PoliticalLean::CentristModerate.keys(), vec!["lean.centristModerate"]);
        assert_eq!(axis_lean(0.0, Axis::Sid), LeanPole::Balanced);
    }

    #[test]
    fn test_interpretations() {
        assert_eq!(interpret_distance(0.29), DistanceBand::VerySimilar);
        assert_eq!(interpret_distance(0.3), DistanceBand::Moderate);
        assert_eq!(interpret_distance(0.99), DistanceBand::Significant);
        assert_eq!(interpret_distance(1.0), DistanceBand::VeryDifferent);

        assert_eq!(interpret_match(80), MatchBand::Strong);
        assert_eq!(interpret_match(79), MatchBand::Moderate);
        assert_eq!(interpret_match(40), MatchBand::Some);
        assert_eq!(interpret_match(39), MatchBand::Low);
    }

    #[test]
    fn test_comparative() {
        assert_eq!(comparative(0.5, 0.4), Comparative::Similar);
        assert_eq!(comparative(0.5, 0.1), Comparative::FavorMore);
        assert_eq!(comparative(-0.5, 0.1), Comparative::FavorLess);
        assert_eq!(Comparative::FavorMore.key(Axis::Sid), "comparison.sid.youFavorMore");
    }

    #[test]
    fn test_detailed_comparison() {
        let user = pos(0.5, 0.0, -0.5);
        let target = pos(0.5, 0.4, 0.5);
        let detail = detailed_comparison(&user, &target);

        assert_eq!(detail.alignments[0].level, AlignmentLevel::VerySimilar);
        assert_eq!(detail.alignments[1].level, AlignmentLevel::SomewhatDifferent);
        assert_eq!(detail.alignments[2].level, AlignmentLevel::Different);
        assert_eq!(detail.match_score, match_score(&user, &target));
    }

    #[test]
    fn test_positions_rank_directly() {
        let catalog = vec![pos(0.9, 0.9, 0.9), pos(0.1, 0.1, 0.1)];
        let best = closest(&Position::ORIGIN, &catalog).unwrap();
        assert_eq!(*best.entity, pos(0.1, 0.1, 0.1));
    }
}

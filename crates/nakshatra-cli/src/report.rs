//! Display-ready views of scoring and comparison results.
//!
//! Everything here has its message keys already resolved, so the formatter
//! only lays text out.

use crate::error::Result;
use crate::messages::Messages;
use nakshatra_catalog::Catalog;
use nakshatra_domain::comparison::{self, Comparative};
use nakshatra_domain::labeling::{axis_description, axis_examples, axis_label};
use nakshatra_domain::traits::MessageCatalog;
use nakshatra_domain::{scoring, Axis, Entity, EntityKind, Position, Question, ResponseSet};
use nakshatra_share::SharedPosition;
use serde::Serialize;

/// One axis of a scored position.
#[derive(Debug, Clone, Serialize)]
pub struct AxisScore {
    /// Axis id
    pub axis: &'static str,
    /// Display name
    pub name: String,
    /// Canonical coordinate
    pub value: f64,
    /// Descriptive label
    pub label: String,
}

/// Result of scoring a response set.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    /// Computed position
    pub position: SharedPosition,
    /// Catalog questions answered
    pub answered: usize,
    /// Catalog size
    pub total: usize,
    /// Completion percentage
    pub completion: u8,
    /// Whether every question was answered
    pub complete: bool,
    /// Per-axis labels
    pub axes: Vec<AxisScore>,
    /// Composite lean
    pub lean: String,
    /// Share token for the position
    pub token: String,
}

/// Entity nearest to the user on one axis.
#[derive(Debug, Clone, Serialize)]
pub struct Nearest {
    /// Entity id
    pub id: String,
    /// Display name
    pub name: String,
    /// Entity's coordinate on the axis
    pub value: f64,
    /// Absolute difference from the user
    pub difference: f64,
}

/// Full explanation of one axis.
#[derive(Debug, Clone, Serialize)]
pub struct AxisReport {
    /// Axis id
    pub axis: &'static str,
    /// Display name
    pub name: String,
    /// Canonical coordinate
    pub value: f64,
    /// Descriptive label
    pub label: String,
    /// Single-axis lean word
    pub lean: String,
    /// Prose description
    pub description: String,
    /// Example statements
    pub examples: Vec<String>,
    /// Closest party on this axis
    pub closest_party: Option<Nearest>,
    /// Closest leader on this axis
    pub closest_leader: Option<Nearest>,
    /// Where the parties sit on this axis
    pub party_spread: Option<AxisSpread>,
}

/// Lowest and highest party on one axis.
#[derive(Debug, Clone, Serialize)]
pub struct AxisSpread {
    /// Party with the lowest coordinate
    pub min: Nearest,
    /// Party with the highest coordinate
    pub max: Nearest,
    /// Distance between the two
    pub range: f64,
}

/// One row of a ranked comparison.
#[derive(Debug, Clone, Serialize)]
pub struct RankingRow {
    /// 1-based rank
    pub rank: usize,
    /// Entity id
    pub id: String,
    /// Full name
    pub name: String,
    /// Abbreviation, when the entity has one
    pub short_name: Option<String>,
    /// 3D distance
    pub distance: f64,
    /// Match percentage
    pub match_score: u8,
    /// Match band text
    pub band: String,
}

/// Per-axis alignment against one target.
#[derive(Debug, Clone, Serialize)]
pub struct AlignmentRow {
    /// Axis id
    pub axis: &'static str,
    /// Display name
    pub name: String,
    /// User coordinate
    pub user: f64,
    /// Target coordinate
    pub target: f64,
    /// ✓, ~ or ✗
    pub symbol: &'static str,
    /// Alignment level text
    pub level: String,
    /// Single-axis match percentage
    pub match_percent: u8,
    /// Comparative sentence
    pub sentence: String,
}

/// Detailed comparison against one target.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    /// Target id
    pub id: String,
    /// Target display name
    pub name: String,
    /// `party` or `leader`
    pub kind: &'static str,
    /// Ideology tags
    pub ideology: Vec<String>,
    /// Key policies
    pub key_policies: Vec<String>,
    /// The leader's party, for leaders
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,
    /// The party's leaders, for parties
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub leaders: Vec<String>,
    /// 3D distance
    pub distance: f64,
    /// Match percentage
    pub match_score: u8,
    /// Distance band text
    pub verdict: String,
    /// Per-axis rows
    pub alignments: Vec<AlignmentRow>,
}

/// Everything `explain` prints.
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    /// Explained position
    pub position: SharedPosition,
    /// Composite lean
    pub lean: String,
    /// Per-axis reports
    pub axes: Vec<AxisReport>,
    /// Detailed comparison with the closest party
    pub closest_party: Option<ComparisonReport>,
    /// Share token for the position
    pub token: String,
}

fn axis_name(axis: Axis, messages: &Messages) -> String {
    messages.resolve(&format!("axes.{}.name", axis.as_str()))
}

/// Composite lean text, e.g. "Statist Pluralist".
pub fn lean_text(position: &Position, messages: &Messages) -> String {
    comparison::political_lean(position)
        .keys()
        .iter()
        .map(|key| messages.resolve(key))
        .collect::<Vec<_>>()
        .join(" ")
}

fn axis_scores(position: &Position, messages: &Messages) -> Vec<AxisScore> {
    Axis::ALL
        .iter()
        .map(|&axis| {
            let value = position.get(axis);
            AxisScore {
                axis: axis.as_str(),
                name: axis_name(axis, messages),
                value,
                label: axis_label(value, axis).render(messages),
            }
        })
        .collect()
}

/// Score a response set against the question catalog.
pub fn score(responses: &ResponseSet, questions: &[Question], messages: &Messages) -> Result<ScoreReport> {
    let position = scoring::score_all(responses, questions);

    Ok(ScoreReport {
        position: SharedPosition::from(&position),
        answered: scoring::answered_count(responses, questions),
        total: questions.len(),
        completion: scoring::completion_percent(responses, questions),
        complete: scoring::is_complete(responses, questions),
        axes: axis_scores(&position, messages),
        lean: lean_text(&position, messages),
        token: nakshatra_share::encode(&position)?,
    })
}

/// Rank entities closest first, optionally keeping only the top `limit`.
pub fn ranking(user: &Position, entities: &[Entity], limit: Option<usize>, messages: &Messages) -> Vec<RankingRow> {
    comparison::rank_by_distance(user, entities)
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .enumerate()
        .map(|(i, ranked)| RankingRow {
            rank: i + 1,
            id: ranked.entity.id.clone(),
            name: ranked.entity.name.clone(),
            short_name: ranked.entity.short_name.clone(),
            distance: ranked.distance,
            match_score: ranked.match_score,
            band: messages.resolve(comparison::interpret_match(ranked.match_score).key()),
        })
        .collect()
}

/// Distance, match and per-axis alignment against one entity.
pub fn compare_with(
    user: &Position,
    target: &Entity,
    catalog: &Catalog,
    messages: &Messages,
) -> ComparisonReport {
    let detail = comparison::detailed_comparison(user, &target.position);
    let target_name = target.display_name();

    let alignments = Axis::ALL
        .iter()
        .zip(detail.alignments.iter())
        .map(|(&axis, alignment)| {
            let user_value = user.get(axis);
            let target_value = target.position.get(axis);
            let sentence: Comparative = comparison::comparative(user_value, target_value);
            AlignmentRow {
                axis: axis.as_str(),
                name: axis_name(axis, messages),
                user: user_value,
                target: target_value,
                symbol: alignment.symbol(),
                level: messages.resolve(alignment.level.key()),
                match_percent: alignment.match_percent,
                sentence: messages.resolve_with_target(&sentence.key(axis), target_name),
            }
        })
        .collect();

    let (party, leaders) = match target.kind {
        EntityKind::Party => (
            None,
            catalog
                .leaders_of_party(&target.id)
                .into_iter()
                .map(|leader| leader.name.clone())
                .collect(),
        ),
        EntityKind::Leader => (
            target
                .attribute("party_id")
                .map(|id| catalog.party(id).map_or(id, Entity::display_name).to_string()),
            Vec::new(),
        ),
    };

    ComparisonReport {
        id: target.id.clone(),
        name: target_name.to_string(),
        kind: target.kind.as_str(),
        ideology: target.ideology().to_vec(),
        key_policies: target.attribute_list("key_policies").to_vec(),
        party,
        leaders,
        distance: detail.distance,
        match_score: detail.match_score,
        verdict: messages.resolve(comparison::interpret_distance(detail.distance).key()),
        alignments,
    }
}

fn nearest(entity: &Entity, axis: Axis, user_value: f64) -> Nearest {
    let value = entity.position.get(axis);
    Nearest {
        id: entity.id.clone(),
        name: entity.display_name().to_string(),
        value,
        difference: (user_value - value).abs(),
    }
}

fn spread(axis: Axis, user_value: f64, entities: &[Entity]) -> Option<AxisSpread> {
    comparison::axis_extremes(axis, entities).map(|extremes| AxisSpread {
        min: nearest(extremes.min, axis, user_value),
        max: nearest(extremes.max, axis, user_value),
        range: extremes.range,
    })
}

fn nearest_by_axis(user: &Position, entities: &[Entity]) -> Vec<Option<Nearest>> {
    let found = comparison::closest_per_axis(user, entities);
    Axis::ALL
        .iter()
        .map(|&axis| {
            found.iter().find(|c| c.axis == axis).map(|c| Nearest {
                id: c.entity.id.clone(),
                name: c.entity.display_name().to_string(),
                value: c.value,
                difference: c.difference,
            })
        })
        .collect()
}

/// Labels, descriptions, examples and nearest entities for a position.
pub fn explain(position: &Position, catalog: &Catalog, messages: &Messages) -> Result<Explanation> {
    let parties = nearest_by_axis(position, catalog.parties());
    let leaders = nearest_by_axis(position, catalog.leaders());

    let axes = Axis::ALL
        .iter()
        .zip(parties.into_iter().zip(leaders))
        .map(|(&axis, (closest_party, closest_leader))| {
            let value = position.get(axis);
            AxisReport {
                axis: axis.as_str(),
                name: axis_name(axis, messages),
                value,
                label: axis_label(value, axis).render(messages),
                lean: messages.resolve(comparison::axis_lean(value, axis).key()),
                description: messages.resolve(&axis_description(value).key(axis)),
                examples: axis_examples(value, axis).resolve(messages),
                closest_party,
                closest_leader,
                party_spread: spread(axis, value, catalog.parties()),
            }
        })
        .collect();

    let closest_party = comparison::closest(position, catalog.parties())
        .map(|ranked| compare_with(position, ranked.entity, catalog, messages));

    Ok(Explanation {
        position: SharedPosition::from(position),
        lean: lean_text(position, messages),
        axes,
        closest_party,
        token: nakshatra_share::encode(position)?,
    })
}

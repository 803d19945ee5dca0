//! Integration tests for nakshatra-catalog
//!
//! Loads catalogs from disk, validates them and runs them through the
//! scoring engine.

use std::fs;

use nakshatra_catalog::loader::{load_entities, load_questions};
use nakshatra_catalog::{Catalog, CatalogError, ValidationConfig};
use nakshatra_domain::comparison;
use nakshatra_domain::{scoring, EntityKind, ResponseSet};
use tempfile::TempDir;

#[test]
fn test_custom_catalog_from_files() {
    let dir = TempDir::new().unwrap();
    let questions_path = dir.path().join("questions.json");
    let parties_path = dir.path().join("parties.toml");

    fs::write(
        &questions_path,
        r#"{"questions": [
            {"id": "A1", "axis": "statism"},
            {"id": "A2", "axis": "statism", "reverse": true},
            {"id": "B1", "axis": "recognition"},
            {"id": "B2", "axis": "recognition", "reverse": true},
            {"id": "C1", "axis": "sid"},
            {"id": "C2", "axis": "sid", "reverse": true}
        ]}"#,
    )
    .unwrap();
    fs::write(
        &parties_path,
        r#"
        scale = 10.0

        [[entities]]
        id = "statist"
        name = "Statist Front"
        position = { statism = 9.0, recognition = 0.0, sid = 0.0 }

        [[entities]]
        id = "market"
        name = "Market League"
        position = { statism = -9.0, recognition = 0.0, sid = 0.0 }
        "#,
    )
    .unwrap();

    let questions = load_questions(&questions_path).unwrap();
    let parties = load_entities(&parties_path, Some(EntityKind::Party)).unwrap();
    let catalog = Catalog::builtin()
        .unwrap()
        .with_questions(questions)
        .with_parties(parties)
        .validated(&ValidationConfig::strict())
        .unwrap();

    let responses = ResponseSet::from_raw(vec![("A1", 5), ("A2", 1)]).unwrap();
    let position = scoring::score_all(&responses, catalog.questions());
    assert_eq!(position.statism(), 1.0);

    let ranked = comparison::rank_by_distance(&position, catalog.parties());
    assert_eq!(ranked[0].entity.id, "statist");
    assert_eq!(ranked[1].entity.id, "market");
}

#[test]
fn test_duplicate_ids_rejected_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("questions.toml");
    fs::write(
        &path,
        r#"
        [[questions]]
        id = "X"
        axis = "statism"
        [[questions]]
        id = "X"
        axis = "statism"
        reverse = true
        "#,
    )
    .unwrap();

    let questions = load_questions(&path).unwrap();
    let err = Catalog::builtin()
        .unwrap()
        .with_questions(questions)
        .validated(&ValidationConfig::permissive())
        .unwrap_err();

    assert!(matches!(err, CatalogError::Rejected(_)));
    assert!(err.to_string().contains("duplicate question id 'X'"));
}

#[test]
fn test_out_of_scale_entity_fails_to_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("leaders.toml");
    fs::write(
        &path,
        r#"
        kind = "leader"
        [[entities]]
        id = "far"
        name = "Too Far"
        position = { statism = 2.0, recognition = 0.0, sid = 0.0 }
        "#,
    )
    .unwrap();

    let err = load_entities(&path, None).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidRecord { .. }));
}

#[test]
fn test_builtin_completion_scores_every_axis() {
    let catalog = Catalog::builtin().unwrap();
    let mut responses = ResponseSet::new();
    for question in catalog.questions() {
        let value = if question.reverse { 1 } else { 5 };
        responses.answer(question.id.clone(), value).unwrap();
    }

    assert!(scoring::is_complete(&responses, catalog.questions()));
    let position = scoring::score_all(&responses, catalog.questions());
    assert_eq!(position.statism(), 1.0);
    assert_eq!(position.recognition(), 1.0);
    assert_eq!(position.sid(), 1.0);
}

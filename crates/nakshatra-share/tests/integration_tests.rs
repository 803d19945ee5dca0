//! Integration tests for nakshatra-share

use nakshatra_domain::{comparison, Axis, Entity, EntityKind, Position, Question, QuizSession};
use nakshatra_share::{decode, encode, SessionSnapshot, ShareError};

#[test]
fn test_shared_result_ranks_like_original() {
    let parties = vec![
        Entity::new("a", EntityKind::Party, "A", Position::new(0.4, -0.7, -0.3).unwrap()),
        Entity::new("b", EntityKind::Party, "B", Position::new(0.5, 0.6, -0.5).unwrap()),
    ];
    let original = Position::new(0.4444, 0.5833, -0.4167).unwrap();

    let shared = decode(&encode(&original).unwrap()).unwrap();

    let before = comparison::rank_by_distance(&original, &parties);
    let after = comparison::rank_by_distance(&shared, &parties);
    assert_eq!(before[0].entity.id, after[0].entity.id);
    assert_eq!(shared, Position::new(0.44, 0.58, -0.42).unwrap());
}

#[test]
fn test_tampered_token_is_reported() {
    let token = encode(&Position::ORIGIN).unwrap();
    let truncated = &token[..token.len() / 2];
    let err = decode(truncated).unwrap_err();
    assert!(matches!(err, ShareError::Base64(_) | ShareError::Json(_)));
}

#[test]
fn test_snapshot_resume_mid_quiz() {
    let questions = vec![
        Question::new("ST_01", Axis::Statism, false),
        Question::new("ST_02", Axis::Statism, true),
        Question::new("RC_01", Axis::Recognition, false),
    ];
    let mut session = QuizSession::new(&questions);
    session.answer_current(5).unwrap();
    session.next();
    session.answer_current(1).unwrap();
    session.next();

    let json = SessionSnapshot::capture(&session).to_json().unwrap();
    let mut resumed = SessionSnapshot::from_json(&json).unwrap().restore(&questions).unwrap();

    assert_eq!(resumed.current_index(), 2);
    assert!(!resumed.can_proceed());
    resumed.answer_current(3).unwrap();
    let position = resumed.calculate().unwrap();
    assert_eq!(position.statism(), 1.0);
    assert_eq!(position.recognition(), 0.0);
}

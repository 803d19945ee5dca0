//! Integration tests for nakshatra-cli
//!
//! Drives the library the way the binary does: configuration, catalog,
//! answers file, report and formatter.

use std::fs;

use nakshatra_cli::cli::ValidateArgs;
use nakshatra_cli::commands::execute_validate;
use nakshatra_cli::config::OutputFormat;
use nakshatra_cli::input::load_answers;
use nakshatra_cli::{report, Config, Formatter, Messages};
use nakshatra_domain::Position;
use tempfile::TempDir;

#[test]
fn test_answers_file_to_json_report() {
    let dir = TempDir::new().unwrap();
    let config = Config::default();
    let catalog = config.catalog().unwrap();
    let messages = Messages::english().unwrap();

    // Strongly agree with every forward item, strongly disagree with reverse ones
    let answers: String = catalog
        .questions()
        .iter()
        .map(|q| format!("{} = {}\n", q.id, if q.reverse { 1 } else { 5 }))
        .collect();
    let path = dir.path().join("answers.toml");
    fs::write(&path, answers).unwrap();

    let responses = load_answers(&path).unwrap();
    let report = report::score(&responses, catalog.questions(), &messages).unwrap();
    assert!(report.complete);
    assert_eq!(report.completion, 100);

    let json = Formatter::new(OutputFormat::Json, false).format_score(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["position"]["statism"], 1.0);
    assert_eq!(value["lean"], "Statist Pluralist");

    let shared = nakshatra_share::decode(value["token"].as_str().unwrap()).unwrap();
    assert_eq!(shared, Position::new(1.0, 1.0, 1.0).unwrap());
}

#[test]
fn test_config_file_overrides_catalog() {
    let dir = TempDir::new().unwrap();
    let leaders = dir.path().join("leaders.toml");
    fs::write(
        &leaders,
        r#"
        [[entities]]
        id = "solo"
        name = "Solo Leader"
        position = { statism = 0.0, recognition = 0.0, sid = 0.0 }
        attributes = { region = "National" }
        "#,
    )
    .unwrap();

    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!("[catalog]\nleaders = {:?}\n", leaders.display().to_string()),
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();
    let catalog = config.catalog().unwrap();
    assert_eq!(catalog.leaders().len(), 1);
    assert_eq!(catalog.leaders()[0].id, "solo");
    assert_eq!(catalog.parties().len(), 8);
}

#[test]
fn test_validate_rejects_bad_weights() {
    let dir = TempDir::new().unwrap();
    let questions = dir.path().join("questions.toml");
    fs::write(
        &questions,
        r#"
        [[questions]]
        id = "A"
        axis = "statism"
        weight = -1.0
        "#,
    )
    .unwrap();

    let args = ValidateArgs {
        questions: Some(questions),
        parties: None,
        leaders: None,
        strict: false,
    };
    let formatter = Formatter::new(OutputFormat::Quiet, false);
    assert!(execute_validate(args, &Config::default(), &formatter).is_err());
}

#[test]
fn test_builtin_catalog_validates() {
    let args = ValidateArgs {
        questions: None,
        parties: None,
        leaders: None,
        strict: true,
    };
    let formatter = Formatter::new(OutputFormat::Quiet, false);
    assert!(execute_validate(args, &Config::default(), &formatter).is_ok());
}

use std::fs;
use std::path::Path;

use quizcheck::output::JsonOutput;
use quizcheck::parser::{self, free_text, structured, InputFormat, ParseError};
use tempfile::tempdir;

#[test]
fn test_json_file_routes_to_structured_loader() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quiz.json");
    fs::write(
        &path,
        r#"{"questions":[{"id":2,"text":"Q?","variants":[{"id":1,"text":"v"}],"correct":1}]}"#,
    )
    .unwrap();

    let set = parser::parse_path(&path).unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set.questions[0].id, 2);
    assert_eq!(set.questions[0].correct, Some(1));
}

#[test]
fn test_unknown_extension_routes_to_free_text() {
    assert_eq!(detect("quiz.dat"), InputFormat::Text);
    assert_eq!(detect("quiz"), InputFormat::Text);
    assert_eq!(detect("quiz.Json.bak"), InputFormat::Text);
    assert_eq!(detect("quiz.JSON"), InputFormat::Json);
}

fn detect(name: &str) -> InputFormat {
    parser::detect_format(Path::new(name))
}

#[test]
fn test_malformed_json_names_the_problem() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("quiz.json");
    fs::write(&path, r#"{"questions":[{"id":1,"variants":[]}]}"#).unwrap();

    match parser::parse_path(&path) {
        Err(ParseError::MalformedStructured { message }) => {
            assert!(message.contains("text"), "message was: {message}");
        }
        other => panic!("expected MalformedStructured, got {other:?}"),
    }
}

#[test]
fn test_structured_loader_does_not_repair() {
    // A dangling correct reference is rejected, never silently cleared.
    let json = r#"{"questions":[{"id":1,"text":"Q?","variants":[],"correct":3}]}"#;
    assert!(matches!(
        structured::load_str(json),
        Err(ParseError::InvalidModel { .. })
    ));
}

#[test]
fn test_schema_round_trip_through_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("canonical.json");

    let original = free_text::parse_str(
        "1. What is a lifetime?\na) A scope annotation\nb) *A borrow validity region\n\n4. Unmarked?\na) x\n",
    );
    JsonOutput::new(&original).write_to_file(&path).unwrap();

    let reloaded = parser::parse_path(&path).unwrap();
    assert_eq!(original, reloaded);
}

#[test]
fn test_mislabeled_text_file_parses_as_free_text() {
    // The detection default: no .json extension means free text, even if
    // the content would have loaded as JSON.
    let dir = tempdir().unwrap();
    let path = dir.path().join("quiz.txt");
    fs::write(&path, r#"{"questions":[]}"#).unwrap();

    let set = parser::parse_path(&path).unwrap();
    // Parsed as one unnumbered question whose text is the JSON line.
    assert_eq!(set.len(), 1);
    assert_eq!(set.questions[0].text, r#"{"questions":[]}"#);
}

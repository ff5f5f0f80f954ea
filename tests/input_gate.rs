//! The checks applied to user input before the pair predicate runs.

use eulerbrick::{AppConfig, CheckError, CheckerApp, Position, Triple};

#[test]
fn test_valid_pair_from_text() {
    let app = CheckerApp::default();
    let verdict = app.evaluate(" (44, 117, 125) ", "[117, 240, 267]").unwrap();

    assert!(verdict.is_euler());
    assert_eq!(verdict.first, Triple::new(44, 117, 125));
    assert_eq!(verdict.second, Triple::new(117, 240, 267));
}

#[test]
fn test_unparseable_input() {
    let app = CheckerApp::default();
    for (first, second) in [("3,4", "3,4,5"), ("3,4,5", "a,b,c"), ("", "")] {
        let err = app.evaluate(first, second).unwrap_err();
        assert_eq!(err, CheckError::Unparseable);
        assert_eq!(
            err.to_string(),
            "Please enter valid triples in the format: 3,4,5 or (3,4,5) or [3,4,5]"
        );
    }
}

#[test]
fn test_identical_checked_before_validity() {
    let app = CheckerApp::default();
    assert_eq!(app.evaluate("1,2,3", "(1, 2, 3)"), Err(CheckError::Identical));
}

#[test]
fn test_reordered_triples_are_not_identical() {
    let app = CheckerApp::default();
    let verdict = app.evaluate("3,4,5", "4,3,5").unwrap();
    assert!(!verdict.is_euler());
}

#[test]
fn test_invalid_triple_names_position() {
    let app = CheckerApp::default();

    let err = app.evaluate("117,240,266", "117,240,267").unwrap_err();
    assert_eq!(
        err,
        CheckError::NotPythagorean {
            position: Position::First,
            triple: Triple::new(117, 240, 266),
        }
    );

    let err = app.evaluate("44,117,125", "117,240,266").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Second triple (117, 240, 266) is not a valid Pythagorean triple"
    );
}

#[test]
fn test_permissive_by_default() {
    let app = CheckerApp::default();
    assert!(!app.evaluate("0,0,0", "3,4,5").unwrap().is_euler());
    assert!(!app.evaluate("-3,4,5", "3,4,5").unwrap().is_euler());
}

#[test]
fn test_strict_positive_rejects_second() {
    let app = CheckerApp::new(AppConfig {
        strict_positive: true,
        ..AppConfig::default()
    });

    let err = app.evaluate("3,4,5", "-3,4,5").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Second triple (-3, 4, 5) must contain only positive integers"
    );
    assert!(app.evaluate("44,117,125", "117,240,267").unwrap().is_euler());
}

use std::io::Cursor;
use std::path::Path;

use scoreplot::{load_scores, parse_scores, ScorePlotError, Scores, EXPECTED_SCORES};

fn parse(text: &str) -> Result<Scores, ScorePlotError> {
    parse_scores(Cursor::new(text), Path::new("scores.txt"))
}

#[test]
fn loads_values_in_line_order() {
    let scores = parse("0.5\n1.2\n0.8\n").unwrap();
    assert_eq!(scores.values(), &[0.5, 1.2, 0.8]);
    assert_eq!(scores.points(), vec![[1.0, 0.5], [2.0, 1.2], [3.0, 0.8]]);
}

#[test]
fn full_ranking_file() {
    let text: String = (0..EXPECTED_SCORES).map(|i| format!("{}\n", i as f64 * 0.1)).collect();
    let scores = parse(&text).unwrap();
    assert_eq!(scores.len(), 27);
    assert_eq!(scores.points()[26], [27.0, 26.0 * 0.1]);
}

#[test]
fn length_is_not_enforced() {
    let text: String = (0..40).map(|i| format!("{i}\n")).collect();
    assert_eq!(parse(&text).unwrap().len(), 40);
}

#[test]
fn empty_input_gives_empty_scores() {
    let scores = parse("").unwrap();
    assert!(scores.is_empty());
    assert!(scores.points().is_empty());
}

#[test]
fn missing_trailing_newline_and_whitespace() {
    let scores = parse("  1.5 \r\n-2e-3").unwrap();
    assert_eq!(scores.values(), &[1.5, -0.002]);
}

#[test]
fn non_numeric_line_fails_with_line_number() {
    match parse("1.0\nabc\n2.0\n") {
        Err(ScorePlotError::Parse { line, text, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(text, "abc");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn digit_separators_are_rejected() {
    assert!(matches!(
        parse("1_000\n"),
        Err(ScorePlotError::Parse { line: 1, .. })
    ));
}

#[test]
fn blank_line_in_the_middle_fails() {
    assert!(matches!(
        parse("1.0\n\n2.0\n"),
        Err(ScorePlotError::Parse { line: 2, .. })
    ));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_scores(dir.path().join("scores.txt")).unwrap_err();
    assert!(matches!(err, ScorePlotError::Io { .. }));
}

#[test]
fn load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scores.txt");
    std::fs::write(&path, "0.5\n1.2\n0.8\n").unwrap();
    assert_eq!(load_scores(&path).unwrap().values(), &[0.5, 1.2, 0.8]);
}

#[test]
fn bad_input_produces_no_image() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("scores.txt");
    let output = dir.path().join("scores.png");
    std::fs::write(&input, "0.5\nnope\n").unwrap();

    let cfg = scoreplot::ScorePlotConfig::default();
    let result = load_scores(&input).and_then(|s| scoreplot::render_png(&s, &cfg, &output));
    assert!(result.is_err());
    assert!(!output.exists());
}

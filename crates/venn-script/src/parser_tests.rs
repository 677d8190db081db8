//! Unit tests for the script parser and validator.

use proptest::prelude::*;

use venn_core::{identifier::Id, scale::StageEdge};

use crate::{
    Command, Script,
    error::{ErrorCode, ParseError, Severity},
    lexer, parser,
};

fn parse_source(source: &str) -> Result<Script, ParseError> {
    let tokens = lexer::tokenize(source)?;
    parser::build_script(&tokens)
}

fn parse_ok(source: &str) -> Script {
    parse_source(source).unwrap_or_else(|e| panic!("expected {source:?} to parse: {e}"))
}

/// Parse, expect failure, and return the error codes in order.
fn error_codes(source: &str) -> Vec<ErrorCode> {
    let err = parse_source(source).expect_err("expected parsing to fail");
    err.diagnostics().iter().filter_map(|d| d.code()).collect()
}

fn default_ids() -> Vec<Id> {
    ["cultural", "leadership", "agile", "change", "robust", "intent"]
        .into_iter()
        .map(Id::new)
        .collect()
}

#[test]
fn test_every_command_parses() {
    let script = parse_ok(
        r#"
        click intent
        background
        handle
        drag 450 400.5
        release
        resize 1.5 0.75
        value intent Medium
        stage intent start "Eval + Adapt"
        rate intent 4
        unrate intent
        place agile 300 -20
        "#,
    );

    let commands: Vec<&Command> = script.commands().iter().map(|c| c.inner()).collect();
    assert_eq!(commands.len(), 11);

    assert!(matches!(commands[0], Command::Click { id } if *id.inner() == "intent"));
    assert_eq!(commands[1], &Command::Background);
    assert_eq!(commands[2], &Command::Handle);
    assert!(matches!(commands[3], Command::Drag { x, y } if *x == 450.0 && *y == 400.5));
    assert_eq!(commands[4], &Command::Release);
    assert!(
        matches!(commands[5], Command::Resize { scale_x, scale_y } if *scale_x == 1.5 && *scale_y == 0.75)
    );
    assert!(matches!(commands[6], Command::Value { value, .. } if value.inner() == "Medium"));
    assert!(matches!(
        commands[7],
        Command::Stage { edge: StageEdge::Start, stage, .. } if stage.inner() == "Eval + Adapt"
    ));
    assert!(matches!(commands[8], Command::Rate { rating, .. } if rating.get() == 4));
    assert!(matches!(commands[9], Command::Unrate { id } if *id.inner() == "intent"));
    assert!(matches!(commands[10], Command::Place { x, y, .. } if *x == 300.0 && *y == -20.0));
}

#[test]
fn test_comments_blank_lines_and_case() {
    let script = parse_ok("// setup\n\nCLICK agile // select\n   \nRelease\n");
    assert_eq!(script.len(), 2);
    assert_eq!(script.commands()[1].inner(), &Command::Release);
}

#[test]
fn test_empty_script() {
    assert!(parse_ok("").is_empty());
    assert!(parse_ok("// only a comment\n").is_empty());
}

#[test]
fn test_command_span_covers_line() {
    let script = parse_ok("release\nplace intent 1 2\n");
    let span = script.commands()[1].span();
    assert_eq!(span.start(), 8);
    assert_eq!(span.end(), 24);
}

#[test]
fn test_unknown_command() {
    let err = parse_source("clik intent").unwrap_err();
    let diag = &err.diagnostics()[0];

    assert_eq!(diag.code(), Some(ErrorCode::E102));
    assert_eq!(diag.labels()[0].span().start(), 0);
    assert_eq!(diag.labels()[0].span().end(), 4);
    assert!(diag.help().unwrap().contains("click"));
}

#[test]
fn test_line_must_start_with_command() {
    assert_eq!(error_codes("42 intent"), vec![ErrorCode::E100]);
}

#[test]
fn test_missing_argument() {
    let err = parse_source("drag 10").unwrap_err();
    let diag = &err.diagnostics()[0];

    assert_eq!(diag.code(), Some(ErrorCode::E101));
    assert_eq!(diag.message(), "missing y coordinate");
    assert!(diag.labels()[0].span().is_empty());
    assert_eq!(diag.labels()[0].span().start(), 7);
    assert_eq!(diag.help(), Some("usage: drag <x> <y>"));
}

#[test]
fn test_wrong_argument_kind() {
    let err = parse_source("drag ten 20").unwrap_err();
    let diag = &err.diagnostics()[0];

    assert_eq!(diag.code(), Some(ErrorCode::E100));
    assert_eq!(diag.message(), "expected x coordinate, found `ten`");
    assert_eq!(diag.labels()[0].span().start(), 5);
}

#[test]
fn test_extra_argument() {
    assert_eq!(error_codes("release now"), vec![ErrorCode::E103]);
}

#[test]
fn test_invalid_rating_and_edge() {
    assert_eq!(error_codes("rate intent 2.5"), vec![ErrorCode::E104]);
    assert_eq!(error_codes("stage intent middle Impact"), vec![ErrorCode::E105]);
}

#[test]
fn test_all_line_errors_collected() {
    let codes = error_codes("clik intent\ndrag 1\nclick intent\nrelease now\n");
    assert_eq!(codes, vec![ErrorCode::E102, ErrorCode::E101, ErrorCode::E103]);
}

#[test]
fn test_lexer_errors_stop_before_parsing() {
    // The unknown command on line 2 is not reported while the file does not lex
    let codes = error_codes("value intent \"Medium\nclik");
    assert_eq!(codes, vec![ErrorCode::E001]);
}

#[test]
fn test_validate_unknown_region_is_warning() {
    let script = parse_ok("click intnet\nrate intnet 9\n");
    let warnings = script.validate(&default_ids());

    // A rating for an unknown region is only reported once, as unknown region
    assert_eq!(warnings.len(), 2);
    assert!(warnings.iter().all(|w| w.severity() == Severity::Warning));
    assert!(warnings.iter().all(|w| w.code() == Some(ErrorCode::E200)));
    assert!(warnings[0].help().unwrap().contains("agile, change, cultural"));
}

#[test]
fn test_validate_axis_values_and_ratings() {
    let script = parse_ok(
        "value intent Huge\nstage intent end Later\nrate intent 0\nvalue intent med\nstage intent start \"Eval + Adapt\"\n",
    );
    let codes: Vec<_> = script
        .validate(&default_ids())
        .iter()
        .filter_map(|w| w.code())
        .collect();

    assert_eq!(codes, vec![ErrorCode::E201, ErrorCode::E201, ErrorCode::E202]);
}

#[test]
fn test_validate_clean_script() {
    let script = parse_ok("click intent\ndrag 450 400\nrelease\nrate intent 5\n");
    assert!(script.validate(&default_ids()).is_empty());
}

proptest! {
    #[test]
    fn prop_place_round_trips_integer_coordinates(x in -2000i32..2000, y in -2000i32..2000) {
        let script = parse_ok(&format!("place intent {x} {y}"));
        match script.commands()[0].inner() {
            Command::Place { x: px, y: py, .. } => {
                prop_assert_eq!(*px, x as f32);
                prop_assert_eq!(*py, y as f32);
            }
            other => prop_assert!(false, "unexpected command {:?}", other),
        }
    }

    #[test]
    fn prop_arbitrary_input_never_panics(source in "[ -~\n]{0,80}") {
        let _ = parse_source(&source);
    }
}

//! Integration tests for argfile expansion through the parser.

use std::fs;

use argexpand::args::{
    ArgfileHandler, ArgumentDef, CmdLineParser, OneArgumentHandler, OptionDef, ParseError,
    RestOfArgumentsHandler,
};
use tempfile::TempDir;

#[derive(Debug, Default)]
struct Options {
    message: Option<String>,
    rest: Vec<String>,
}

fn parser() -> CmdLineParser<Options> {
    CmdLineParser::<Options>::new()
        .option(
            OptionDef::new("-m").meta_var("MESSAGE"),
            ArgfileHandler::new(OneArgumentHandler::new()),
            |o| &mut o.message,
        )
        .argument(
            ArgumentDef::new("AND_SUCH"),
            ArgfileHandler::new(RestOfArgumentsHandler::new()),
            |o| &mut o.rest,
        )
}

fn parse(args: &[&str]) -> Result<Options, ParseError> {
    parser().parse(args.iter().copied())
}

/// Writes `content` to a fresh file and returns the `@path` token for it.
fn argfile(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("argfile");
    fs::write(&path, content).unwrap();
    format!("@{}", path.display())
}

// =============================================================================
// PASSTHROUGH
// =============================================================================

#[test]
fn no_argfile() {
    let options = parse(&["-m", "bob"]).unwrap();
    assert_eq!(options.message.as_deref(), Some("bob"));
    assert!(options.rest.is_empty());
}

#[test]
fn plain_rest_arguments() {
    let options = parse(&["a", "b c"]).unwrap();
    assert_eq!(options.rest, vec!["a", "b c"]);
}

// =============================================================================
// EXPANSION
// =============================================================================

#[test]
fn argfile_single_value() {
    let dir = TempDir::new().unwrap();
    let token = argfile(&dir, "bill");

    let options = parse(&["-m", token.as_str()]).unwrap();

    assert_eq!(options.message.as_deref(), Some("bill"));
}

#[test]
fn argfile_equivalent_to_inline() {
    let dir = TempDir::new().unwrap();
    let token = argfile(&dir, "bob");

    let from_file = parse(&["-m", token.as_str()]).unwrap();
    let inline = parse(&["-m", "bob"]).unwrap();

    assert_eq!(from_file.message, inline.message);
    assert_eq!(from_file.rest, inline.rest);
}

#[test]
fn argfile_with_space() {
    let dir = TempDir::new().unwrap();
    let token = argfile(&dir, "bill receipt");

    let options = parse(&[token.as_str()]).unwrap();

    assert_eq!(options.rest, vec!["bill receipt"]);
}

#[test]
fn argfile_with_newline() {
    let dir = TempDir::new().unwrap();
    let token = argfile(&dir, "bill\nreceipt");

    let options = parse(&[token.as_str()]).unwrap();

    assert_eq!(options.rest, vec!["bill", "receipt"]);
}

#[test]
fn argfile_with_crlf() {
    let dir = TempDir::new().unwrap();
    let token = argfile(&dir, "bill\r\nreceipt\r\n");

    let options = parse(&[token.as_str()]).unwrap();

    assert_eq!(options.rest, vec!["bill", "receipt"]);
}

#[test]
fn whitespace_only_line_is_an_argument() {
    let dir = TempDir::new().unwrap();
    let token = argfile(&dir, "bill\n  \nreceipt");

    let options = parse(&[token.as_str()]).unwrap();

    assert_eq!(options.rest, vec!["bill", "  ", "receipt"]);
}

#[test]
fn argfile_mixed_with_literals() {
    let dir = TempDir::new().unwrap();
    let token = argfile(&dir, "b\nc");

    let options = parse(&["a", token.as_str(), "d"]).unwrap();

    assert_eq!(options.rest, vec!["a", "b", "c", "d"]);
}

#[test]
fn leftover_lines_are_parsed_inline() {
    let dir = TempDir::new().unwrap();
    let token = argfile(&dir, "bob\nextra\nmore");

    let options = parse(&["-m", token.as_str()]).unwrap();

    assert_eq!(options.message.as_deref(), Some("bob"));
    assert_eq!(options.rest, vec!["extra", "more"]);
}

#[test]
fn argfile_lines_may_hold_options() {
    let dir = TempDir::new().unwrap();
    let token = argfile(&dir, "-m\nfrom-file");

    let options = parse(&[token.as_str()]).unwrap();

    // The rest handler owns every remaining token, option-looking or not.
    assert_eq!(options.rest, vec!["-m", "from-file"]);
    assert!(options.message.is_none());
}

#[test]
fn inline_option_value_is_expanded() {
    let dir = TempDir::new().unwrap();
    let token = argfile(&dir, "bill");

    let options = parse(&[format!("-m={token}").as_str()]).unwrap();

    assert_eq!(options.message.as_deref(), Some("bill"));
}

#[test]
fn argfile_after_double_dash_expands() {
    let dir = TempDir::new().unwrap();
    let token = argfile(&dir, "x");

    let options = parse(&["--", token.as_str()]).unwrap();

    assert_eq!(options.rest, vec!["x"]);
}

// =============================================================================
// EMPTY AND FAILING ARGFILES
// =============================================================================

#[test]
fn empty_argfile_yields_nothing() {
    let dir = TempDir::new().unwrap();
    let token = argfile(&dir, "");

    let options = parse(&[token.as_str()]).unwrap();

    assert!(options.rest.is_empty());
}

#[test]
fn empty_argfile_for_single_value_is_delegate_error() {
    let dir = TempDir::new().unwrap();
    let token = argfile(&dir, "");

    let err = parse(&["-m", token.as_str()]).unwrap_err();

    assert!(matches!(err, ParseError::MissingOperand { option } if option == "-m"));
}

#[test]
fn empty_argfile_for_optional_positional_is_like_nothing() {
    let dir = TempDir::new().unwrap();
    let token = argfile(&dir, "");
    let parser = CmdLineParser::<Options>::new().argument(
        ArgumentDef::new("FIRST"),
        ArgfileHandler::new(OneArgumentHandler::new()),
        |o| &mut o.message,
    );

    let inline = parser.parse(Vec::<String>::new()).unwrap();
    let from_file = parser.parse([token]).unwrap();

    assert_eq!(inline.message, None);
    assert_eq!(from_file.message, None);
}

#[test]
fn empty_argfile_does_not_satisfy_required_positional() {
    let dir = TempDir::new().unwrap();
    let token = argfile(&dir, "");
    let parser = CmdLineParser::<Options>::new().argument(
        ArgumentDef::new("REST").required(),
        ArgfileHandler::new(RestOfArgumentsHandler::new()),
        |o| &mut o.rest,
    );

    let inline = parser.parse(Vec::<String>::new()).unwrap_err();
    let from_file = parser.parse([token]).unwrap_err();

    assert!(matches!(inline, ParseError::MissingRequired(name) if name == "REST"));
    assert!(matches!(from_file, ParseError::MissingRequired(name) if name == "REST"));
}

#[test]
fn tokens_after_empty_argfile_are_dispatched_normally() {
    let dir = TempDir::new().unwrap();
    let token = argfile(&dir, "");

    let options = parse(&[token.as_str(), "-m", "bob", "tail"]).unwrap();

    assert_eq!(options.message.as_deref(), Some("bob"));
    assert_eq!(options.rest, vec!["tail"]);
}

#[test]
fn missing_argfile_fails_parse() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let token = format!("@{}", missing.display());

    let err = parse(&["-m", token.as_str()]).unwrap_err();

    match &err {
        ParseError::Argfile { path, .. } => assert_eq!(path, &missing),
        other => panic!("expected Argfile error, got {other:?}"),
    }
    assert!(err.to_string().contains("nope"));
}

#[test]
fn missing_argfile_in_rest_fails_parse() {
    let dir = TempDir::new().unwrap();
    let good = argfile(&dir, "fine");
    let missing = format!("@{}", dir.path().join("nope").display());

    let err = parse(&[good.as_str(), missing.as_str()]).unwrap_err();

    assert!(matches!(err, ParseError::Argfile { .. }));
}

#[test]
fn non_utf8_argfile_fails_parse() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("binary");
    fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
    let token = format!("@{}", path.display());

    let err = parse(&[token.as_str()]).unwrap_err();

    assert!(matches!(
        err,
        ParseError::Argfile { source, .. } if source.kind() == std::io::ErrorKind::InvalidData
    ));
}

// =============================================================================
// UNWRAPPED HANDLERS
// =============================================================================

#[test]
fn unwrapped_handler_takes_token_literally() {
    let parser = CmdLineParser::<Options>::new().option(
        OptionDef::new("-m"),
        OneArgumentHandler::new(),
        |o| &mut o.message,
    );

    let options = parser.parse(["-m", "@not-a-file"]).unwrap();

    assert_eq!(options.message.as_deref(), Some("@not-a-file"));
}

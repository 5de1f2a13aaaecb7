//! Tests for the check subcommand.

use clap::Parser;

use super::parse;
use crate::cli::{Cli, CliCommand};

#[test]
fn cli_parse_check() {
    match parse(&["urlcheck", "check", "https://example.com/login"]) {
        CliCommand::Check { url, json } => {
            assert_eq!(url, "https://example.com/login");
            assert!(!json);
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_json() {
    match parse(&["urlcheck", "check", "http://example.com", "--json"]) {
        CliCommand::Check { url, json } => {
            assert_eq!(url, "http://example.com");
            assert!(json);
        }
        _ => panic!("expected Check with --json"),
    }
}

#[test]
fn cli_parse_check_requires_a_url() {
    assert!(Cli::try_parse_from(["urlcheck", "check"]).is_err());
}

#[test]
fn cli_parse_check_accepts_arbitrary_strings() {
    // Validation is the evaluator's job, not the parser's: malformed input
    // must reach evaluate() so it can come back as a Neutral verdict.
    match parse(&["urlcheck", "check", "not a url"]) {
        CliCommand::Check { url, .. } => assert_eq!(url, "not a url"),
        _ => panic!("expected Check"),
    }
}

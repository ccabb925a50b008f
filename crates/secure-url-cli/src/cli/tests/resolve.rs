//! Tests for the resolve and origin subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use secure_url_core::Mode;

#[test]
fn cli_parse_resolve_defaults() {
    match parse(&["secure-url", "resolve", "//evil.example/x"]) {
        CliCommand::Resolve(args) => {
            assert_eq!(args.path, "//evil.example/x");
            assert!(args.base.is_none());
            assert!(args.mode.is_none());
            assert!(args.keep_port.is_none());
            assert!(!args.json);
            assert!(args.config.is_none());
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_all_flags() {
    match parse(&[
        "secure-url",
        "resolve",
        "/x",
        "--base",
        "https://localhost.local/",
        "--mode",
        "relax",
        "--keep-port",
        "false",
        "--json",
        "--config",
        "/tmp/secure-url.toml",
    ]) {
        CliCommand::Resolve(args) => {
            assert_eq!(args.base.as_deref(), Some("https://localhost.local/"));
            assert_eq!(args.mode, Some(Mode::Relax));
            assert_eq!(args.keep_port, Some(false));
            assert!(args.json);
            assert_eq!(
                args.config.as_deref(),
                Some(std::path::Path::new("/tmp/secure-url.toml"))
            );
        }
        _ => panic!("expected Resolve with flags"),
    }
}

#[test]
fn cli_parse_rejects_unknown_mode() {
    let err = Cli::try_parse_from(["secure-url", "resolve", "/x", "--mode", "strict"]).unwrap_err();
    assert!(err.to_string().contains("\"mode\" is expected to be"), "{err}");
}

#[test]
fn cli_parse_rejects_non_boolean_keep_port() {
    assert!(Cli::try_parse_from(["secure-url", "resolve", "/x", "--keep-port", "yes"]).is_err());
}

#[test]
fn cli_parse_origin() {
    match parse(&["secure-url", "origin", "https://foo.bar/", "--mode", "insecure"]) {
        CliCommand::Origin(args) => {
            assert_eq!(args.path, "https://foo.bar/");
            assert_eq!(args.mode, Some(Mode::Insecure));
        }
        _ => panic!("expected Origin"),
    }
}

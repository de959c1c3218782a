//! Tests for the replay subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn cli_parse_replay_defaults() {
    match parse(&["reqreplay", "replay", "site.txt"]) {
        CliCommand::Replay {
            method,
            output_dir,
            files,
        } => {
            assert!(method.is_none());
            assert!(output_dir.is_none());
            assert_eq!(files, vec![PathBuf::from("site.txt")]);
        }
        _ => panic!("expected Replay"),
    }
}

#[test]
fn cli_parse_replay_method_and_files() {
    match parse(&["reqreplay", "replay", "-m", "POST", "a.txt", "b.txt"]) {
        CliCommand::Replay { method, files, .. } => {
            assert_eq!(method.as_deref(), Some("POST"));
            assert_eq!(files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        }
        _ => panic!("expected Replay with method"),
    }
}

#[test]
fn cli_parse_replay_output_dir() {
    match parse(&[
        "reqreplay",
        "replay",
        "--method",
        "HEAD",
        "--output-dir",
        "/tmp/out",
        "x.txt",
    ]) {
        CliCommand::Replay {
            method, output_dir, ..
        } => {
            assert_eq!(method.as_deref(), Some("HEAD"));
            assert_eq!(output_dir.as_deref(), Some(std::path::Path::new("/tmp/out")));
        }
        _ => panic!("expected Replay with --output-dir"),
    }
}

#[test]
fn cli_parse_replay_requires_file() {
    assert!(Cli::try_parse_from(["reqreplay", "replay"]).is_err());
}

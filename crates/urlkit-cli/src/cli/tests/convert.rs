//! Tests for the four conversion commands and classify.

use super::parse;
use crate::cli::CliCommand;
use std::path::PathBuf;

#[test]
fn cli_parse_to_author_args() {
    match parse(&[
        "urlkit",
        "to-author",
        "https://www.nvidia.com/en-us/omniverse/",
        "https://www.nvidia.com/de-de/omniverse/",
    ]) {
        CliCommand::ToAuthor { input } => {
            assert_eq!(input.urls.len(), 2);
            assert!(input.file.is_none());
        }
        _ => panic!("expected ToAuthor"),
    }
}

#[test]
fn cli_parse_to_live_file() {
    match parse(&["urlkit", "to-live", "--file", "author.txt"]) {
        CliCommand::ToLive { input } => {
            assert!(input.urls.is_empty());
            assert_eq!(input.file, Some(PathBuf::from("author.txt")));
        }
        _ => panic!("expected ToLive"),
    }
}

#[test]
fn cli_parse_to_preview_stdin() {
    match parse(&["urlkit", "to-preview"]) {
        CliCommand::ToPreview { input } => {
            assert!(input.urls.is_empty());
            assert!(input.file.is_none());
        }
        _ => panic!("expected ToPreview"),
    }
}

#[test]
fn cli_parse_preview_to_live_short_file() {
    match parse(&["urlkit", "preview-to-live", "-f", "p.txt", "https://preview.nvidia.com/en-zz/"]) {
        CliCommand::PreviewToLive { input } => {
            assert_eq!(input.urls, ["https://preview.nvidia.com/en-zz/"]);
            assert_eq!(input.file, Some(PathBuf::from("p.txt")));
        }
        _ => panic!("expected PreviewToLive"),
    }
}

#[test]
fn cli_parse_classify() {
    match parse(&["urlkit", "classify", "https://www.nvidia.com/de-de/"]) {
        CliCommand::Classify { input } => assert_eq!(input.urls.len(), 1),
        _ => panic!("expected Classify"),
    }
}

//! Tests for regions, status, drivers, brands, brand-urls.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;
use urlkit_core::drivers::DriverEnv;

#[test]
fn cli_parse_regions() {
    match parse(&["urlkit", "regions", "https://www.nvidia.com/en-us/", "https://www.nvidia.com/de-de/"]) {
        CliCommand::Regions { pages } => assert_eq!(pages.len(), 2),
        _ => panic!("expected Regions"),
    }
}

#[test]
fn cli_regions_requires_a_page() {
    assert!(Cli::try_parse_from(["urlkit", "regions"]).is_err());
}

#[test]
fn cli_parse_status_defaults() {
    match parse(&["urlkit", "status", "https://www.nvidia.com/en-us/"]) {
        CliCommand::Status {
            input,
            csv,
            json,
            jobs,
        } => {
            assert_eq!(input.urls.len(), 1);
            assert!(csv.is_none());
            assert!(!json);
            assert!(jobs.is_none());
        }
        _ => panic!("expected Status"),
    }
}

#[test]
fn cli_parse_status_all_flags() {
    match parse(&[
        "urlkit", "status", "--file", "urls.txt", "--csv", "out.csv", "--json", "--jobs", "8",
    ]) {
        CliCommand::Status {
            input,
            csv,
            json,
            jobs,
        } => {
            assert_eq!(input.file, Some(PathBuf::from("urls.txt")));
            assert_eq!(csv, Some(PathBuf::from("out.csv")));
            assert!(json);
            assert_eq!(jobs, Some(8));
        }
        _ => panic!("expected Status"),
    }
}

#[test]
fn cli_parse_brands() {
    match parse(&["urlkit", "brands"]) {
        CliCommand::Brands { cn } => assert!(!cn),
        _ => panic!("expected Brands"),
    }
    match parse(&["urlkit", "brands", "--cn"]) {
        CliCommand::Brands { cn } => assert!(cn),
        _ => panic!("expected Brands"),
    }
}

#[test]
fn cli_parse_brand_urls() {
    match parse(&["urlkit", "brand-urls", "omniverse", "--cn"]) {
        CliCommand::BrandUrls { brand, cn } => {
            assert_eq!(brand, "omniverse");
            assert!(cn);
        }
        _ => panic!("expected BrandUrls"),
    }
}

#[test]
fn cli_brand_urls_requires_brand() {
    assert!(Cli::try_parse_from(["urlkit", "brand-urls"]).is_err());
}

#[test]
fn cli_parse_drivers() {
    match parse(&["urlkit", "drivers"]) {
        CliCommand::Drivers { env } => assert_eq!(env, DriverEnv::Live),
        _ => panic!("expected Drivers"),
    }
    match parse(&["urlkit", "drivers", "--env", "origin"]) {
        CliCommand::Drivers { env } => assert_eq!(env, DriverEnv::Origin),
        _ => panic!("expected Drivers"),
    }
}

#[test]
fn cli_drivers_rejects_unknown_env() {
    assert!(Cli::try_parse_from(["urlkit", "drivers", "--env", "author"]).is_err());
}

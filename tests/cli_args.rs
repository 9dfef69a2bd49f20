//! CLI mode resolution tests

use certsweep::cli::{Cli, Mode};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn defaults_match_the_documented_flags() {
    let cli = Cli::parse_from(["certsweep"]);

    assert!(cli.domain.is_empty());
    assert!(cli.file.is_empty());
    assert!(cli.folder.is_empty());
    assert_eq!(cli.suffix, "conf");
    assert_eq!(cli.day, 30);
    assert_eq!(cli.timeout, 10);
    assert!(!cli.json);
}

#[test]
fn no_target_flags_is_an_invalid_invocation() {
    let cli = Cli::parse_from(["certsweep"]);
    assert_eq!(cli.mode(), None);
}

#[test]
fn domain_wins_over_file_and_folder() {
    let cli = Cli::parse_from([
        "certsweep",
        "--domain",
        "https://example.com",
        "--file",
        "/tmp/site.pem",
        "--folder",
        "/etc/nginx/conf.d",
    ]);

    assert_eq!(
        cli.mode(),
        Some(Mode::SingleHost("https://example.com".to_string()))
    );
}

#[test]
fn file_wins_over_folder() {
    let cli = Cli::parse_from([
        "certsweep",
        "--file",
        "/tmp/site.pem",
        "--folder",
        "/etc/nginx/conf.d",
    ]);

    assert_eq!(
        cli.mode(),
        Some(Mode::SingleFile(PathBuf::from("/tmp/site.pem")))
    );
}

#[test]
fn folder_and_suffix_resolve_to_a_directory_scan() {
    let cli = Cli::parse_from(["certsweep", "--folder", "/etc/nginx/conf.d"]);

    assert_eq!(
        cli.mode(),
        Some(Mode::DirectoryScan {
            folder: PathBuf::from("/etc/nginx/conf.d"),
            suffix: "conf".to_string(),
        })
    );
}

#[test]
fn empty_folder_is_invalid() {
    let cli = Cli::parse_from(["certsweep", "--folder", ""]);
    assert_eq!(cli.mode(), None);
}

#[test]
fn empty_suffix_is_invalid() {
    let cli = Cli::parse_from(["certsweep", "--folder", "/etc/nginx/conf.d", "--suffix", ""]);
    assert_eq!(cli.mode(), None);
}

#[test]
fn suffix_with_a_dot_is_invalid() {
    let cli = Cli::parse_from([
        "certsweep",
        "--folder",
        "/etc/nginx/conf.d",
        "--suffix",
        "d.conf",
    ]);
    assert_eq!(cli.mode(), None);
}

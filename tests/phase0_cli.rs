mod common;

use assert_cmd::Command;
use clap::Parser;
use common::create_fixture;
use dirtree::catalog::{all_default_patterns, PatternMode};
use dirtree::cli::Args;
use dirtree::ignore_file::read_patterns;
use predicates::prelude::*;
use std::collections::BTreeSet;
use std::fs;
use tempfile::TempDir;

fn dirtree() -> Command {
    Command::cargo_bin("dirtree").unwrap()
}

#[test]
fn test_help_flag() {
    dirtree()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Print a directory as a tree"))
        .stdout(predicate::str::contains("--depth"))
        .stdout(predicate::str::contains("--show-hidden"))
        .stdout(predicate::str::contains("--no-default-ignores"))
        .stdout(predicate::str::contains("--pattern-mode"))
        .stdout(predicate::str::contains("--language"))
        .stdout(predicate::str::contains("--categories"))
        .stdout(predicate::str::contains("--ignore-file"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--create-ignore"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn test_version_flag() {
    dirtree()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dirtree"));
}

#[test]
fn test_invalid_depth_aborts_before_traversal() {
    let tmp = create_fixture(&["a.txt"]);
    dirtree()
        .current_dir(tmp.path())
        .arg("--depth=abc")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--depth"));
}

#[test]
fn test_negative_depth_rejected() {
    dirtree().arg("--depth=-1").assert().failure();
}

#[test]
fn test_invalid_pattern_mode_rejected() {
    dirtree()
        .arg("--pattern-mode=extreme")
        .assert()
        .failure()
        .stderr(predicate::str::contains("extreme"));
}

#[test]
fn test_unknown_flag_rejected() {
    dirtree()
        .arg("--frobnicate")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--frobnicate"));
}

#[test]
fn test_default_run_prints_header_and_tree() {
    let tmp = create_fixture(&[
        "proj/src/a.py",
        "proj/node_modules/x.js",
        "proj/.git/config",
    ]);
    dirtree()
        .current_dir(tmp.path())
        .arg("proj")
        .assert()
        .success()
        .stdout(predicate::str::contains("Directory structure for: "))
        .stdout(predicate::str::contains(&"-".repeat(50)))
        .stdout(predicate::str::contains("proj/\n└── src/\n    └── a.py\n"))
        .stdout(predicate::str::contains("node_modules").not())
        .stdout(predicate::str::contains(".git").not());
}

#[test]
fn test_missing_directory_reported_inline() {
    let tmp = TempDir::new().unwrap();
    dirtree()
        .current_dir(tmp.path())
        .arg("does-not-exist")
        .assert()
        .success()
        .stdout(predicate::str::contains("does not exist"));
}

#[test]
fn test_file_target_reported_inline() {
    let tmp = create_fixture(&["afile.txt"]);
    dirtree()
        .current_dir(tmp.path())
        .arg("afile.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("is not a directory"));
}

#[test]
fn test_create_ignore_writes_template() {
    let tmp = TempDir::new().unwrap();
    dirtree()
        .current_dir(tmp.path())
        .arg("--create-ignore")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Created default ignore file: .dirtreeignore",
        ));

    let written = tmp.path().join(".dirtreeignore");
    let loaded: BTreeSet<String> = read_patterns(&written).unwrap().into_iter().collect();
    let expected: BTreeSet<String> = all_default_patterns()
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(loaded, expected);
}

#[test]
fn test_output_writes_markdown_file() {
    let tmp = create_fixture(&["proj/src/main.rs", "proj/README.md"]);
    dirtree()
        .current_dir(tmp.path())
        .args(["proj", "--output=tree.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tree saved to: tree.md"))
        .stdout(predicate::str::contains("src/").not());

    let doc = fs::read_to_string(tmp.path().join("tree.md")).unwrap();
    assert_eq!(
        doc,
        "# Directory Tree\n\n```\nproj/\n├── src/\n│   └── main.rs\n└── README.md\n```\n"
    );
}

#[test]
fn test_output_write_failure_is_reported() {
    let tmp = create_fixture(&["proj/a.txt"]);
    dirtree()
        .current_dir(tmp.path())
        .args(["proj", "--output=missing-dir/tree.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error saving to file"));
}

#[test]
fn test_discovered_ignore_file_applies() {
    let tmp = create_fixture(&["proj/keep.rs", "proj/scratch.txt"]);
    fs::write(tmp.path().join(".dirtreeignore"), "# mine\n\nscratch.txt\n").unwrap();
    dirtree()
        .current_dir(tmp.path())
        .arg("proj")
        .assert()
        .success()
        .stdout(predicate::str::contains("keep.rs"))
        .stdout(predicate::str::contains("scratch.txt").not());
}

#[test]
fn test_no_default_ignores_shows_catalog_entries() {
    let tmp = create_fixture(&["proj/node_modules/x.js", "proj/app.log"]);
    dirtree()
        .current_dir(tmp.path())
        .args(["proj", "--no-default-ignores", "--ignore=*.log"])
        .assert()
        .success()
        .stdout(predicate::str::contains("node_modules/"))
        .stdout(predicate::str::contains("app.log").not());
}

// --- Argument parsing ---

#[test]
fn test_defaults() {
    let args = Args::parse_from(["dirtree"]).validated();
    assert_eq!(args.path, std::path::PathBuf::from("."));
    assert_eq!(args.depth, None);
    assert!(!args.show_hidden);
    assert!(!args.no_default_ignores);
    assert_eq!(args.pattern_mode, PatternMode::Default);
    assert!(args.ignore.is_empty());
    assert_eq!(args.log_level(), "warn");
}

#[test]
fn test_comma_separated_and_repeated_ignores() {
    let args = Args::parse_from(["dirtree", "--ignore=*.pyc,temp*", "--ignore", "logs", "."]);
    assert_eq!(args.ignore, vec!["*.pyc", "temp*", "logs"]);
}

#[test]
fn test_categories_split_on_commas() {
    let args = Args::parse_from(["dirtree", "--categories=deps,vcs"]).validated();
    assert_eq!(args.categories, vec!["deps", "vcs"]);
}

#[test]
fn test_pattern_mode_values() {
    let args = Args::parse_from(["dirtree", "--pattern-mode=aggressive"]);
    assert_eq!(args.pattern_mode, PatternMode::Aggressive);
    let args = Args::parse_from(["dirtree", "--pattern-mode", "minimal"]);
    assert_eq!(args.pattern_mode, PatternMode::Minimal);
}

#[test]
fn test_verbose_count_levels() {
    let args = Args::parse_from(["dirtree", "-vv", "."]).validated();
    assert_eq!(args.verbose, 2);
    assert_eq!(args.log_level(), "debug");
}

#[test]
fn test_quiet_resets_verbose() {
    let args = Args::parse_from(["dirtree", "-vv", "--quiet", "."]).validated();
    assert!(args.quiet);
    assert_eq!(args.verbose, 0, "quiet should reset verbosity to 0");
    assert_eq!(args.log_level(), "error");
}

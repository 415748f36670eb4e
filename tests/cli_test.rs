//! CLI end-to-end tests
//!
//! Tests for the mediacrawl command-line interface.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the mediacrawl binary
#[allow(deprecated)]
fn mediacrawl_cmd() -> Command {
    Command::cargo_bin("mediacrawl").unwrap()
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = mediacrawl_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = mediacrawl_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mediacrawl"));
}

#[test]
fn test_cli_title_command() {
    let mut cmd = mediacrawl_cmd();
    cmd.args(["title", "دانلود فیلم Runway 34 2022 باند ۳۴"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: runway 34"))
        .stdout(predicate::str::contains("Year: 2022"));
}

#[test]
fn test_cli_title_json() {
    let output = mediacrawl_cmd()
        .args(["title", "Kim Ji-young: Born 1982 2019", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["title"], "kim ji young born 1982");
    assert_eq!(json["year"], "2019");
}

#[test]
fn test_cli_title_rejects_unknown_media_type() {
    let mut cmd = mediacrawl_cmd();
    cmd.args(["title", "Foo", "--media-type", "podcast"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid media type"));
}

#[test]
fn test_cli_info_command() {
    let output = mediacrawl_cmd()
        .args([
            "info",
            "Foo.Bar.S01E02.720p.WEB-DL.x264.mkv",
            "--size",
            "1.4 GB",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["title"], "foo bar");
    assert_eq!(json["season"], 1);
    assert_eq!(json["episode"], 2);
    assert_eq!(json["quality"], "720p");
    assert_eq!(json["size_mb"], 1400);
}

#[test]
fn test_cli_info_empty_text_fails() {
    let mut cmd = mediacrawl_cmd();
    cmd.args(["info", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("anchor text is empty"));
}

#[test]
fn test_cli_size_command() {
    let mut cmd = mediacrawl_cmd();
    cmd.args(["size", "1 GiB"])
        .assert()
        .success()
        .stdout("1024\n");

    let mut cmd = mediacrawl_cmd();
    cmd.args(["size", "unknown"]).assert().success().stdout("0\n");
}

#[test]
fn test_cli_page_command() {
    let output = mediacrawl_cmd()
        .args(["page", "--errors"])
        .arg(fixture("pages.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let pages = json["pages"].as_array().unwrap();
    assert_eq!(pages.len(), 2);

    let first = &pages[0];
    assert_eq!(first["page"]["title"], "foo bar");
    assert_eq!(first["page"]["year"], "2020");
    assert_eq!(first["skipped"], 1);
    let titles = first["titles"].as_array().unwrap();
    assert_eq!(titles.len(), 1);
    assert_eq!(titles[0]["title"], "foo bar");
    assert_eq!(titles[0]["links"].as_array().unwrap().len(), 2);
    assert_eq!(titles[0]["links"][1]["size_mb"], 1200);

    let second = &pages[1];
    assert_eq!(second["page"]["year"], "");
    assert_eq!(second["titles"][0]["links"][0]["season"], 0);
    assert_eq!(second["titles"][0]["links"][0]["episode"], 24);
    assert_eq!(second["titles"][0]["links"][0]["size_mb"], 1434);

    let errors = json["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["source_name"], "film2movie");
}

#[test]
fn test_cli_page_without_errors_flag_omits_errors() {
    let output = mediacrawl_cmd()
        .arg("page")
        .arg(fixture("pages.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json.get("errors").is_none());
}

#[test]
fn test_cli_page_missing_file() {
    let mut cmd = mediacrawl_cmd();
    cmd.args(["page", "/nonexistent/pages.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read page dump"));
}

#[test]
fn test_cli_page_respects_disabled_source() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[[sources]]\nname = \"nyaa\"\nenabled = false\n").unwrap();

    let output = mediacrawl_cmd()
        .arg("--config")
        .arg(&config_path)
        .arg("page")
        .arg(fixture("pages.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let pages = json["pages"].as_array().unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0]["source"], "film2movie");
}

#[test]
fn test_cli_validate_valid_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
[engine]
extra_prefixes = ["watch online"]
crawl_default_season = 1

[[sources]]
name = "film2movie"
script = "arabic"
"#,
    )
    .unwrap();

    let mut cmd = mediacrawl_cmd();
    cmd.arg("validate")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("Sources: 1"));
}

#[test]
fn test_cli_validate_invalid_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[engine]\ncrawl_default_season = 0\n").unwrap();

    let mut cmd = mediacrawl_cmd();
    cmd.arg("validate")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("crawl_default_season"));
}

#[test]
fn test_cli_validate_unparseable_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "this is not toml [[[").unwrap();

    let mut cmd = mediacrawl_cmd();
    cmd.arg("validate")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

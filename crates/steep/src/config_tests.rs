//! Unit tests for run configuration.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::io::Write as _;
use std::time::Duration;

use super::*;

#[test]
fn defaults_match_the_documented_values() {
    let config = RunConfig::default();
    assert_eq!(config.timeout_ms, defaults::TIMEOUT_MS);
    assert_eq!(config.timeout(), Duration::from_millis(5000));
    assert!(!config.fail_fast);
    assert_eq!(config.color, "auto");
}

#[test]
fn empty_toml_yields_defaults() {
    let config: RunConfig = toml::from_str("").unwrap();
    assert_eq!(config.timeout_ms, defaults::TIMEOUT_MS);
}

#[test]
fn partial_toml_overrides_only_named_fields() {
    let config: RunConfig = toml::from_str("timeout_ms = 250\nfail_fast = true\n").unwrap();
    assert_eq!(config.timeout_ms, 250);
    assert!(config.fail_fast);
    assert_eq!(config.color, "auto");
}

#[test]
fn load_reads_a_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "timeout_ms = 100").unwrap();
    writeln!(file, "color = \"never\"").unwrap();

    let config = RunConfig::load(file.path()).unwrap();
    assert_eq!(config.timeout_ms, 100);
    assert_eq!(config.color_choice(), termcolor::ColorChoice::Never);
}

#[test]
fn load_reports_missing_files() {
    let err = RunConfig::load(std::path::Path::new("/nonexistent/steep.toml")).unwrap_err();
    assert!(err.to_string().contains("reading config"));
}

#[test]
fn unknown_color_falls_back_to_auto() {
    let config = RunConfig { color: "sometimes".to_string(), ..RunConfig::default() };
    assert_eq!(config.color_choice(), termcolor::ColorChoice::Auto);
}

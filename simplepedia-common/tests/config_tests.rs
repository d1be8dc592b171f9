//! Configuration loading and graceful degradation
//!
//! Uses serial_test: tests that touch SIMPLEPEDIA_CONFIG run sequentially.

use serial_test::serial;
use simplepedia_common::config::{
    load_toml_config, locate_config_file, resolve_settings, CliOverrides, CompiledDefaults,
    TomlConfig, CONFIG_ENV_VAR,
};
use simplepedia_common::Error;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_config(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn test_explicit_path_wins_over_env() {
    env::set_var(CONFIG_ENV_VAR, "/tmp/simplepedia-env.toml");

    let explicit = PathBuf::from("/tmp/simplepedia-explicit.toml");
    assert_eq!(locate_config_file(Some(&explicit)), Some(explicit));

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_env_var_names_config_file() {
    let file = write_config("[server]\nport = 6001\n");
    env::set_var(CONFIG_ENV_VAR, file.path());

    let config = load_toml_config(None).unwrap();
    assert_eq!(config.server.port, Some(6001));

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_missing_config_file_does_not_error() {
    env::remove_var(CONFIG_ENV_VAR);

    let missing = PathBuf::from(format!("/tmp/simplepedia-missing-{}.toml", std::process::id()));
    let config = load_toml_config(Some(&missing)).unwrap();
    assert_eq!(config, TomlConfig::default());
}

#[test]
#[serial]
fn test_malformed_config_file_is_config_error() {
    env::remove_var(CONFIG_ENV_VAR);

    let file = write_config("[server\nport = 1");
    let err = load_toml_config(Some(file.path())).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
#[serial]
fn test_file_values_flow_into_settings() {
    env::remove_var(CONFIG_ENV_VAR);

    let file = write_config(
        r#"
        seed_path = "/srv/simplepedia/seed.json"

        [logging]
        level = "debug"
        "#,
    );
    let config = load_toml_config(Some(file.path())).unwrap();
    let settings = resolve_settings(
        &CliOverrides {
            log_level: Some("warn".to_string()),
            ..Default::default()
        },
        &config,
        &CompiledDefaults::default(),
    );

    assert_eq!(settings.seed_path, Some(PathBuf::from("/srv/simplepedia/seed.json")));
    assert_eq!(settings.log_level, "warn");
    assert_eq!(settings.port, 5730);
}

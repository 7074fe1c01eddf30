use e180r::config::{ApiConfig, Config, ConfigError, DEFAULT_BASE_URL};
use std::fs;
use tempfile::TempDir;

fn write_config(contents: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("Failed to write config");
    (dir, path)
}

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.api, ApiConfig::default());
}

#[test]
fn partial_file_fills_in_defaults() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "https://replies.example.com"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.base_url, "https://replies.example.com");
    assert_eq!(config.api.timeout_seconds, 60);
    assert_eq!(config.api.connect_timeout_seconds, 5);
}

#[test]
fn empty_file_is_valid() {
    let (_dir, path) = write_config("");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let (_dir, path) = write_config("[api\nbase_url = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn non_http_scheme_is_rejected() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "ftp://example.com"
"#,
    );
    let err = Config::load_from(&path).unwrap().validate().unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("http or https"));
}

#[test]
fn zero_timeout_is_rejected() {
    let (_dir, path) = write_config(
        r#"
[api]
timeout_seconds = 0
"#,
    );
    let err = Config::load_from(&path).unwrap().validate().unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn relative_url_is_rejected() {
    let config = Config::default().with_base_url_overrides(None, Some("localhost".into()));
    assert!(config.validate().is_err());
}

#[test]
fn flag_beats_environment() {
    let config = Config::default().with_base_url_overrides(
        Some("http://env:8000".into()),
        Some("http://flag:8000".into()),
    );
    assert_eq!(config.api.base_url, "http://flag:8000");
}

#[test]
fn environment_beats_file() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "http://file:8000"
"#,
    );
    let config = Config::load_from(&path)
        .unwrap()
        .with_base_url_overrides(Some("http://env:8000".into()), None);
    assert_eq!(config.api.base_url, "http://env:8000");
}

#[test]
fn empty_overrides_are_ignored() {
    let config =
        Config::default().with_base_url_overrides(Some(String::new()), Some("  ".into()));
    assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
}

#[test]
fn bad_file_url_is_replaced_by_flag() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "ftp://old.example.com"
"#,
    );
    let config = Config::load_from(&path)
        .unwrap()
        .with_base_url_overrides(None, Some("http://good:8000".into()));
    config.validate().unwrap();
    assert_eq!(config.api.base_url, "http://good:8000");
}

#[test]
fn bad_file_url_is_replaced_by_environment() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "not a url"
"#,
    );
    let config = Config::load_from(&path)
        .unwrap()
        .with_base_url_overrides(Some("https://env.example.com".into()), None);
    assert!(config.validate().is_ok());
    assert_eq!(config.api.base_url, "https://env.example.com");
}

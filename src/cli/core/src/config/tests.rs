/* src/cli/core/src/config/tests.rs */

use pageload_core::DEFAULT_ENDPOINT;

use super::*;

#[test]
fn parse_minimal_config() {
  let config: PageloadConfig = toml::from_str("").unwrap();
  assert!(config.project_name().is_none());
  assert!(config.api.endpoint.is_none());
}

#[test]
fn parse_full_config() {
  let toml_str = r#"
[project]
name = "counter"

[api]
endpoint = "https://api.example.com"
"#;
  let config: PageloadConfig = toml::from_str(toml_str).unwrap();
  assert_eq!(config.project_name(), Some("counter"));
  assert_eq!(config.api.endpoint.as_deref(), Some("https://api.example.com"));
}

#[test]
fn reject_wrong_endpoint_type() {
  let result: Result<PageloadConfig, _> = toml::from_str("[api]\nendpoint = 1323\n");
  assert!(result.is_err());
}

#[test]
fn find_config_walks_upward() {
  let tmp = tempfile::tempdir().unwrap();
  std::fs::write(tmp.path().join("pageload.toml"), "[api]\nendpoint = \"http://a\"\n").unwrap();
  let nested = tmp.path().join("app/routes");
  std::fs::create_dir_all(&nested).unwrap();

  let found = find_pageload_config(&nested).unwrap();
  assert_eq!(found, tmp.path().canonicalize().unwrap().join("pageload.toml"));

  let config = load_pageload_config(&found).unwrap();
  assert_eq!(config.api.endpoint.as_deref(), Some("http://a"));
}

#[test]
fn load_config_reports_parse_errors() {
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join("pageload.toml");
  std::fs::write(&path, "[api\n").unwrap();

  let err = load_pageload_config(&path).unwrap_err();
  assert!(err.to_string().starts_with("failed to parse"));
}

fn file_with(endpoint: &str) -> PageloadConfig {
  toml::from_str(&format!("[api]\nendpoint = \"{endpoint}\"\n")).unwrap()
}

#[test]
fn flag_wins_over_env_and_file() {
  let file = file_with("http://file");
  let config =
    resolve_loader_config(Some("http://flag".into()), Some("http://env".into()), Some(&file));
  assert_eq!(config.resolve_endpoint(), "http://flag");
}

#[test]
fn env_wins_over_file() {
  let file = file_with("http://file");
  let config = resolve_loader_config(None, Some("http://env".into()), Some(&file));
  assert_eq!(config.resolve_endpoint(), "http://env");
}

#[test]
fn empty_sources_are_skipped() {
  let file = file_with("http://file");
  let config = resolve_loader_config(Some(String::new()), Some(String::new()), Some(&file));
  assert_eq!(config.resolve_endpoint(), "http://file");
}

#[test]
fn nothing_set_uses_default() {
  let config = resolve_loader_config(None, None, None);
  assert!(config.public_api_endpoint.is_none());
  assert_eq!(config.resolve_endpoint(), DEFAULT_ENDPOINT);
}

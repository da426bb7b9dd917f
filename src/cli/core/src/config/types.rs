/* src/cli/core/src/config/types.rs */

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageloadConfig {
  #[serde(default)]
  pub project: Option<ProjectConfig>,
  #[serde(default)]
  pub api: ApiSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
  pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSection {
  /// Backend base URL, used when neither `--endpoint` nor `PUBLIC_API_ENDPOINT` is set
  pub endpoint: Option<String>,
}

impl PageloadConfig {
  pub fn project_name(&self) -> Option<&str> {
    self.project.as_ref().map(|p| p.name.as_str())
  }
}

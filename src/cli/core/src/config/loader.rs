/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use pageload_core::LoaderConfig;

use super::PageloadConfig;

/// Walk upward from `start` to find `pageload.toml`, like Cargo.toml discovery
pub fn find_pageload_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join("pageload.toml");
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("pageload.toml not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_pageload_config(path: &Path) -> Result<PageloadConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

/// Pick the endpoint from the first non-empty source:
/// command-line flag, then environment, then `[api].endpoint`.
/// Nothing set leaves the loader on its built-in default.
pub fn resolve_loader_config(
  flag: Option<String>,
  env: Option<String>,
  file: Option<&PageloadConfig>,
) -> LoaderConfig {
  let from_file = file.and_then(|c| c.api.endpoint.clone());
  let endpoint = [flag, env, from_file].into_iter().flatten().find(|e| !e.is_empty());
  LoaderConfig { public_api_endpoint: endpoint }
}

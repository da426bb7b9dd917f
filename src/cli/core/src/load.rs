/* src/cli/core/src/load.rs */

use std::path::Path;

use anyhow::{Context, Result};
use pageload_core::{Fetch, IndexData, LoadEvent, PageDataLoader};

use crate::ui;

/// Run the page load once and render the result as pretty JSON.
/// With `index`, the payload must match the counter backend's index shape.
pub async fn load_page_data(
  loader: &PageDataLoader,
  fetch: &dyn Fetch,
  index: bool,
) -> Result<String> {
  ui::arrow(loader.endpoint());

  let event = LoadEvent::new(fetch);
  let value = if index {
    let data: IndexData = loader.load_as(&event).await?;
    ui::ok(&format!("{}: counter {}", data.application_name, data.counter));
    serde_json::to_value(&data)?
  } else {
    loader.load(&event).await?
  };

  serde_json::to_string_pretty(&value).context("failed to serialize page data")
}

pub fn write_page_data(json: &str, out: &Path) -> Result<()> {
  std::fs::write(out, json).with_context(|| format!("failed to write {}", out.display()))?;
  ui::ok(&format!("saved {} ({})", out.display(), ui::format_size(json.len() as u64)));
  Ok(())
}

/* src/cli/core/src/main.rs */

mod config;
mod load;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pageload_core::{ENDPOINT_ENV, HttpFetch, LoaderConfig, PageDataLoader};
use tracing_subscriber::EnvFilter;

use config::{PageloadConfig, find_pageload_config, load_pageload_config, resolve_loader_config};

#[derive(Parser)]
#[command(name = "pageload", about = "Fetch a page's initial render data from its backend")]
struct Cli {
  /// Log loader activity to stderr (same as RUST_LOG=pageload_core=debug)
  #[arg(short, long, global = true)]
  verbose: bool,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Run the page loader once and print the returned data
  Load {
    /// Backend base URL (overrides PUBLIC_API_ENDPOINT and pageload.toml)
    #[arg(short, long)]
    endpoint: Option<String>,
    /// Path to pageload.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write the data to a file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Decode the payload as the counter backend's index data
    #[arg(long)]
    index: bool,
  },
  /// Print the endpoint the loader would request
  Endpoint {
    /// Backend base URL (overrides PUBLIC_API_ENDPOINT and pageload.toml)
    #[arg(short, long)]
    endpoint: Option<String>,
    /// Path to pageload.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
}

fn init_tracing(verbose: bool) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
    EnvFilter::new(if verbose { "pageload_core=debug,pageload=debug" } else { "warn" })
  });
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Explicit path must load; an auto-detected one is optional
fn try_load_config(explicit: Option<&Path>) -> Result<Option<PageloadConfig>> {
  if let Some(path) = explicit {
    return load_pageload_config(path).map(Some);
  }
  let cwd = std::env::current_dir().context("failed to get cwd")?;
  match find_pageload_config(&cwd) {
    Ok(path) => {
      tracing::debug!(path = %path.display(), "using project config");
      load_pageload_config(&path).map(Some)
    }
    Err(_) => Ok(None),
  }
}

fn build_loader(endpoint: Option<String>, config: Option<&Path>) -> Result<PageDataLoader> {
  let file = try_load_config(config)?;
  if let Some(name) = file.as_ref().and_then(PageloadConfig::project_name) {
    tracing::debug!(project = name, "loaded project config");
  }
  let env = LoaderConfig::from_env().public_api_endpoint;
  tracing::debug!(flag = ?endpoint, env = ?env, key = ENDPOINT_ENV, "resolving endpoint");
  Ok(PageDataLoader::new(&resolve_loader_config(endpoint, env, file.as_ref())))
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  // .env is optional, real environment variables take precedence
  if let Ok(path) = dotenvy::dotenv() {
    tracing::debug!(path = %path.display(), "loaded .env");
  }

  match cli.command {
    Command::Load { endpoint, config, out, index } => {
      ui::banner("load");
      let loader = build_loader(endpoint, config.as_deref())?;
      let fetch = HttpFetch::new();
      let json = match load::load_page_data(&loader, &fetch, index).await {
        Ok(json) => json,
        Err(e) => {
          ui::fail("page load failed");
          return Err(e);
        }
      };
      match out {
        Some(path) => load::write_page_data(&json, &path)?,
        None => println!("{json}"),
      }
    }
    Command::Endpoint { endpoint, config } => {
      let loader = build_loader(endpoint, config.as_deref())?;
      println!("{}", loader.endpoint());
    }
  }

  Ok(())
}

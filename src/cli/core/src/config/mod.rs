/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{find_pageload_config, load_pageload_config, resolve_loader_config};
pub use types::PageloadConfig;

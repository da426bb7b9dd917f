/* src/cli/core/src/ui.rs */

// Status lines go to stderr so stdout carries only page data.

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn ok(msg: &str) {
  eprintln!("  {GREEN}\u{2713}{RESET} {msg}");
}

pub fn fail(msg: &str) {
  eprintln!("  {RED}\u{2717}{RESET} {msg}");
}

pub fn arrow(msg: &str) {
  eprintln!("  {GREEN}\u{2192}{RESET} {msg}");
}

pub fn banner(cmd: &str) {
  eprintln!();
  eprintln!("  {BOLD}pageload{RESET} {cmd} {DIM}v{VERSION}{RESET}");
  eprintln!();
}

pub fn format_size(bytes: u64) -> String {
  if bytes >= 1_000_000 {
    format!("{:.1} MB", bytes as f64 / 1_000_000.0)
  } else if bytes >= 1_000 {
    format!("{:.1} kB", bytes as f64 / 1_000.0)
  } else {
    format!("{bytes} B")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn format_size_units() {
    assert_eq!(format_size(512), "512 B");
    assert_eq!(format_size(2_048), "2.0 kB");
    assert_eq!(format_size(3_500_000), "3.5 MB");
  }
}

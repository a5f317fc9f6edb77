//! Tracing setup
//!
//! The TUI owns the terminal, so in that mode logs go to a file. CLI
//! subcommands log to stderr so stdout stays clean for `--json`.

use std::env;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn env_filter(default: &str) -> EnvFilter {
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    match rust_log.is_empty() {
        true => EnvFilter::builder().parse_lossy(default),
        false => EnvFilter::builder().parse_lossy(rust_log),
    }
}

/// Log to `path`, creating parent directories as needed
pub fn init_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))
}

/// Log to stderr; `quiet` limits output to errors
pub fn init_stderr(quiet: bool) -> Result<()> {
    let default = if quiet { "error" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {}", e))
}

use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
    sync::Mutex,
};

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::preferences::config_dir;

pub const LOG_ENV: &str = "WEATHERWISE_LOG";
const DEFAULT_DIRECTIVE: &str = "info";
const LOG_FILE_NAME: &str = "weatherwise.log";

/// Path logs go to when `--log-file` is not given.
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOG_FILE_NAME))
}

/// Installs a file-backed subscriber. Stdout belongs to the terminal UI, so
/// without a writable path nothing is logged.
pub fn init(path: Option<&Path>) -> Result<()> {
    let Some(path) = path.map(Path::to_path_buf).or_else(default_log_path) else {
        return Ok(());
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(filter_from_env())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("installing log subscriber")?;
    Ok(())
}

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

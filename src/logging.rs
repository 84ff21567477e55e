use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::filter::EnvFilter;

use crate::app_dirs::AppDirs;

/// Env var holding the tracing filter, e.g. `CLICKSHOT_LOG=debug`
pub const LOG_ENV: &str = "CLICKSHOT_LOG";

/// Where logs should go, if anywhere. The terminal belongs to the TUI, so
/// logging only happens to a file: the explicit one, or the default state
/// file when the filter env var is set.
pub fn resolve_log_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None if std::env::var_os(LOG_ENV).is_some() => AppDirs::log_path(),
        None => None,
    }
}

/// Install the global subscriber writing to `path`
pub fn init(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(())
}

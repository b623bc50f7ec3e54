//! File logging
//!
//! Results go to stdout, so log records are only ever written to a file.
//! With logging disabled no logger is installed and the `log` macros do
//! nothing.

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use anyhow::{Context, Result};
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Install the global logger when logging is enabled
///
/// # Returns
/// * `Result<Option<PathBuf>>` - The log file in use, `None` when disabled
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = get_log_file_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    dispatch(config.level_filter()?, &path)?
        .apply()
        .map_err(|e| anyhow::anyhow!("Failed to install logger: {}", e))?;

    log::info!("Logging to {}", path.display());
    Ok(Some(path))
}

/// Build the file dispatch without installing it
pub fn dispatch(level: LevelFilter, path: &Path) -> Result<fern::Dispatch> {
    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file))
}

/// Location of the log file in the user's data directory
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

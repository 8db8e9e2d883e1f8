//! File System Utilities
//!
//! Platform directories for configuration, logs and exports.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "energy", "energy-dash").ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/energy-dash/` or `$XDG_CONFIG_HOME/energy-dash/`
/// - **macOS**: `~/Library/Application Support/com.energy.energy-dash/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\energy\energy-dash\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    ensure_dir(dirs.config_dir())
}

/// Create `dir` (and parents) if missing
pub fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

//! Application Configuration
//!
//! Client settings persisted as TOML in the platform config directory. An
//! empty or missing file yields defaults; command-line options override the
//! loaded values for the running process only.

use crate::constants::{CONFIG_FILE, DEFAULT_API_BASE_URL, HISTORY_PAGE_SIZE, TOAST_TTL_MS};
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::i18n::Locale;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{error, info};

/// Default config file location
pub fn default_config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE))
}

/// Persisted client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Forecast service base URL
    pub api_base_url: String,
    /// Language tag; empty means detect from the OS
    pub locale: String,
    pub history_page_size: usize,
    pub toast_ttl_ms: u64,
    /// Export target directory; current directory when unset
    pub export_dir: Option<PathBuf>,
    /// Rolling log directory; file logging is off when unset
    pub log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            locale: String::new(),
            history_page_size: HISTORY_PAGE_SIZE,
            toast_ttl_ms: TOAST_TTL_MS,
            export_dir: None,
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Load from the default location, writing a default file on first run
    pub fn try_load() -> Result<Self> {
        Self::load_or_init(&default_config_path()?)
    }

    /// Load from `path`; when no file exists yet, save the defaults there
    pub fn load_or_init(path: &Path) -> Result<Self> {
        if path.exists() {
            return Self::try_load_from(path);
        }
        let config = Self::default();
        config.save_to(path)?;
        Ok(config)
    }

    /// Load from `path`; a missing or blank file gives defaults
    pub fn try_load_from(path: &Path) -> Result<Self> {
        info!(path = ?path, "Loading config file");
        if !path.exists() {
            return Ok(Self::default());
        }

        let value = std::fs::read_to_string(path)?;
        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse config file");
            e
        })?;
        Ok(config)
    }

    /// Write to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let value = toml::to_string(self)?;
        std::fs::write(path, value)?;
        info!(path = ?path, "Config saved");
        Ok(())
    }

    // ==================== Getters ====================

    /// Configured locale, or the OS locale when unset
    pub fn locale(&self) -> Locale {
        if self.locale.trim().is_empty() {
            let system = locale_config::Locale::current().to_string();
            Locale::from_tag(&system)
        } else {
            Locale::from_tag(&self.locale)
        }
    }

    pub fn toast_ttl(&self) -> Duration {
        Duration::from_millis(self.toast_ttl_ms)
    }

    pub fn history_page_size(&self) -> usize {
        self.history_page_size.max(1)
    }

    /// Export directory, falling back to the working directory
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        assert_eq!(AppConfig::try_load_from(&path).expect("missing"), AppConfig::default());

        std::fs::write(&path, "  \n").expect("write");
        assert_eq!(AppConfig::try_load_from(&path).expect("blank"), AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "api_base_url = \"http://forecast:8080\"\nlocale = \"zh\"\n").expect("write");

        let config = AppConfig::try_load_from(&path).expect("load");
        assert_eq!(config.api_base_url, "http://forecast:8080");
        assert_eq!(config.locale(), Locale::ZhCN);
        assert_eq!(config.history_page_size(), HISTORY_PAGE_SIZE);
        assert_eq!(config.toast_ttl(), Duration::from_millis(3500));
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let config = AppConfig {
            locale: "en".to_string(),
            history_page_size: 25,
            export_dir: Some(dir.path().join("exports")),
            ..AppConfig::default()
        };

        config.save_to(&path).expect("save");
        assert_eq!(AppConfig::try_load_from(&path).expect("load"), config);
    }

    #[test]
    fn first_run_writes_the_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("energy-dash").join(CONFIG_FILE);

        assert_eq!(AppConfig::load_or_init(&path).expect("init"), AppConfig::default());
        let written = std::fs::read_to_string(&path).expect("read");
        assert!(written.contains("api_base_url = \"http://localhost:5000\""));

        std::fs::write(&path, "history_page_size = 20").expect("write");
        assert_eq!(AppConfig::load_or_init(&path).expect("load").history_page_size(), 20);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "history_page_size = \"ten\"").expect("write");

        assert!(matches!(
            AppConfig::try_load_from(&path),
            Err(crate::error::Error::TomlDe { .. })
        ));
    }
}

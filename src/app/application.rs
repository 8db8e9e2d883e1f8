//! Application - Startup Wiring
//!
//! Loads configuration, installs logging, builds the HTTP client and runs the
//! interactive session on stdin/stdout.

use std::path::Path;

use crate::app::cli::Cli;
use crate::app::logging::init_logging;
use crate::app::shell::Shell;
use crate::services::HttpForecastApi;
use crate::states::AppConfig;

/// Load the config file named on the command line, or the default one.
///
/// A missing default file is created with defaults and an unreadable one
/// falls back to defaults; an explicit path must load.
fn load_config(explicit: Option<&Path>) -> anyhow::Result<(AppConfig, Option<String>)> {
    match explicit {
        Some(path) => Ok((AppConfig::try_load_from(path)?, None)),
        None => match AppConfig::try_load() {
            Ok(config) => Ok((config, None)),
            Err(e) => Ok((AppConfig::default(), Some(e.to_string()))),
        },
    }
}

/// Run the energy-dash client
pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    let (mut config, load_warning) = load_config(cli.config.as_deref())?;
    cli.apply(&mut config);

    let _log_guard = init_logging(config.log_dir.as_deref())?;
    if let Some(warning) = load_warning {
        tracing::warn!(error = %warning, "Using default configuration");
    }

    tracing::info!(
        base_url = %config.api_base_url,
        locale = ?config.locale(),
        "Starting energy-dash"
    );

    let api = HttpForecastApi::new(&config.api_base_url)?;
    let mut shell = Shell::new(api, config);

    let stdin = std::io::stdin();
    shell.run(stdin.lock(), std::io::stdout())?;

    tracing::info!("Session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_config_must_parse() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("energy-dash.toml");
        std::fs::write(&path, "toast_ttl_ms = \"soon\"").expect("write");

        assert!(load_config(Some(&path)).is_err());
    }

    #[test]
    fn explicit_config_is_loaded() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("energy-dash.toml");
        std::fs::write(&path, "history_page_size = 20").expect("write");

        let (config, warning) = load_config(Some(&path)).expect("load");
        assert_eq!(config.history_page_size(), 20);
        assert_eq!(warning, None);
    }
}

//! Command Line
//!
//! Process arguments and the commands accepted by the interactive session.
//! Session lines are parsed with the same `clap` derive machinery.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

use crate::states::AppConfig;

#[derive(Debug, Parser)]
#[command(name = "energy-dash")]
#[command(about = "Terminal client for the energy consumption forecasting service")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to energy-dash.toml in the platform config directory)
    #[arg(long, env = "ENERGY_DASH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Forecast service base URL, e.g. http://localhost:5000
    #[arg(long, env = "ENERGY_DASH_BASE_URL")]
    pub base_url: Option<String>,

    /// Display language (en or zh)
    #[arg(long)]
    pub locale: Option<String>,

    /// Directory for daily rolling log files
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Override loaded config values for this process
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(base_url) = &self.base_url {
            config.api_base_url = base_url.clone();
        }
        if let Some(locale) = &self.locale {
            config.locale = locale.clone();
        }
        if let Some(log_dir) = &self.log_dir {
            config.log_dir = Some(log_dir.clone());
        }
    }
}

/// One line typed into the session
#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_help_subcommand = true, disable_version_flag = true)]
#[command(name = "energy-dash")]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum ShellCommand {
    /// Open the session (any non-blank email and password)
    Login { email: String, password: String },
    /// Close the session and clear all loaded data
    Logout,
    /// Show the dashboard (refreshes forecast and insights)
    Dashboard,
    /// Show insights (refreshes insights)
    Insights,
    /// Show history (refreshes history), optionally changing filters or page
    History {
        /// Case-insensitive month search
        #[arg(long)]
        search: Option<String>,
        /// Month filter: All or an abbreviation such as Jan
        #[arg(long)]
        month: Option<String>,
        /// Year filter: All or a year such as 2025
        #[arg(long)]
        year: Option<String>,
        /// Page number (1-based)
        #[arg(long)]
        page: Option<usize>,
    },
    /// Upload a CSV file and refresh everything
    Upload { path: PathBuf },
    /// Predict consumption for a month, e.g. `predict Oct 2026` (defaults to this month)
    Predict {
        month: Option<String>,
        year: Option<i32>,
    },
    /// Export a dataset or report
    Export {
        #[arg(value_enum)]
        target: ExportTarget,
        /// Target directory (defaults to the configured export directory)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// List visible notifications
    Toasts,
    /// Dismiss a notification by id
    Dismiss { id: Uuid },
    /// Show session, service and loading status
    Status,
    /// Show available commands
    Help,
    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportTarget {
    /// Actual and forecast series (forecast_dataset.csv)
    Forecast,
    /// Current prediction (prediction_result.csv)
    Prediction,
    /// Filtered history rows (history_filtered.csv)
    History,
    /// Insights summary report (insights-summary.pdf)
    Insights,
}

/// Why a session line could not be turned into a command
#[derive(Debug)]
pub enum LineError {
    /// Unbalanced quotes or a trailing escape
    Quoting(shell_words::ParseError),
    /// Unknown command or bad arguments
    Usage(clap::Error),
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineError::Quoting(e) => write!(f, "error: {e}"),
            LineError::Usage(e) => write!(f, "{}", e.render()),
        }
    }
}

impl std::error::Error for LineError {}

/// Parse a session line, honouring shell quoting and escapes
pub fn parse_line(line: &str) -> Result<ShellCommand, LineError> {
    let words = shell_words::split(line).map_err(LineError::Quoting)?;
    ShellLine::try_parse_from(words)
        .map(|parsed| parsed.command)
        .map_err(LineError::Usage)
}

/// Help text for the session commands
pub fn shell_help() -> String {
    use clap::CommandFactory;
    ShellLine::command().render_long_help().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_words_stay_together() {
        let upload = |line: &str| match parse_line(line).expect("upload") {
            ShellCommand::Upload { path } => path,
            other => panic!("unexpected command: {other:?}"),
        };
        assert_eq!(upload(r#"upload "my data/energy 2025.csv""#), PathBuf::from("my data/energy 2025.csv"));
        assert_eq!(upload(r"upload my\ data.csv"), PathBuf::from("my data.csv"));
        assert_eq!(upload("upload 'it''s.csv'"), PathBuf::from("its.csv"));

        assert_eq!(
            parse_line(r#"history --search """#).expect("history"),
            ShellCommand::History {
                search: Some(String::new()),
                month: None,
                year: None,
                page: None
            }
        );
    }

    #[test]
    fn unbalanced_quotes_are_reported() {
        let err = parse_line(r#"upload "my data.csv"#).expect_err("unclosed quote");
        assert!(matches!(err, LineError::Quoting(_)));
        assert!(err.to_string().starts_with("error:"));

        let err = parse_line("fly").expect_err("unknown command");
        assert!(matches!(err, LineError::Usage(_)));
    }

    #[test]
    fn parses_session_commands() {
        assert_eq!(
            parse_line("login user@example.com secret").expect("login"),
            ShellCommand::Login {
                email: "user@example.com".to_string(),
                password: "secret".to_string()
            }
        );
        assert_eq!(
            parse_line("predict Oct 2026").expect("predict"),
            ShellCommand::Predict {
                month: Some("Oct".to_string()),
                year: Some(2026)
            }
        );
        assert_eq!(
            parse_line("history --month Jan --page 2").expect("history"),
            ShellCommand::History {
                search: None,
                month: Some("Jan".to_string()),
                year: None,
                page: Some(2)
            }
        );
        assert_eq!(
            parse_line("export prediction --dir out").expect("export"),
            ShellCommand::Export {
                target: ExportTarget::Prediction,
                dir: Some(PathBuf::from("out"))
            }
        );
        assert_eq!(
            parse_line("predict").expect("predict"),
            ShellCommand::Predict {
                month: None,
                year: None
            }
        );
        assert_eq!(parse_line("exit").expect("exit"), ShellCommand::Quit);
        assert_eq!(parse_line("help").expect("help"), ShellCommand::Help);
    }

    #[test]
    fn rejects_malformed_lines() {
        assert!(parse_line("predict Oct twenty").is_err());
        assert!(parse_line("export everything").is_err());
        assert!(parse_line("dismiss not-a-uuid").is_err());
        assert!(parse_line("fly").is_err());
    }

    #[test]
    fn process_options_override_config() {
        let cli = Cli::parse_from([
            "energy-dash",
            "--base-url",
            "http://forecast:8080",
            "--locale",
            "zh",
        ]);
        let mut config = AppConfig::default();
        cli.apply(&mut config);

        assert_eq!(config.api_base_url, "http://forecast:8080");
        assert_eq!(config.locale, "zh");
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn help_lists_commands() {
        let help = shell_help();
        assert!(help.contains("predict"));
        assert!(help.contains("export"));
    }
}

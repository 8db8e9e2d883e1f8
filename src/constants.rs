//! Client Constants
//!
//! Centralized defaults shared by the store, the views and the configuration layer.

/// Base URL of the forecast service when nothing else is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Service endpoints (relative to the base URL)
pub const FORECAST_PATH: &str = "forecast";
pub const INSIGHTS_PATH: &str = "insights";
pub const HISTORY_PATH: &str = "history";
pub const UPLOAD_PATH: &str = "upload";
pub const PREDICT_PATH: &str = "predict";

/// Multipart field name expected by the upload endpoint
pub const UPLOAD_FIELD: &str = "file";

/// Toast lifetime before auto-dismiss
pub const TOAST_TTL_MS: u64 = 3500;

/// Toast queue capacity
pub const TOAST_CAPACITY: usize = 32;

/// History table page size
pub const HISTORY_PAGE_SIZE: usize = 10;

/// Number of trailing actual months shown in trend and bill charts
pub const RECENT_MONTHS: usize = 6;

/// First year offered by the prediction form, and how many years it lists
pub const PREDICTION_FIRST_YEAR: i32 = 2025;
pub const PREDICTION_YEAR_COUNT: i32 = 11;

/// Placeholder for an unknown month in summary cards
pub const MISSING_MONTH: &str = "--";

/// Export file names
pub const FORECAST_EXPORT_FILE: &str = "forecast_dataset.csv";
pub const PREDICTION_EXPORT_FILE: &str = "prediction_result.csv";
pub const HISTORY_EXPORT_FILE: &str = "history_filtered.csv";
pub const INSIGHTS_EXPORT_FILE: &str = "insights-summary.pdf";

/// Config file name inside the platform config directory
pub const CONFIG_FILE: &str = "energy-dash.toml";

/// Rolling log file prefix
pub const LOG_FILE_PREFIX: &str = "energy-dash.log";

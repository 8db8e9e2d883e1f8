//! Domain - Pure Data Structures and Wire Types
//!
//! These types mirror the forecast service's JSON bodies and the derived
//! figures the views display. They don't depend on the store or the runtime.

pub mod forecast;
pub mod history;
pub mod insights;
pub mod measure;
pub mod month;
pub mod prediction;
pub mod stats;

pub use forecast::{ForecastData, ForecastRow};
pub use history::HistoryRow;
pub use insights::Insights;
pub use measure::Measure;
pub use prediction::{Prediction, Trend};
pub use stats::{SummaryStats, calculate_summary_stats};

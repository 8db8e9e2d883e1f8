//! Insights - Server-Computed Summary Over Historical Data

use serde::{Deserialize, Serialize};

use super::measure::Measure;

/// Response body of `GET /insights` when enough data exists
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Insights {
    pub average_consumption: Measure,
    pub total_bill: Measure,
    pub avg_rate_per_kwh: Measure,
    pub peak_month: String,
    pub peak_value: Measure,
    pub lowest_month: String,
    pub lowest_value: Measure,
    pub recommendations: Vec<String>,
}

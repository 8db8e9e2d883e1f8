//! Forecast - Actual And Projected Monthly Rows

use serde::{Deserialize, Serialize};

use super::measure::Measure;

/// One monthly consumption/bill row
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastRow {
    /// Month token (e.g. `"Jan-25"`)
    #[serde(default)]
    pub month: String,
    /// Consumption in kWh
    #[serde(default)]
    pub consumption: Measure,
    /// Bill amount
    #[serde(default)]
    pub bill: Measure,
}

impl ForecastRow {
    pub fn new(month: impl Into<String>, consumption: impl Into<Measure>, bill: impl Into<Measure>) -> Self {
        Self {
            month: month.into(),
            consumption: consumption.into(),
            bill: bill.into(),
        }
    }
}

/// Response body of `GET /forecast`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastData {
    /// Historical rows
    #[serde(default)]
    pub actual: Vec<ForecastRow>,
    /// Projected rows
    #[serde(default)]
    pub forecast: Vec<ForecastRow>,
}

impl ForecastData {
    /// Actual rows followed by forecast rows, in server order
    pub fn merged(&self) -> impl Iterator<Item = &ForecastRow> {
        self.actual.iter().chain(self.forecast.iter())
    }

    /// The trailing `count` actual rows
    pub fn recent_actual(&self, count: usize) -> &[ForecastRow] {
        let start = self.actual.len().saturating_sub(count);
        &self.actual[start..]
    }

    /// Consumption of the latest actual month, if any
    pub fn last_actual_consumption(&self) -> Option<f64> {
        self.actual.last().map(|row| row.consumption.value())
    }

    pub fn is_empty(&self) -> bool {
        self.actual.is_empty() && self.forecast.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_series_decode_as_empty() {
        let data: ForecastData = serde_json::from_str("{}").expect("decode");
        assert!(data.is_empty());
    }

    #[test]
    fn recent_actual_takes_the_tail() {
        let data = ForecastData {
            actual: (1..=8)
                .map(|i| ForecastRow::new(format!("M{i}"), i as f64, 0.0))
                .collect(),
            forecast: Vec::new(),
        };
        let months: Vec<_> = data.recent_actual(6).iter().map(|r| r.month.as_str()).collect();
        assert_eq!(months, vec!["M3", "M4", "M5", "M6", "M7", "M8"]);
        assert_eq!(data.recent_actual(20).len(), 8);
        assert_eq!(data.last_actual_consumption(), Some(8.0));
    }
}

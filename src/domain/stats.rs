//! Summary Statistics
//!
//! Aggregates shown on the dashboard stat cards, derived from the actual
//! forecast rows with optional overrides from server insights.

use crate::constants::MISSING_MONTH;

use super::forecast::ForecastRow;
use super::insights::Insights;

/// Dashboard summary
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    pub total_consumption: f64,
    pub average_consumption: f64,
    pub peak_month: String,
    pub lowest_month: String,
    pub total_bill: f64,
    pub avg_rate: f64,
}

impl Default for SummaryStats {
    fn default() -> Self {
        Self {
            total_consumption: 0.0,
            average_consumption: 0.0,
            peak_month: MISSING_MONTH.to_string(),
            lowest_month: MISSING_MONTH.to_string(),
            total_bill: 0.0,
            avg_rate: 0.0,
        }
    }
}

/// Compute the dashboard summary for `actual_rows`
pub fn calculate_summary_stats(actual_rows: &[ForecastRow], insights: Option<&Insights>) -> SummaryStats {
    if actual_rows.is_empty() {
        return SummaryStats::default();
    }

    let consumption: Vec<f64> = actual_rows.iter().map(|r| r.consumption.value()).collect();
    let total_consumption: f64 = consumption.iter().sum();
    let total_bill: f64 = actual_rows.iter().map(|r| r.bill.value()).sum();

    // First index wins on ties
    let mut peak = 0;
    let mut low = 0;
    for (i, value) in consumption.iter().enumerate() {
        if *value > consumption[peak] {
            peak = i;
        }
        if *value < consumption[low] {
            low = i;
        }
    }

    let pick_month = |server: Option<&String>, index: usize| {
        server
            .filter(|m| !m.is_empty())
            .or_else(|| Some(&actual_rows[index].month).filter(|m| !m.is_empty()))
            .cloned()
            .unwrap_or_else(|| MISSING_MONTH.to_string())
    };

    let server_rate = insights.map(|i| i.avg_rate_per_kwh.value()).unwrap_or(0.0);
    let avg_rate = if server_rate != 0.0 {
        server_rate
    } else if total_consumption != 0.0 {
        total_bill / total_consumption
    } else {
        0.0
    };

    SummaryStats {
        total_consumption,
        average_consumption: total_consumption / actual_rows.len() as f64,
        peak_month: pick_month(insights.map(|i| &i.peak_month), peak),
        lowest_month: pick_month(insights.map(|i| &i.lowest_month), low),
        total_bill,
        avg_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::measure::Measure;

    fn rows() -> Vec<ForecastRow> {
        vec![
            ForecastRow::new("Jan-25", "120", "850"),
            ForecastRow::new("Feb-25", 180.0, 1200.0),
            ForecastRow::new("Mar-25", 90.0, 600.0),
            ForecastRow::new("Apr-25", 180.0, 1250.0),
        ]
    }

    #[test]
    fn empty_rows_give_placeholders() {
        let stats = calculate_summary_stats(&[], None);
        assert_eq!(stats, SummaryStats::default());
        assert_eq!(stats.peak_month, "--");
    }

    #[test]
    fn single_string_row_averages_to_its_value() {
        let rows = vec![ForecastRow::new("Jan-25", "120", "850")];
        let stats = calculate_summary_stats(&rows, None);
        assert_eq!(stats.average_consumption, 120.0);
        assert_eq!(stats.total_bill, 850.0);
    }

    #[test]
    fn derives_totals_and_extremes_from_rows() {
        let stats = calculate_summary_stats(&rows(), None);
        assert_eq!(stats.total_consumption, 570.0);
        assert_eq!(stats.average_consumption, 142.5);
        assert_eq!(stats.peak_month, "Feb-25");
        assert_eq!(stats.lowest_month, "Mar-25");
        assert_eq!(stats.total_bill, 3900.0);
        assert!((stats.avg_rate - 3900.0 / 570.0).abs() < 1e-9);
    }

    #[test]
    fn server_insights_take_precedence() {
        let insights = Insights {
            peak_month: "Apr-25".to_string(),
            lowest_month: String::new(),
            avg_rate_per_kwh: Measure::from(7.25),
            ..Default::default()
        };
        let stats = calculate_summary_stats(&rows(), Some(&insights));
        assert_eq!(stats.peak_month, "Apr-25");
        assert_eq!(stats.lowest_month, "Mar-25");
        assert_eq!(stats.avg_rate, 7.25);
    }

    #[test]
    fn zero_consumption_has_zero_rate() {
        let rows = vec![ForecastRow::new("Jan-25", 0.0, 100.0)];
        let stats = calculate_summary_stats(&rows, None);
        assert_eq!(stats.avg_rate, 0.0);
    }
}

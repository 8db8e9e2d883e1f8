//! Insights Page
//!
//! Server insight cards, the bill distribution of the last six actual months
//! and the recommendations.

use crate::constants::RECENT_MONTHS;
use crate::features::stat_line;
use crate::i18n::{Locale, t};
use crate::states::PredictionState;
use crate::utils::format::{column, format_currency, format_number};

/// Render the insights page
pub fn render(state: &PredictionState, locale: Locale) -> String {
    let mut lines = vec![format!("== {} ==", t(locale, "nav-insights"))];
    let loading = state.status.insights_loading;

    let Some(insights) = state.insights.as_ref() else {
        if loading {
            lines.push(format!("  {}", t(locale, "loading")));
        } else {
            lines.push(format!("  {}", t(locale, "insights-empty")));
        }
        return lines.join("\n");
    };

    let value = |text: String| {
        if loading {
            t(locale, "loading").to_string()
        } else {
            text
        }
    };

    lines.push(stat_line(
        &t(locale, "insights-consumption"),
        &value(insights.average_consumption.to_string()),
    ));
    lines.push(stat_line(
        &t(locale, "insights-bill"),
        &value(format!("₹{}", format_number(insights.total_bill.value()))),
    ));
    lines.push(stat_line(
        &t(locale, "insights-trend"),
        &value(insights.peak_month.clone()),
    ));
    lines.push(stat_line(
        &t(locale, "insights-rate"),
        &value(insights.avg_rate_per_kwh.to_string()),
    ));

    lines.push(String::new());
    lines.push(format!("-- {} --", t(locale, "insights-bill-distribution")));
    for row in state.forecast.recent_actual(RECENT_MONTHS) {
        lines.push(format!(
            "  {}{}",
            column(&row.month, 12),
            format_currency(row.bill.value())
        ));
    }

    lines.push(String::new());
    lines.push(format!("-- {} --", t(locale, "insights-recommendations")));
    for rec in &insights.recommendations {
        lines.push(format!("  - {rec}"));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ForecastRow, Insights, Measure};

    fn insights() -> Insights {
        Insights {
            average_consumption: Measure::from(109.25),
            total_bill: Measure::from("1550"),
            avg_rate_per_kwh: Measure::from(7.094),
            peak_month: "Jan-25".to_string(),
            recommendations: vec!["Shift heavy appliance use to off-peak hours.".to_string()],
            ..Insights::default()
        }
    }

    #[test]
    fn empty_insights_point_to_the_dashboard() {
        let text = render(&PredictionState::default(), Locale::EnUS);
        assert!(text.contains("Upload energy data from Dashboard."));
    }

    #[test]
    fn loading_without_data_shows_loading() {
        let mut state = PredictionState::default();
        state.status.insights_loading = true;

        let text = render(&state, Locale::EnUS);
        assert!(text.contains("Loading..."));
        assert!(!text.contains("Upload energy data from Dashboard."));
    }

    #[test]
    fn cards_distribution_and_recommendations() {
        let mut state = PredictionState::default();
        state.insights = Some(insights());
        state.forecast.actual = (1..=8)
            .map(|n| ForecastRow::new(format!("M{n}"), 100.0, f64::from(n) * 10.0))
            .collect();

        let text = render(&state, Locale::EnUS);

        assert!(text.contains("109.25"));
        assert!(text.contains("₹1550"));
        assert!(text.contains("Jan-25"));
        assert!(!text.contains("M2 "));
        assert!(text.contains("M3          ₹30.00"));
        assert!(text.contains("- Shift heavy appliance use to off-peak hours."));
    }

    #[test]
    fn stale_cards_show_loading_during_refresh() {
        let mut state = PredictionState::default();
        state.insights = Some(insights());
        state.status.insights_loading = true;

        let text = render(&state, Locale::EnUS);
        assert!(text.contains("Loading..."));
        assert!(!text.contains("109.25"));
    }
}

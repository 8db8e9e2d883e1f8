//! Dashboard Page
//!
//! Stat cards, the actual and forecast series, the prediction card and the
//! consumption trend, rendered as text from a store snapshot.

use crate::constants::RECENT_MONTHS;
use crate::domain::calculate_summary_stats;
use crate::features::stat_line;
use crate::i18n::{Locale, t};
use crate::states::PredictionState;
use crate::utils::format::{column, format_currency, format_fixed, format_kwh, format_number};

/// Render the dashboard
pub fn render(state: &PredictionState, locale: Locale) -> String {
    let mut lines = vec![format!("== {} ==", t(locale, "nav-dashboard"))];

    if state.status.forecast_loading {
        lines.push(format!("  {}", t(locale, "loading")));
    }

    render_stats(state, locale, &mut lines);
    lines.push(String::new());
    render_series(state, locale, &mut lines);
    lines.push(String::new());
    render_prediction(state, locale, &mut lines);
    lines.push(String::new());
    render_trend(state, locale, &mut lines);

    lines.join("\n")
}

fn render_stats(state: &PredictionState, locale: Locale, lines: &mut Vec<String>) {
    let stats = calculate_summary_stats(&state.forecast.actual, state.insights.as_ref());

    lines.push(stat_line(
        &t(locale, "stat-total-consumption"),
        &format_kwh(stats.total_consumption, 0),
    ));
    lines.push(stat_line(
        &t(locale, "stat-avg-consumption"),
        &format_kwh(stats.average_consumption, 2),
    ));
    lines.push(stat_line(&t(locale, "stat-peak-month"), &stats.peak_month));
    lines.push(stat_line(&t(locale, "stat-lowest-month"), &stats.lowest_month));
    lines.push(stat_line(
        &t(locale, "stat-total-bill"),
        &format_currency(stats.total_bill),
    ));
    lines.push(stat_line(
        &t(locale, "stat-avg-rate"),
        &format!("₹{}", format_fixed(stats.avg_rate, 3)),
    ));
}

fn render_series(state: &PredictionState, locale: Locale, lines: &mut Vec<String>) {
    lines.push(format!("-- {} --", t(locale, "dashboard-series")));

    if state.forecast.is_empty() {
        lines.push(format!("  {}", t(locale, "forecast-empty")));
        return;
    }

    lines.push(format!(
        "  {}{}{}",
        column(&t(locale, "col-month"), 12),
        column(&t(locale, "col-consumption"), 20),
        t(locale, "col-bill")
    ));

    let actual = state.forecast.actual.iter().map(|row| (row, ""));
    let forecast = state.forecast.forecast.iter().map(|row| (row, " *"));
    for (row, marker) in actual.chain(forecast) {
        lines.push(format!(
            "  {}{}{}",
            column(&format!("{}{marker}", row.month), 12),
            column(&format_number(row.consumption.value()), 20),
            format_number(row.bill.value())
        ));
    }
    lines.push(format!("  * {}", t(locale, "forecast-marker")));
}

fn render_prediction(state: &PredictionState, locale: Locale, lines: &mut Vec<String>) {
    lines.push(format!("-- {} --", t(locale, "prediction-title")));

    if state.status.predict_loading {
        lines.push(format!("  {}", t(locale, "loading")));
    }

    let Some(prediction) = &state.prediction else {
        lines.push(format!("  {}", t(locale, "prediction-empty")));
        return;
    };

    let last_actual = state.forecast.last_actual_consumption().unwrap_or(0.0);
    let trend = prediction.trend(last_actual);

    lines.push(stat_line(&t(locale, "prediction-month"), &prediction.month));
    lines.push(stat_line(
        &t(locale, "prediction-consumption"),
        &format_fixed(prediction.predicted_consumption.value(), 2),
    ));
    lines.push(stat_line(
        &t(locale, "prediction-bill"),
        &format_currency(prediction.predicted_bill.value()),
    ));
    lines.push(stat_line(
        &t(locale, "prediction-confidence"),
        &format!("{}%", prediction.confidence_percent()),
    ));
    lines.push(stat_line(&t(locale, "prediction-trend"), &t(locale, trend.label_key())));
    if !prediction.model_used.is_empty() {
        lines.push(stat_line(&t(locale, "prediction-model"), &prediction.model_used));
    }
}

fn render_trend(state: &PredictionState, locale: Locale, lines: &mut Vec<String>) {
    lines.push(format!("-- {} --", t(locale, "dashboard-trend")));

    let recent = state.forecast.recent_actual(RECENT_MONTHS);
    if recent.is_empty() && state.prediction.is_none() {
        lines.push(format!("  {}", t(locale, "forecast-empty")));
        return;
    }

    for row in recent {
        lines.push(format!(
            "  {}{}",
            column(&row.month, 12),
            format_number(row.consumption.value())
        ));
    }
    if let Some(prediction) = &state.prediction {
        lines.push(format!(
            "  {}{} ({})",
            column(&prediction.month, 12),
            format_number(prediction.predicted_consumption.value()),
            t(locale, "trend-predicted")
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ForecastData, ForecastRow, Measure, Prediction};

    fn state() -> PredictionState {
        PredictionState {
            forecast: ForecastData {
                actual: vec![
                    ForecastRow::new("Jan-25", "120", "850"),
                    ForecastRow::new("Feb-25", 100.0, 700.0),
                ],
                forecast: vec![ForecastRow::new("Mar-25", 110.0, 780.0)],
            },
            ..PredictionState::default()
        }
    }

    #[test]
    fn empty_state_shows_placeholders() {
        let text = render(&PredictionState::default(), Locale::EnUS);

        assert!(text.contains("0 kWh"));
        assert!(text.contains("--"));
        assert!(text.contains("No forecast data yet. Upload a CSV to get started."));
        assert!(text.contains("Generate prediction to view results."));
    }

    #[test]
    fn stats_and_series_come_from_the_forecast() {
        let text = render(&state(), Locale::EnUS);

        assert!(text.contains("220 kWh"));
        assert!(text.contains("110.00 kWh"));
        assert!(text.contains("₹1550.00"));
        assert!(text.contains("Mar-25 *"));
        assert!(text.contains("Jan-25"));
    }

    #[test]
    fn prediction_card_shows_confidence_and_trend() {
        let mut state = state();
        state.prediction = Some(Prediction {
            month: "Oct-26".to_string(),
            predicted_consumption: Measure::from(90.0),
            predicted_bill: Measure::from("640"),
            confidence: "MEDIUM".to_string(),
            model_used: "xgboost".to_string(),
        });

        let text = render(&state, Locale::EnUS);

        assert!(text.contains("90.00"));
        assert!(text.contains("₹640.00"));
        assert!(text.contains("70%"));
        assert!(text.contains("Down"));
        assert!(text.contains("Oct-26      90 (predicted)"));
    }

    #[test]
    fn loading_flag_is_visible() {
        let mut state = PredictionState::default();
        state.status.forecast_loading = true;

        assert!(render(&state, Locale::EnUS).contains("Loading..."));
    }
}

//! Export - CSV datasets and the insights report
//!
//! CSV documents are comma-joined lines with no quoting or escaping and no
//! trailing newline, so they match what the dashboard has always produced.
//! The insights report is a single A4 PDF laid out in millimetres from the
//! top-left corner.

use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::domain::{ForecastData, HistoryRow, Insights, Prediction};
use crate::error::{Error, Result};
use crate::helpers::ensure_dir;
use crate::i18n::{Locale, t};
use crate::utils::format::format_number;

pub const DATASET_HEADERS: [&str; 3] = ["Month", "Consumption_KWh", "Bill_Amount"];
pub const PREDICTION_HEADERS: [&str; 4] = [
    "month",
    "predicted_consumption",
    "predicted_bill",
    "confidence",
];

/// Build a CSV document from a header and rows of equal width
pub fn csv_document<I, R>(headers: &[&str], rows: I) -> Result<String>
where
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = String>,
{
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }

    let bytes = writer.into_inner().map_err(|e| Error::Io {
        source: e.into_error(),
    })?;
    let mut text = String::from_utf8(bytes).map_err(|e| Error::Invalid {
        message: format!("CSV output is not UTF-8: {e}"),
    })?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// Actual then forecast rows, numbers coerced
pub fn forecast_csv(data: &ForecastData) -> Result<String> {
    csv_document(
        &DATASET_HEADERS,
        data.merged().map(|row| {
            [
                row.month.clone(),
                format_number(row.consumption.value()),
                format_number(row.bill.value()),
            ]
        }),
    )
}

/// Single-row prediction, values as received
pub fn prediction_csv(prediction: &Prediction) -> Result<String> {
    csv_document(
        &PREDICTION_HEADERS,
        [[
            prediction.month.clone(),
            prediction.predicted_consumption.to_string(),
            prediction.predicted_bill.to_string(),
            prediction.confidence.clone(),
        ]],
    )
}

/// History rows, values as received
pub fn history_csv<'a>(rows: impl IntoIterator<Item = &'a HistoryRow>) -> Result<String> {
    csv_document(
        &DATASET_HEADERS,
        rows.into_iter().map(|row| {
            [
                row.month.clone(),
                row.consumption_kwh.to_string(),
                row.bill_amount.to_string(),
            ]
        }),
    )
}

/// Lines of the insights summary report
pub fn insights_report(insights: &Insights, locale: Locale) -> Vec<String> {
    let mut lines = vec![
        t(locale, "report-title").to_string(),
        String::new(),
        format!(
            "{}: {}",
            t(locale, "report-avg-consumption"),
            insights.average_consumption
        ),
        format!(
            "{}: {} ({})",
            t(locale, "report-peak-month"),
            insights.peak_month,
            insights.peak_value
        ),
        format!(
            "{}: {} ({})",
            t(locale, "report-lowest-month"),
            insights.lowest_month,
            insights.lowest_value
        ),
        format!("{}: {}", t(locale, "report-total-bill"), insights.total_bill),
        format!("{}: {}", t(locale, "report-avg-rate"), insights.avg_rate_per_kwh),
        String::new(),
        format!("{}:", t(locale, "insights-recommendations")),
    ];
    lines.extend(insights.recommendations.iter().map(|rec| format!("- {rec}")));
    lines
}

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const REPORT_MARGIN: f32 = 20.0;
const REPORT_LAST_LINE: f32 = 280.0;

/// Render the insights report as a PDF document.
///
/// Built-in PDF fonts only cover Latin text, so the report is always English.
pub fn insights_pdf(insights: &Insights) -> Result<Vec<u8>> {
    let lines = insights_report(insights, Locale::EnUS);
    let title = lines.first().cloned().unwrap_or_default();

    let (doc, page, layer) = PdfDocument::new(title.as_str(), Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Report");
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let mut layer = doc.get_page(page).get_layer(layer);

    // Distance from the top edge of the page
    let mut top = REPORT_MARGIN;
    layer.use_text(title, 14.0, Mm(REPORT_MARGIN), Mm(PAGE_HEIGHT - top), &font);
    top += 10.0;

    for line in lines.into_iter().skip(1) {
        if line.is_empty() {
            top += 5.0;
            continue;
        }
        if top > REPORT_LAST_LINE {
            let (page, next) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Report");
            layer = doc.get_page(page).get_layer(next);
            top = REPORT_MARGIN;
        }
        let left = if line.starts_with("- ") { 24.0 } else { REPORT_MARGIN };
        layer.use_text(line, 11.0, Mm(left), Mm(PAGE_HEIGHT - top), &font);
        top += 10.0;
    }
    drop(layer);

    Ok(doc.save_to_bytes()?)
}

/// Write `contents` to `dir/file_name`, creating `dir` if needed
pub fn write_export(dir: &Path, file_name: &str, contents: impl AsRef<[u8]>) -> Result<PathBuf> {
    let contents = contents.as_ref();
    let dir = ensure_dir(dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, contents)?;
    tracing::info!(path = ?path, bytes = contents.len(), "Export written");
    Ok(path)
}

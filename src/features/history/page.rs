//! History Page
//!
//! Filter bar, the current page of rows and the page footer.

use crate::domain::month::MONTHS;
use crate::i18n::{Locale, t};
use crate::states::{FILTER_ALL, HistoryTableState, PredictionState, year_options};
use crate::utils::format::column;

/// Render the history table; clamps the table's page to the filtered rows
pub fn render(state: &PredictionState, table: &mut HistoryTableState, locale: Locale) -> String {
    let mut lines = vec![format!("== {} ==", t(locale, "nav-history"))];

    let filter = table.filter().clone();
    lines.push(format!(
        "  {}: \"{}\"  {}: {}  {}: {}",
        t(locale, "history-search"),
        filter.search,
        t(locale, "col-month"),
        filter.month.as_deref().unwrap_or(FILTER_ALL),
        t(locale, "history-year"),
        filter.year.as_deref().unwrap_or(FILTER_ALL),
    ));
    lines.push(format!(
        "  {}: {}  {}: {}",
        t(locale, "col-month"),
        std::iter::once(FILTER_ALL).chain(MONTHS).collect::<Vec<_>>().join(" "),
        t(locale, "history-year"),
        year_options(&state.history).join(" "),
    ));
    lines.push(String::new());

    lines.push(format!(
        "  {}{}{}",
        column(&t(locale, "col-month"), 12),
        column(&t(locale, "col-consumption"), 20),
        t(locale, "col-bill")
    ));

    let filtered_len = table.filtered(&state.history).len();
    let rows = table.page_rows(&state.history);
    if state.status.history_loading {
        lines.push(format!("  {}", t(locale, "history-loading")));
    } else if rows.is_empty() {
        lines.push(format!("  {}", t(locale, "history-no-records")));
    } else {
        for row in rows {
            lines.push(format!(
                "  {}{}{}",
                column(&row.month, 12),
                column(&row.consumption_kwh.to_string(), 20),
                row.bill_amount
            ));
        }
    }

    lines.push(String::new());
    lines.push(format!(
        "  {} {} {} {}",
        t(locale, "history-page"),
        table.page(),
        t(locale, "history-of"),
        table.total_pages(filtered_len)
    ));

    lines.join("\n")
}

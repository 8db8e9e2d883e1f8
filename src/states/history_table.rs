//! History table state
//!
//! Client-side filtering and pagination over the store's history rows. The
//! rows themselves stay in the store; this state only holds the filters and
//! the current page.

use crate::constants::HISTORY_PAGE_SIZE;
use crate::domain::HistoryRow;
use crate::domain::month::year_label;

/// Label of the "no filter" choice in the month and year selectors
pub const FILTER_ALL: &str = "All";

/// Filter selection for the history table
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryFilter {
    /// Case-insensitive substring of the month token
    pub search: String,
    /// Month abbreviation prefix; `None` means all months
    pub month: Option<String>,
    /// Year label such as `"2025"`; `None` means all years
    pub year: Option<String>,
}

impl HistoryFilter {
    pub fn matches(&self, row: &HistoryRow) -> bool {
        let month = row.month.as_str();
        let search = self.search.to_lowercase();

        let matches_search = month.to_lowercase().contains(&search);
        let matches_year = self.year.as_deref().is_none_or(|year| year_label(month) == year);
        let matches_month = self.month.as_deref().is_none_or(|prefix| month.starts_with(prefix));

        matches_search && matches_year && matches_month
    }
}

/// Parse a selector value, mapping `"All"` (any case) or blank to `None`
pub fn parse_filter_choice(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value.eq_ignore_ascii_case(FILTER_ALL) {
        None
    } else {
        Some(value.to_string())
    }
}

/// Year selector choices: `All`, then each distinct label in order of first appearance
pub fn year_options(rows: &[HistoryRow]) -> Vec<String> {
    let mut options = vec![FILTER_ALL.to_string()];
    for row in rows {
        let label = year_label(&row.month);
        if !options.contains(&label) {
            options.push(label);
        }
    }
    options
}

/// Filters plus a 1-based page cursor
#[derive(Clone, Debug)]
pub struct HistoryTableState {
    filter: HistoryFilter,
    page_size: usize,
    page: usize,
}

impl HistoryTableState {
    pub fn new(page_size: usize) -> Self {
        Self {
            filter: HistoryFilter::default(),
            page_size: page_size.max(1),
            page: 1,
        }
    }

    // ==================== Getters ====================

    pub fn filter(&self) -> &HistoryFilter {
        &self.filter
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current page (1-based)
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows passing the current filter, in store order
    pub fn filtered<'a>(&self, rows: &'a [HistoryRow]) -> Vec<&'a HistoryRow> {
        rows.iter().filter(|row| self.filter.matches(row)).collect()
    }

    /// `max(1, ceil(filtered / page_size))`
    pub fn total_pages(&self, filtered_len: usize) -> usize {
        filtered_len.div_ceil(self.page_size).max(1)
    }

    /// Rows on the current page; clamps the page to the filtered set first
    pub fn page_rows<'a>(&mut self, rows: &'a [HistoryRow]) -> Vec<&'a HistoryRow> {
        let filtered = self.filtered(rows);
        self.clamp(filtered.len());

        let start = (self.page - 1) * self.page_size;
        filtered.into_iter().skip(start).take(self.page_size).collect()
    }

    // ==================== Setters ====================

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn set_month(&mut self, month: Option<String>) {
        self.filter.month = month;
    }

    pub fn set_year(&mut self, year: Option<String>) {
        self.filter.year = year;
    }

    /// Jump to `page`, bounded to `1..=total_pages`
    pub fn set_page(&mut self, page: usize, filtered_len: usize) {
        self.page = page.clamp(1, self.total_pages(filtered_len));
    }

    /// Pull the page back when the filtered set shrinks
    pub fn clamp(&mut self, filtered_len: usize) {
        let total = self.total_pages(filtered_len);
        if self.page > total {
            self.page = total;
        }
    }
}

impl Default for HistoryTableState {
    fn default() -> Self {
        Self::new(HISTORY_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<HistoryRow> {
        let mut rows = Vec::new();
        for year in ["24", "25"] {
            for month in crate::domain::month::MONTHS {
                rows.push(HistoryRow::new(format!("{month}-{year}"), 100.0, 700.0));
            }
        }
        rows
    }

    fn months<'a>(rows: &[&'a HistoryRow]) -> Vec<&'a str> {
        rows.iter().map(|row| row.month.as_str()).collect()
    }

    #[test]
    fn year_options_keep_first_appearance_order() {
        let rows = vec![
            HistoryRow::new("Jan-25", 1.0, 1.0),
            HistoryRow::new("Feb-24", 1.0, 1.0),
            HistoryRow::new("Mar-25", 1.0, 1.0),
        ];
        assert_eq!(year_options(&rows), vec!["All", "2025", "2024"]);
        assert_eq!(year_options(&[]), vec!["All"]);
    }

    #[test]
    fn filters_combine() {
        let rows = rows();
        let mut table = HistoryTableState::default();

        table.set_search("JAN");
        assert_eq!(months(&table.filtered(&rows)), vec!["Jan-24", "Jan-25"]);

        table.set_search("");
        table.set_month(parse_filter_choice("Ma"));
        table.set_year(parse_filter_choice("2025"));
        assert_eq!(months(&table.filtered(&rows)), vec!["Mar-25", "May-25"]);

        table.set_month(None);
        table.set_year(None);
        assert_eq!(table.filtered(&rows).len(), 24);
    }

    #[test]
    fn filter_choice_all_means_no_filter() {
        assert_eq!(parse_filter_choice("All"), None);
        assert_eq!(parse_filter_choice(" all "), None);
        assert_eq!(parse_filter_choice(""), None);
        assert_eq!(parse_filter_choice("Oct"), Some("Oct".to_string()));
    }

    #[test]
    fn pagination_uses_ten_rows_per_page() {
        let rows = rows();
        let mut table = HistoryTableState::default();

        assert_eq!(table.total_pages(24), 3);
        assert_eq!(table.total_pages(0), 1);
        assert_eq!(table.page_rows(&rows).len(), 10);

        table.set_page(3, 24);
        let last = table.page_rows(&rows);
        assert_eq!(months(&last), vec!["Sep-25", "Oct-25", "Nov-25", "Dec-25"]);

        table.set_page(99, 24);
        assert_eq!(table.page(), 3);
        table.set_page(0, 24);
        assert_eq!(table.page(), 1);
    }

    #[test]
    fn page_is_clamped_when_filter_shrinks() {
        let rows = rows();
        let mut table = HistoryTableState::default();
        table.set_page(3, 24);

        table.set_year(Some("2024".to_string()));
        let page = table.page_rows(&rows);

        assert_eq!(table.page(), 2);
        assert_eq!(months(&page), vec!["Nov-24", "Dec-24"]);
    }
}

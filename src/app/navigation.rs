//! Navigation - Active Page
//!
//! Pages reachable from the session once logged in.

/// Available pages in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActivePage {
    /// Stats, forecast series, upload and prediction
    #[default]
    Dashboard,
    /// Server insights and recommendations
    Insights,
    /// Filtered upload history
    History,
}

impl ActivePage {
    /// Translation key for the page title
    pub fn title_key(&self) -> &'static str {
        match self {
            ActivePage::Dashboard => "nav-dashboard",
            ActivePage::Insights => "nav-insights",
            ActivePage::History => "nav-history",
        }
    }

    /// All pages, in navigation order
    pub fn all() -> &'static [ActivePage] {
        &[ActivePage::Dashboard, ActivePage::Insights, ActivePage::History]
    }
}

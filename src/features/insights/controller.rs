//! Insights Controller

use std::path::{Path, PathBuf};

use crossbeam_channel::Sender;

use crate::constants::INSIGHTS_EXPORT_FILE;
use crate::features::{finish_export, notify};
use crate::i18n::t;
use crate::services::ForecastApi;
use crate::states::{PredictionStore, UIEvent};
use crate::utils::export::insights_pdf;

/// Insights page controller
pub struct InsightsController<'a, A> {
    store: &'a PredictionStore<A>,
    events: Sender<UIEvent>,
}

impl<'a, A: ForecastApi> InsightsController<'a, A> {
    pub fn new(store: &'a PredictionStore<A>, events: Sender<UIEvent>) -> Self {
        Self { store, events }
    }

    pub async fn mount(&self) {
        self.store.refresh_insights().await;
    }

    /// Write the summary report; refuses when no insights are loaded
    pub fn export_report(&self, dir: &Path) -> Option<PathBuf> {
        let locale = self.store.locale();
        let Some(insights) = self.store.insights() else {
            notify(&self.events, UIEvent::error(t(locale, "toast-no-insights")));
            return None;
        };

        finish_export(
            &self.events,
            locale,
            insights_pdf(&insights),
            dir,
            INSIGHTS_EXPORT_FILE,
            "toast-export-insights",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::services::testing::StaticApi;
    use crate::states::NotificationSeverity;
    use serde_json::json;

    #[tokio::test]
    async fn report_export_requires_insights() {
        let api = StaticApi {
            insights: json!({ "message": "Not enough data" }),
            ..StaticApi::default()
        };
        let (tx, rx) = crossbeam_channel::unbounded();
        let store = PredictionStore::new(api, tx.clone(), Locale::EnUS);
        let controller = InsightsController::new(&store, tx);
        let dir = tempfile::tempdir().expect("tempdir");

        controller.mount().await;
        assert_eq!(controller.export_report(dir.path()), None);

        let toast = rx.try_iter().find_map(|event| match event {
            UIEvent::Toast { message, severity } => Some((severity, message.to_string())),
            UIEvent::StateChanged { .. } => None,
        });
        assert_eq!(
            toast,
            Some((NotificationSeverity::Error, "No insights to export.".to_string()))
        );
    }

    #[tokio::test]
    async fn report_is_written_as_pdf() {
        let (tx, rx) = crossbeam_channel::unbounded();
        let store = PredictionStore::new(StaticApi::default(), tx.clone(), Locale::EnUS);
        let controller = InsightsController::new(&store, tx);
        let dir = tempfile::tempdir().expect("tempdir");

        controller.mount().await;
        let path = controller.export_report(dir.path()).expect("exported");
        assert_eq!(path, dir.path().join("insights-summary.pdf"));

        let bytes = std::fs::read(path).expect("read");
        assert!(bytes.starts_with(b"%PDF"));

        let toast = rx.try_iter().find_map(|event| match event {
            UIEvent::Toast { message, severity } => Some((severity, message.to_string())),
            UIEvent::StateChanged { .. } => None,
        });
        assert_eq!(
            toast,
            Some((NotificationSeverity::Success, "Insights PDF exported.".to_string()))
        );
    }
}

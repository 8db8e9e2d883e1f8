//! History Controller

use std::path::{Path, PathBuf};

use crossbeam_channel::Sender;

use crate::constants::HISTORY_EXPORT_FILE;
use crate::features::finish_export;
use crate::services::ForecastApi;
use crate::states::{HistoryTableState, PredictionStore, UIEvent};
use crate::utils::export::history_csv;

/// History page controller
pub struct HistoryController<'a, A> {
    store: &'a PredictionStore<A>,
    events: Sender<UIEvent>,
}

impl<'a, A: ForecastApi> HistoryController<'a, A> {
    pub fn new(store: &'a PredictionStore<A>, events: Sender<UIEvent>) -> Self {
        Self { store, events }
    }

    pub async fn mount(&self) {
        self.store.refresh_history().await;
    }

    /// Export every row passing the table's filters (all pages)
    pub fn export_filtered(&self, table: &HistoryTableState, dir: &Path) -> Option<PathBuf> {
        let history = self.store.history();
        let filtered = table.filtered(&history);
        finish_export(
            &self.events,
            self.store.locale(),
            history_csv(filtered),
            dir,
            HISTORY_EXPORT_FILE,
            "toast-export-history",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::services::testing::StaticApi;

    #[tokio::test]
    async fn export_uses_the_filtered_rows() {
        let (tx, _rx) = crossbeam_channel::unbounded();
        let store = PredictionStore::new(StaticApi::default(), tx.clone(), Locale::EnUS);
        let controller = HistoryController::new(&store, tx);
        let dir = tempfile::tempdir().expect("tempdir");

        controller.mount().await;
        let mut table = HistoryTableState::new(1);
        table.set_search("feb");

        let path = controller.export_filtered(&table, dir.path()).expect("exported");
        assert_eq!(
            std::fs::read_to_string(path).expect("read"),
            "Month,Consumption_KWh,Bill_Amount\nFeb-25,98.5,700"
        );
    }
}

//! Dashboard Controller
//!
//! Loads forecast and insights on mount and handles the dashboard actions:
//! CSV upload, prediction requests and the two CSV exports.

use std::path::{Path, PathBuf};

use crossbeam_channel::Sender;

use crate::constants::{FORECAST_EXPORT_FILE, PREDICTION_EXPORT_FILE};
use crate::domain::month::{month_token, parse_month_abbr, prediction_years};
use crate::features::{finish_export, notify};
use crate::i18n::t;
use crate::services::{ForecastApi, UploadFile};
use crate::states::{PredictionStore, UIEvent};
use crate::utils::export::{forecast_csv, prediction_csv};

/// Dashboard page controller
pub struct DashboardController<'a, A> {
    store: &'a PredictionStore<A>,
    events: Sender<UIEvent>,
}

impl<'a, A: ForecastApi> DashboardController<'a, A> {
    pub fn new(store: &'a PredictionStore<A>, events: Sender<UIEvent>) -> Self {
        Self { store, events }
    }

    /// Refresh forecast and insights together
    pub async fn mount(&self) {
        futures::join!(self.store.refresh_forecast(), self.store.refresh_insights());
    }

    /// Upload a `.csv` file; anything else is rejected before any request
    pub async fn upload(&self, path: &Path) {
        let locale = self.store.locale();
        let is_csv = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if !is_csv {
            tracing::warn!(path = ?path, "Rejected non-CSV upload");
            notify(&self.events, UIEvent::error(t(locale, "toast-invalid-file")));
            return;
        }

        match UploadFile::load(path).await {
            Ok(file) => self.store.upload_data(&file).await,
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "Could not read upload file");
                notify(&self.events, UIEvent::error(t(locale, "toast-invalid-file")));
            }
        }
    }

    /// Request a prediction for a month abbreviation and a four-digit year
    pub async fn predict(&self, month: &str, year: i32) {
        let abbr = parse_month_abbr(month).filter(|_| prediction_years().contains(&year));
        let Some(abbr) = abbr else {
            notify(
                &self.events,
                UIEvent::error(t(self.store.locale(), "toast-invalid-month")),
            );
            return;
        };

        self.store.request_prediction(&month_token(abbr, year)).await;
    }

    /// Export the merged actual and forecast series
    pub fn export_forecast(&self, dir: &Path) -> Option<PathBuf> {
        let forecast = self.store.forecast();
        finish_export(
            &self.events,
            self.store.locale(),
            forecast_csv(&forecast),
            dir,
            FORECAST_EXPORT_FILE,
            "toast-export-forecast",
        )
    }

    /// Export the current prediction, if any
    pub fn export_prediction(&self, dir: &Path) -> Option<PathBuf> {
        let locale = self.store.locale();
        let Some(prediction) = self.store.prediction() else {
            notify(&self.events, UIEvent::error(t(locale, "toast-no-prediction")));
            return None;
        };

        finish_export(
            &self.events,
            locale,
            prediction_csv(&prediction),
            dir,
            PREDICTION_EXPORT_FILE,
            "toast-export-prediction",
        )
    }
}

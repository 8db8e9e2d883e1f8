//! Prediction Store
//!
//! Single source of truth for the forecast, insights, history and prediction
//! data shown by every view. All HTTP I/O goes through the store's named
//! operations; views only read snapshots and observe [`UIEvent`]s.
//!
//! ```text
//! view mounts → store operation → ForecastApi call → state write → UIEvent → view re-renders
//! ```
//!
//! Failures never escape an operation: each kind maps every error to one fixed
//! message, records it as the last error and publishes an error toast.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crossbeam_channel::Sender;
use serde_json::Value;

use crate::domain::{ForecastData, HistoryRow, Insights, Prediction};
use crate::error::{Error, Result};
use crate::i18n::{Locale, t};
use crate::services::{ForecastApi, UploadFile};
use crate::states::UIEvent;

/// The five independent operation kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Forecast,
    Insights,
    History,
    Upload,
    Predict,
}

impl Operation {
    pub const ALL: [Operation; 5] = [
        Operation::Forecast,
        Operation::Insights,
        Operation::History,
        Operation::Upload,
        Operation::Predict,
    ];

    /// Name used in logs
    pub fn name(self) -> &'static str {
        match self {
            Operation::Forecast => "forecast",
            Operation::Insights => "insights",
            Operation::History => "history",
            Operation::Upload => "upload",
            Operation::Predict => "predict",
        }
    }

    fn error_key(self) -> &'static str {
        match self {
            Operation::Forecast => "error-forecast",
            Operation::Insights => "error-insights",
            Operation::History => "error-history",
            Operation::Upload => "error-upload",
            Operation::Predict => "error-predict",
        }
    }

    fn failure_toast_key(self) -> &'static str {
        match self {
            Operation::Forecast => "toast-forecast-failed",
            Operation::Insights => "toast-insights-failed",
            Operation::History => "toast-history-failed",
            Operation::Upload => "toast-upload-failed",
            Operation::Predict => "toast-predict-failed",
        }
    }
}

/// In-flight flags, one per operation kind
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OperationStatus {
    pub forecast_loading: bool,
    pub insights_loading: bool,
    pub history_loading: bool,
    pub upload_loading: bool,
    pub predict_loading: bool,
}

impl OperationStatus {
    /// Whether `operation` is in flight
    pub fn is_loading(&self, operation: Operation) -> bool {
        match operation {
            Operation::Forecast => self.forecast_loading,
            Operation::Insights => self.insights_loading,
            Operation::History => self.history_loading,
            Operation::Upload => self.upload_loading,
            Operation::Predict => self.predict_loading,
        }
    }

    /// Whether any operation is in flight
    pub fn any(&self) -> bool {
        self.forecast_loading
            || self.insights_loading
            || self.history_loading
            || self.upload_loading
            || self.predict_loading
    }

    fn set(&mut self, operation: Operation, loading: bool) {
        let flag = match operation {
            Operation::Forecast => &mut self.forecast_loading,
            Operation::Insights => &mut self.insights_loading,
            Operation::History => &mut self.history_loading,
            Operation::Upload => &mut self.upload_loading,
            Operation::Predict => &mut self.predict_loading,
        };
        *flag = loading;
    }
}

/// Everything the store holds. Handed out to views as a clone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PredictionState {
    pub forecast: ForecastData,
    /// `None` until computed, or when the service reports no data
    pub insights: Option<Insights>,
    pub history: Vec<HistoryRow>,
    /// Result of the most recent successful prediction only
    pub prediction: Option<Prediction>,
    pub status: OperationStatus,
    pub last_error: Option<Arc<str>>,
}

/// Clears an operation's loading flag when the operation ends, whichever
/// way it ends (including when its future is dropped).
struct LoadingGuard<'a> {
    state: &'a RwLock<PredictionState>,
    events: &'a Sender<UIEvent>,
    operation: Operation,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .status
            .set(self.operation, false);
        let _ = self.events.send(UIEvent::StateChanged {
            operation: self.operation,
        });
    }
}

/// Session-scoped store of server-derived data
pub struct PredictionStore<A> {
    api: A,
    state: RwLock<PredictionState>,
    events: Sender<UIEvent>,
    locale: Locale,
}

impl<A: ForecastApi> PredictionStore<A> {
    /// Create a store publishing its UI events on `events`
    pub fn new(api: A, events: Sender<UIEvent>, locale: Locale) -> Self {
        Self {
            api,
            state: RwLock::new(PredictionState::default()),
            events,
            locale,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    // ==================== Getters ====================

    /// Copy of the whole state
    pub fn snapshot(&self) -> PredictionState {
        self.read().clone()
    }

    pub fn forecast(&self) -> ForecastData {
        self.read().forecast.clone()
    }

    pub fn insights(&self) -> Option<Insights> {
        self.read().insights.clone()
    }

    pub fn history(&self) -> Vec<HistoryRow> {
        self.read().history.clone()
    }

    pub fn prediction(&self) -> Option<Prediction> {
        self.read().prediction.clone()
    }

    pub fn status(&self) -> OperationStatus {
        self.read().status
    }

    pub fn last_error(&self) -> Option<Arc<str>> {
        self.read().last_error.clone()
    }

    /// Whether any operation is in flight
    pub fn is_loading(&self) -> bool {
        self.read().status.any()
    }

    // ==================== Operations ====================

    /// `GET /forecast`; replaces the forecast with the body as decoded
    pub async fn refresh_forecast(&self) {
        let _guard = self.begin(Operation::Forecast);

        let result = async {
            let body = self.api.fetch_forecast().await?;
            Ok::<_, Error>(serde_json::from_value::<ForecastData>(body)?)
        }
        .await;

        match result {
            Ok(forecast) => {
                tracing::debug!(
                    actual = forecast.actual.len(),
                    forecast = forecast.forecast.len(),
                    "Forecast refreshed"
                );
                self.write().forecast = forecast;
            }
            Err(e) => self.fail(Operation::Forecast, &e),
        }
    }

    /// `GET /insights`; a body carrying `message` means no insights yet
    pub async fn refresh_insights(&self) {
        let _guard = self.begin(Operation::Insights);

        let result = async {
            let body = self.api.fetch_insights().await?;
            Ok::<_, Error>(decode_insights(body)?)
        }
        .await;

        match result {
            Ok(insights) => {
                tracing::debug!(available = insights.is_some(), "Insights refreshed");
                self.write().insights = insights;
            }
            Err(e) => self.fail(Operation::Insights, &e),
        }
    }

    /// `GET /history`; a non-array body yields an empty history
    pub async fn refresh_history(&self) {
        let _guard = self.begin(Operation::History);

        let result = async {
            let body = self.api.fetch_history().await?;
            Ok::<_, Error>(decode_history(body)?)
        }
        .await;

        match result {
            Ok(history) => {
                tracing::debug!(rows = history.len(), "History refreshed");
                self.write().history = history;
            }
            Err(e) => self.fail(Operation::History, &e),
        }
    }

    /// `POST /upload`, then refresh forecast, insights and history together.
    ///
    /// The refreshes absorb their own failures, so a partial refresh still
    /// counts as a successful upload.
    pub async fn upload_data(&self, file: &UploadFile) {
        let _guard = self.begin(Operation::Upload);

        match self.api.upload_csv(file).await {
            Ok(()) => {
                tracing::info!(file = %file.file_name, "CSV uploaded");
                futures::join!(
                    self.refresh_forecast(),
                    self.refresh_insights(),
                    self.refresh_history()
                );
                self.emit(UIEvent::success(t(self.locale, "toast-upload-ok")));
            }
            Err(e) => self.fail(Operation::Upload, &e),
        }
    }

    /// `POST /predict`; the month token is passed through untouched
    pub async fn request_prediction(&self, month: &str) {
        let _guard = self.begin(Operation::Predict);

        let result = async {
            let body = self.api.predict(month).await?;
            Ok::<_, Error>(serde_json::from_value::<Prediction>(body)?)
        }
        .await;

        match result {
            Ok(prediction) => {
                tracing::info!(month, confidence = %prediction.confidence, "Prediction received");
                self.write().prediction = Some(prediction);
                self.emit(UIEvent::success(t(self.locale, "toast-predict-ok")));
            }
            Err(e) => self.fail(Operation::Predict, &e),
        }
    }

    /// Drop all data (logout). In-flight flags stay owned by their operations.
    pub fn reset(&self) {
        let mut state = self.write();
        let status = state.status;
        *state = PredictionState {
            status,
            ..PredictionState::default()
        };
        tracing::info!("Prediction store cleared");
    }

    // ==================== Internals ====================

    fn begin(&self, operation: Operation) -> LoadingGuard<'_> {
        {
            let mut state = self.write();
            state.status.set(operation, true);
            state.last_error = None;
        }
        tracing::debug!(operation = operation.name(), "Operation started");

        LoadingGuard {
            state: &self.state,
            events: &self.events,
            operation,
        }
    }

    fn fail(&self, operation: Operation, error: &Error) {
        tracing::warn!(operation = operation.name(), error = %error, "Operation failed");
        self.write().last_error = Some(t(self.locale, operation.error_key()));
        self.emit(UIEvent::error(t(self.locale, operation.failure_toast_key())));
    }

    fn emit(&self, event: UIEvent) {
        if self.events.send(event).is_err() {
            tracing::debug!("No UI listener for store event");
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, PredictionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, PredictionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn decode_insights(body: Value) -> Result<Option<Insights>> {
    if body.get("message").is_some() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(body)?))
}

fn decode_history(body: Value) -> Result<Vec<HistoryRow>> {
    match body {
        Value::Array(_) => Ok(serde_json::from_value(body)?),
        _ => Ok(Vec::new()),
    }
}

impl<A> std::fmt::Debug for PredictionStore<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionStore")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

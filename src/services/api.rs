//! Forecast Service API
//!
//! The store reaches the remote forecast service only through [`ForecastApi`].
//! [`HttpForecastApi`] is the production implementation over `reqwest`; tests
//! substitute scripted implementations.
//!
//! Bodies are returned as raw JSON so the store decides how to interpret
//! contract deviations (a `message` key, a non-array history).

use std::path::Path;
use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use serde_json::{Value, json};

use crate::constants::{
    FORECAST_PATH, HISTORY_PATH, INSIGHTS_PATH, PREDICT_PATH, UPLOAD_FIELD, UPLOAD_PATH,
};
use crate::error::{Error, Result};

/// A CSV file selected for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// File name sent in the multipart part
    pub file_name: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| Error::Invalid {
                message: format!("Not a file path: {}", path.display()),
            })?;
        let bytes = tokio::fs::read(path).await?;
        Ok(Self { file_name, bytes })
    }
}

/// Remote forecast service endpoints used by the store
#[allow(async_fn_in_trait)]
pub trait ForecastApi {
    /// `GET /forecast`
    async fn fetch_forecast(&self) -> Result<Value>;

    /// `GET /insights`
    async fn fetch_insights(&self) -> Result<Value>;

    /// `GET /history`
    async fn fetch_history(&self) -> Result<Value>;

    /// `POST /upload` (multipart, field `file`); the response body is ignored
    async fn upload_csv(&self, file: &UploadFile) -> Result<()>;

    /// `POST /predict` with `{ "month": month }`
    async fn predict(&self, month: &str) -> Result<Value>;
}

/// HTTP implementation of [`ForecastApi`]
#[derive(Clone)]
pub struct HttpForecastApi {
    client: reqwest::Client,
    base_url: Arc<str>,
}

impl HttpForecastApi {
    /// Create a client for the service at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(Error::Invalid {
                message: "API base URL is empty".to_string(),
            });
        }

        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            base_url: Arc::from(base_url),
        })
    }

    /// Configured base URL (without trailing slash)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.endpoint(path);
        tracing::debug!(url = %url, "GET");

        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json::<Value>().await?)
    }
}

impl ForecastApi for HttpForecastApi {
    async fn fetch_forecast(&self) -> Result<Value> {
        self.get_json(FORECAST_PATH).await
    }

    async fn fetch_insights(&self) -> Result<Value> {
        self.get_json(INSIGHTS_PATH).await
    }

    async fn fetch_history(&self) -> Result<Value> {
        self.get_json(HISTORY_PATH).await
    }

    async fn upload_csv(&self, file: &UploadFile) -> Result<()> {
        let url = self.endpoint(UPLOAD_PATH);
        tracing::debug!(url = %url, file = %file.file_name, size = file.bytes.len(), "POST multipart");

        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str("text/csv")?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        self.client
            .post(&url)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    async fn predict(&self, month: &str) -> Result<Value> {
        let url = self.endpoint(PREDICT_PATH);
        tracing::debug!(url = %url, month, "POST");

        let response = self
            .client
            .post(&url)
            .json(&json!({ "month": month }))
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json::<Value>().await?)
    }
}

impl std::fmt::Debug for HttpForecastApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpForecastApi")
            .field("base_url", &self.base_url)
            .finish()
    }
}

//! In-memory forecast service for controller and session tests

use std::sync::Mutex;

use serde_json::{Value, json};

use crate::error::{Error, Result};
use crate::services::{ForecastApi, UploadFile};

/// Answers every call with a fixed body and records what it was sent
pub(crate) struct StaticApi {
    pub forecast: Value,
    pub insights: Value,
    pub history: Value,
    pub prediction: Value,
    pub upload_ok: bool,
    pub uploads: Mutex<Vec<String>>,
    pub predicted: Mutex<Vec<String>>,
}

impl StaticApi {
    pub fn uploads(&self) -> Vec<String> {
        self.uploads.lock().expect("lock").clone()
    }

    pub fn predicted(&self) -> Vec<String> {
        self.predicted.lock().expect("lock").clone()
    }
}

impl Default for StaticApi {
    fn default() -> Self {
        Self {
            forecast: json!({
                "actual": [
                    { "month": "Jan-25", "consumption": 120, "bill": 850 },
                    { "month": "Feb-25", "consumption": 98.5, "bill": 700 }
                ],
                "forecast": [
                    { "month": "Mar-25", "consumption": 110, "bill": 780 }
                ]
            }),
            insights: json!({
                "average_consumption": 109.25,
                "total_bill": 1550,
                "avg_rate_per_kwh": 7.094,
                "peak_month": "Jan-25",
                "peak_value": 120,
                "lowest_month": "Feb-25",
                "lowest_value": 98.5,
                "recommendations": ["Shift heavy appliance use to off-peak hours."]
            }),
            history: json!([
                { "Month": "Jan-25", "Consumption_KWh": 120, "Bill_Amount": 850 },
                { "Month": "Feb-25", "Consumption_KWh": 98.5, "Bill_Amount": 700 }
            ]),
            prediction: json!({
                "month": "Oct-26",
                "predicted_consumption": 134.2,
                "predicted_bill": 910.5,
                "confidence": "HIGH",
                "model_used": "xgboost"
            }),
            upload_ok: true,
            uploads: Mutex::new(Vec::new()),
            predicted: Mutex::new(Vec::new()),
        }
    }
}

impl ForecastApi for StaticApi {
    async fn fetch_forecast(&self) -> Result<Value> {
        Ok(self.forecast.clone())
    }

    async fn fetch_insights(&self) -> Result<Value> {
        Ok(self.insights.clone())
    }

    async fn fetch_history(&self) -> Result<Value> {
        Ok(self.history.clone())
    }

    async fn upload_csv(&self, file: &UploadFile) -> Result<()> {
        self.uploads.lock().expect("lock").push(file.file_name.clone());
        if self.upload_ok {
            Ok(())
        } else {
            Err(Error::Invalid {
                message: "rejected".to_string(),
            })
        }
    }

    async fn predict(&self, month: &str) -> Result<Value> {
        self.predicted.lock().expect("lock").push(month.to_string());
        Ok(self.prediction.clone())
    }
}

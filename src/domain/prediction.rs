//! Prediction - On-Demand Estimate For A Single Month

use serde::{Deserialize, Serialize};

use super::measure::Measure;

/// Response body of `POST /predict`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Prediction {
    pub month: String,
    pub predicted_consumption: Measure,
    pub predicted_bill: Measure,
    pub confidence: String,
    pub model_used: String,
}

impl Prediction {
    /// Confidence as a display percentage
    pub fn confidence_percent(&self) -> u8 {
        confidence_percent(&self.confidence)
    }

    /// Direction relative to the latest actual consumption
    pub fn trend(&self, last_actual_consumption: f64) -> Trend {
        if self.predicted_consumption.value() >= last_actual_consumption {
            Trend::Up
        } else {
            Trend::Down
        }
    }
}

/// Map the service's confidence label to a percentage
pub fn confidence_percent(confidence: &str) -> u8 {
    match confidence {
        "HIGH" => 90,
        "MEDIUM" => 70,
        "LOW" => 45,
        _ => 60,
    }
}

/// Predicted consumption direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn label_key(self) -> &'static str {
        match self {
            Trend::Up => "trend-up",
            Trend::Down => "trend-down",
        }
    }
}

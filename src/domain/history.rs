//! History - Stored Monthly Rows

use serde::{Deserialize, Serialize};

use super::measure::Measure;

/// One row of `GET /history`, using the service's column names
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HistoryRow {
    #[serde(rename = "Month", default)]
    pub month: String,
    #[serde(rename = "Consumption_KWh", default)]
    pub consumption_kwh: Measure,
    #[serde(rename = "Bill_Amount", default)]
    pub bill_amount: Measure,
}

impl HistoryRow {
    pub fn new(month: impl Into<String>, consumption: impl Into<Measure>, bill: impl Into<Measure>) -> Self {
        Self {
            month: month.into(),
            consumption_kwh: consumption.into(),
            bill_amount: bill.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_service_column_names() {
        let row: HistoryRow = serde_json::from_str(
            r#"{"Month":"Jan-25","Consumption_KWh":120.0,"Bill_Amount":"850"}"#,
        )
        .expect("decode");
        assert_eq!(row, HistoryRow::new("Jan-25", 120.0, "850"));

        let json = serde_json::to_value(&row).expect("encode");
        assert!(json.get("Consumption_KWh").is_some());
    }
}

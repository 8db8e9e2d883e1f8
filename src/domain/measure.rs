//! Measure - Numeric Values As Sent By The Forecast Service
//!
//! The service sends consumption and bill figures either as JSON numbers or as
//! numeric strings. A `Measure` keeps whichever representation arrived so that
//! stored state stays identical to the decoded response body.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;

/// A numeric field in its original wire representation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Measure {
    /// Plain JSON number, integer or float as sent
    Number(Number),
    /// Number encoded as a string (e.g. `"134.2"`)
    Text(String),
    /// `null` or absent
    #[default]
    Missing,
}

impl Measure {
    /// Numeric value for display and aggregation.
    ///
    /// Numeric strings are parsed after trimming; blank, absent or
    /// unparseable values count as zero.
    pub fn value(&self) -> f64 {
        match self {
            Measure::Number(n) => n.as_f64().unwrap_or(0.0),
            Measure::Text(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            Measure::Missing => 0.0,
        }
    }
}

impl From<f64> for Measure {
    /// Non-finite values have no JSON form and become `Missing`
    fn from(value: f64) -> Self {
        Number::from_f64(value).map_or(Measure::Missing, Measure::Number)
    }
}

impl From<i64> for Measure {
    fn from(value: i64) -> Self {
        Measure::Number(Number::from(value))
    }
}

impl From<&str> for Measure {
    fn from(value: &str) -> Self {
        Measure::Text(value.to_string())
    }
}

/// Raw representation, as a JS template literal would print it
impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Number(n) => match n.as_i64() {
                Some(i) => write!(f, "{i}"),
                None => write!(f, "{}", n.as_f64().unwrap_or(0.0)),
            },
            Measure::Text(s) => f.write_str(s),
            Measure::Missing => Ok(()),
        }
    }
}

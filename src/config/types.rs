use std::time::Duration;

use serde::Deserialize;

use crate::error::ValidationError;

use super::parse::parse_duration_value;

/// On-disk configuration (`airscope.toml` / `airscope.json`). Every field is
/// optional; CLI arguments that were explicitly set take precedence.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub headers: Option<Vec<String>>,
    pub timeout: Option<DurationValue>,
    pub lookback: Option<DurationValue>,
    pub tick: Option<DurationValue>,
    pub poll: Option<DurationValue>,
    pub tci_min: Option<f64>,
    pub tci_max: Option<f64>,
    pub sri_min: Option<f64>,
    pub sri_max: Option<f64>,
    pub charts_path: Option<String>,
    pub no_correlation: Option<bool>,
    pub no_ui: Option<bool>,
    pub no_color: Option<bool>,
}

/// A duration in config: either bare seconds or a string with a unit
/// (`400ms`, `30s`, `5m`, `1h`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Secs(u64),
    Text(String),
}

impl DurationValue {
    /// Resolves the configured value to a concrete duration.
    ///
    /// # Errors
    ///
    /// Returns an error for zero, overflowing, or malformed values.
    pub fn to_duration(&self) -> Result<Duration, ValidationError> {
        match *self {
            DurationValue::Secs(0) => Err(ValidationError::DurationZero),
            DurationValue::Secs(secs) => Ok(Duration::from_secs(secs)),
            DurationValue::Text(ref text) => parse_duration_value(text),
        }
    }
}

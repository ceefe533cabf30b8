use std::collections::BTreeMap;

use serde::Deserialize;

/// Payload of `GET /history?sec={seconds}`.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub series: Vec<SeriesEntry>,
}

/// One historical sample. Any field may be absent; incomplete entries are
/// dropped downstream rather than rejected here.
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesEntry {
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub indices: Option<IndexBundle>,
    #[serde(default)]
    pub measures: BTreeMap<String, f64>,
}

/// The four environmental indices: global air quality (GAQI), global
/// environment (GEI), thermal comfort (TCI), and stability risk (SRI).
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct IndexBundle {
    #[serde(rename = "GAQI", default)]
    pub gaqi: Option<f64>,
    #[serde(rename = "GEI", default)]
    pub gei: Option<f64>,
    #[serde(rename = "TCI", default)]
    pub tci: Option<f64>,
    #[serde(rename = "SRI", default)]
    pub sri: Option<f64>,
}

/// Payload of `GET /latest`: the most recent sample, same entry shape as
/// the history series.
#[derive(Debug, Clone, Deserialize)]
pub struct LatestResponse {
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub indices: Option<IndexBundle>,
    #[serde(default)]
    pub measures: BTreeMap<String, f64>,
}

/// Payload of `GET /correlation`: a labelled square matrix of pairwise
/// measure correlations in [-1, 1].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorrelationMatrix {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub matrix: Vec<Vec<f64>>,
}

impl LatestResponse {
    /// Reinterprets the latest reading as a one-entry history series.
    #[must_use]
    pub fn into_series_entry(self) -> SeriesEntry {
        SeriesEntry {
            timestamp: self.timestamp,
            indices: self.indices,
            measures: self.measures,
        }
    }
}

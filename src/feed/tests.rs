use std::time::Duration;

use crate::error::{AppError, AppResult};

use super::types::{CorrelationMatrix, HistoryResponse, LatestResponse};
use super::FeedClient;

const CLIENT_TIMEOUT: Duration = Duration::from_secs(2);

#[test]
fn history_payload_decodes_with_partial_entries() -> AppResult<()> {
    let payload = r#"{
        "series": [
            {
                "timestamp": 1700000000,
                "indices": {"GAQI": 12.5, "GEI": 30.0, "TCI": 55.0, "SRI": 41.0},
                "measures": {"co2_ppm": 612.0, "temperature_c": 21.4}
            },
            {"timestamp": 1700000060, "indices": {"GAQI": 14.0, "GEI": 28.5}},
            {"timestamp": 1700000120},
            {}
        ]
    }"#;

    let decoded: HistoryResponse = serde_json::from_str(payload)?;
    if decoded.series.len() != 4 {
        return Err(AppError::feed(format!(
            "Expected 4 entries, got {}",
            decoded.series.len()
        )));
    }

    let first = decoded
        .series
        .first()
        .ok_or_else(|| AppError::feed("Missing first entry"))?;
    let indices = first
        .indices
        .ok_or_else(|| AppError::feed("First entry lost its indices"))?;
    if indices.tci != Some(55.0) {
        return Err(AppError::feed(format!(
            "Unexpected TCI: {:?}",
            indices.tci
        )));
    }
    if first.measures.get("co2_ppm") != Some(&612.0) {
        return Err(AppError::feed("First entry lost its measures"));
    }

    let second = decoded
        .series
        .get(1)
        .ok_or_else(|| AppError::feed("Missing second entry"))?;
    let second_indices = second
        .indices
        .ok_or_else(|| AppError::feed("Second entry lost its indices"))?;
    if second_indices.tci.is_some() || second_indices.sri.is_some() {
        return Err(AppError::feed("Absent indices decoded as present"));
    }

    let bare = decoded
        .series
        .get(3)
        .ok_or_else(|| AppError::feed("Missing bare entry"))?;
    if bare.indices.is_some() || bare.timestamp.is_some() {
        return Err(AppError::feed("Empty entry decoded as populated"));
    }
    Ok(())
}

#[test]
fn empty_history_payload_decodes_to_empty_series() -> AppResult<()> {
    let decoded: HistoryResponse = serde_json::from_str("{}")?;
    if !decoded.series.is_empty() {
        return Err(AppError::feed("Expected an empty series"));
    }
    Ok(())
}

#[test]
fn latest_payload_converts_to_series_entry() -> AppResult<()> {
    let payload = r#"{
        "timestamp": 1700000300,
        "indices": {"GAQI": 22.0, "GEI": 18.0, "TCI": 47.5, "SRI": 33.0}
    }"#;

    let decoded: LatestResponse = serde_json::from_str(payload)?;
    let entry = decoded.into_series_entry();
    if entry.timestamp != Some(1_700_000_300) {
        return Err(AppError::feed("Timestamp lost in conversion"));
    }
    let indices = entry
        .indices
        .ok_or_else(|| AppError::feed("Indices lost in conversion"))?;
    if indices.gaqi != Some(22.0) {
        return Err(AppError::feed(format!(
            "Unexpected GAQI: {:?}",
            indices.gaqi
        )));
    }
    Ok(())
}

#[test]
fn correlation_payload_decodes_labels_and_rows() -> AppResult<()> {
    let payload = r#"{
        "labels": ["co2_ppm", "temperature_c", "humidity_pct"],
        "matrix": [
            [1.0, 0.4, -0.2],
            [0.4, 1.0, 0.1],
            [-0.2, 0.1, 1.0]
        ]
    }"#;

    let decoded: CorrelationMatrix = serde_json::from_str(payload)?;
    if decoded.labels.len() != 3 || decoded.matrix.len() != 3 {
        return Err(AppError::feed(format!(
            "Unexpected shape: {} labels, {} rows",
            decoded.labels.len(),
            decoded.matrix.len()
        )));
    }
    let corner = decoded
        .matrix
        .get(2)
        .and_then(|row| row.first())
        .copied()
        .ok_or_else(|| AppError::feed("Missing matrix corner"))?;
    if corner != -0.2 {
        return Err(AppError::feed(format!("Unexpected corner value {}", corner)));
    }
    Ok(())
}

#[test]
fn client_rejects_invalid_base_url() -> AppResult<()> {
    match FeedClient::new("not a url", CLIENT_TIMEOUT, &[]) {
        Err(AppError::Feed(_)) => Ok(()),
        Err(other) => Err(AppError::feed(format!(
            "Unexpected error kind: {}",
            other
        ))),
        Ok(_) => Err(AppError::feed("Invalid base URL was accepted")),
    }
}

#[test]
fn client_rejects_invalid_header_name() -> AppResult<()> {
    let headers = vec![("bad header".to_owned(), "value".to_owned())];
    match FeedClient::new("http://127.0.0.1:9", CLIENT_TIMEOUT, &headers) {
        Err(AppError::Feed(_)) => Ok(()),
        Err(other) => Err(AppError::feed(format!(
            "Unexpected error kind: {}",
            other
        ))),
        Ok(_) => Err(AppError::feed("Invalid header name was accepted")),
    }
}

use std::time::Duration;

use crate::frames::{FilterBounds, StabilityCategory, StabilityPoint};

/// Snapshot consumed by the render task. The driving loop owns all state
/// and sends a fresh value whenever the screen should change.
#[derive(Debug, Clone, Default)]
pub enum UiData {
    #[default]
    Idle,
    Playback(PlaybackView),
    Watch(WatchView),
}

#[derive(Debug, Clone)]
pub struct PlaybackView {
    pub playing: bool,
    /// Scrubber position; during play this is the index the controller has
    /// already advanced to, while the chart shows the frame just rendered.
    pub frame_index: usize,
    pub frame_count: usize,
    pub timestamp: Option<i64>,
    pub bounds: FilterBounds,
    pub visible: Vec<StabilityPoint>,
    pub hidden: usize,
    pub no_color: bool,
}

#[derive(Debug, Clone)]
pub struct WatchView {
    pub reading: Option<CurrentReading>,
    /// Recent stability scores scaled by 100 for the sparkline.
    pub recent_scores: Vec<u64>,
    pub correlation: Option<CorrelationCells>,
    /// True when the last poll failed and the view shows old data.
    pub stale: bool,
    pub poll: Duration,
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct CurrentReading {
    pub gaqi: f64,
    pub gei: f64,
    pub tci: f64,
    pub sri: f64,
    pub score: f64,
    pub status: StabilityCategory,
    pub timestamp: Option<i64>,
}

impl CurrentReading {
    #[must_use]
    pub const fn from_point(point: &StabilityPoint, timestamp: Option<i64>) -> Self {
        Self {
            gaqi: point.gaqi,
            gei: point.gei,
            tci: point.tci,
            sri: point.sri,
            score: point.score,
            status: point.status,
            timestamp,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CorrelationCells {
    pub labels: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
}

/// Index values render to one decimal place.
#[must_use]
pub fn format_index(value: f64) -> String {
    format!("{:.1}", value)
}

/// Scores render to two decimal places.
#[must_use]
pub fn format_score(value: f64) -> String {
    format!("{:.2}", value)
}

#[must_use]
pub fn format_timestamp(timestamp: Option<i64>) -> String {
    timestamp
        .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
        .map_or_else(
            || "-".to_owned(),
            |datetime| datetime.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        )
}

/// One-based scrubber label, `frame 0/0` when nothing is loaded.
#[must_use]
pub fn scrubber_label(index: usize, count: usize) -> String {
    if count == 0 {
        return "frame 0/0".to_owned();
    }
    format!("frame {}/{}", index.saturating_add(1).min(count), count)
}

/// Scrubber fill ratio in [0, 1].
#[must_use]
pub fn scrubber_ratio(index: usize, count: usize) -> f64 {
    match count.checked_sub(1) {
        Some(0) | None => 0.0,
        Some(last) => (index.min(last) as f64 / last as f64).clamp(0.0, 1.0),
    }
}

/// Gauge fill for an index value against its nominal [0, 100] scale.
#[must_use]
pub fn index_ratio(value: f64) -> f64 {
    if value.is_finite() {
        (value / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

use tracing::debug;

use crate::feed::SeriesEntry;

use super::score::{classify, stability_score};
use super::types::{Frame, StabilityPoint};

/// Builds renderable frames from a raw history series.
///
/// Entries without an index bundle, or with any of GAQI/GEI/TCI/SRI absent,
/// contribute no frame; the output keeps the input order and may be shorter
/// than the input.
#[must_use]
pub fn build_frames(series: &[SeriesEntry]) -> Vec<Frame> {
    let mut frames = Vec::with_capacity(series.len());
    let mut dropped = 0usize;

    for entry in series {
        let Some(point) = build_point(entry) else {
            dropped = dropped.saturating_add(1);
            continue;
        };
        frames.push(Frame {
            timestamp: entry.timestamp,
            points: vec![point],
        });
    }

    if dropped > 0 {
        debug!("Dropped {} incomplete history entries.", dropped);
    }
    frames
}

fn build_point(entry: &SeriesEntry) -> Option<StabilityPoint> {
    let indices = entry.indices.as_ref()?;
    let gaqi = indices.gaqi?;
    let gei = indices.gei?;
    let tci = indices.tci?;
    let sri = indices.sri?;

    let score = stability_score(gaqi, gei, tci, sri);
    Some(StabilityPoint {
        gaqi,
        gei,
        tci,
        sri,
        score,
        status: classify(score),
    })
}

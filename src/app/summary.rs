use crate::frames::{FilterBounds, Frame, StabilityCategory, apply_bounds};
use crate::ui::model::{format_index, format_score, format_timestamp};

/// Text rendition of a classified history for headless runs.
pub(super) fn summary_lines(frames: &[Frame], bounds: &FilterBounds) -> Vec<String> {
    let mut stable = 0usize;
    let mut alert = 0usize;
    let mut unstable = 0usize;
    for point in frames.iter().filter_map(|frame| frame.points.first()) {
        match point.status {
            StabilityCategory::Stable => stable = stable.saturating_add(1),
            StabilityCategory::Alert => alert = alert.saturating_add(1),
            StabilityCategory::Unstable => unstable = unstable.saturating_add(1),
        }
    }

    let mut lines = Vec::with_capacity(6);
    lines.push(format!("Frames: {}", frames.len()));
    lines.push(format!(
        "Stable: {}  Alert: {}  Unstable: {}",
        stable, alert, unstable
    ));

    if let Some(frame) = frames.first()
        && let Some(point) = frame.points.first()
    {
        lines.push(format!(
            "First: {}  score {} ({})",
            format_timestamp(frame.timestamp),
            format_score(point.score),
            point.status
        ));
    }
    if frames.len() > 1
        && let Some(frame) = frames.last()
        && let Some(point) = frame.points.first()
    {
        lines.push(format!(
            "Last:  {}  score {} ({})",
            format_timestamp(frame.timestamp),
            format_score(point.score),
            point.status
        ));
    }

    lines.push(format!(
        "Bounds: TCI [{}, {}]  SRI [{}, {}]",
        format_index(bounds.tci_min),
        format_index(bounds.tci_max),
        format_index(bounds.sri_min),
        format_index(bounds.sri_max)
    ));
    if let Some(frame) = frames.last() {
        let visible = apply_bounds(bounds, &frame.points);
        lines.push(format!(
            "Last frame: {} of {} points in bounds",
            visible.len(),
            frame.points.len()
        ));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, AppResult};
    use crate::frames::{StabilityPoint, classify, stability_score};

    fn frame(gaqi: f64, gei: f64, tci: f64, sri: f64, timestamp: i64) -> Frame {
        let score = stability_score(gaqi, gei, tci, sri);
        Frame {
            timestamp: Some(timestamp),
            points: vec![StabilityPoint {
                gaqi,
                gei,
                tci,
                sri,
                score,
                status: classify(score),
            }],
        }
    }

    #[test]
    fn summary_counts_categories_and_bounds() -> AppResult<()> {
        let frames = vec![
            frame(10.0, 10.0, 10.0, 10.0, 1_700_000_000),
            frame(10.0, 10.0, 50.0, 50.0, 1_700_000_060),
            frame(90.0, 90.0, 50.0, 50.0, 1_700_000_120),
        ];
        let bounds = FilterBounds {
            tci_min: 0.0,
            tci_max: 40.0,
            sri_min: 0.0,
            sri_max: 40.0,
        };

        let lines = summary_lines(&frames, &bounds);
        let joined = lines.join("\n");
        if !joined.contains("Frames: 3") {
            return Err(AppError::validation(joined));
        }
        if !joined.contains("Stable: 1  Alert: 1  Unstable: 1") {
            return Err(AppError::validation(joined));
        }
        if !joined.contains("Last frame: 0 of 1 points in bounds") {
            return Err(AppError::validation(joined));
        }
        Ok(())
    }

    #[test]
    fn empty_history_summarizes_without_sample_lines() -> AppResult<()> {
        let lines = summary_lines(&[], &FilterBounds::FULL);
        let joined = lines.join("\n");
        if !joined.contains("Frames: 0") {
            return Err(AppError::validation(joined));
        }
        if joined.contains("First:") || joined.contains("Last frame:") {
            return Err(AppError::validation(joined));
        }
        Ok(())
    }
}

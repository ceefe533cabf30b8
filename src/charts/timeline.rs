use plotters::prelude::*;

use crate::error::AppResult;
use crate::frames::{ALERT_MAX_SCORE, Frame, STABLE_MAX_SCORE};

use super::{ALERT_COLOR, UNSTABLE_COLOR};

const PLOT_SIZE: (u32, u32) = (1600, 600);
const Y_HEADROOM: f64 = 1.1;

/// Stability score per frame, with the two band thresholds ruled across.
///
/// # Errors
///
/// Returns an error when the backing file cannot be drawn or presented.
pub fn plot_score_timeline(frames: &[Frame], path: &str) -> AppResult<()> {
    if frames.is_empty() {
        return Ok(());
    }

    let mut scores = Vec::with_capacity(frames.len());
    for (idx, frame) in frames.iter().enumerate() {
        let Some(point) = frame.points.first() else {
            continue;
        };
        scores.push((idx as f64, point.score));
    }

    let score_max = scores
        .iter()
        .map(|(_, score)| *score)
        .fold(1.0_f64, f64::max);
    let y_max = score_max * Y_HEADROOM;
    let x_max = (frames.len() as f64).max(1.0);

    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Stability Score", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Frame")
        .y_desc("Score")
        .draw()?;

    let thresholds = [
        ("alert threshold", STABLE_MAX_SCORE, ALERT_COLOR),
        ("unstable threshold", ALERT_MAX_SCORE, UNSTABLE_COLOR),
    ];
    for (label, level, color) in thresholds {
        chart
            .draw_series(LineSeries::new(
                [(0.0, level), (x_max, level)],
                color.mix(0.6),
            ))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x.saturating_add(20), y)], color)
            });
    }

    chart
        .draw_series(LineSeries::new(scores.iter().copied(), BLUE))?
        .label("score")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x.saturating_add(20), y)], BLUE));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}

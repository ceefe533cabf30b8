use plotters::prelude::*;

use crate::error::AppResult;
use crate::frames::{StabilityCategory, StabilityPoint};

use super::{ALERT_COLOR, STABLE_COLOR, UNSTABLE_COLOR};

const PLOT_SIZE: (u32, u32) = (900, 900);
const AXIS_MAX: f64 = 100.0;
const BAND_SPLIT: f64 = 50.0;
const BAND_OPACITY: f64 = 0.18;
const POINT_RADIUS: i32 = 4;

/// Draws one frame's filtered point set over the quadrant-colored GAQI/GEI
/// plane. The file at `path` is fully replaced on every call.
///
/// The background quadrants are a fixed visual approximation of the bands:
/// top-left stable, top-right alert, entire bottom band unstable. They do
/// not follow the score isosurface; points carry their own band color.
///
/// # Errors
///
/// Returns an error when the backing file cannot be drawn or presented.
pub fn plot_stability_scatter(points: &[StabilityPoint], path: &str) -> AppResult<()> {
    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Stability Map (GAQI x GEI)", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..AXIS_MAX, 0f64..AXIS_MAX)?;

    chart
        .configure_mesh()
        .x_desc("GAQI")
        .y_desc("GEI")
        .draw()?;

    let washes = [
        ([(0.0, BAND_SPLIT), (BAND_SPLIT, AXIS_MAX)], STABLE_COLOR),
        ([(BAND_SPLIT, BAND_SPLIT), (AXIS_MAX, AXIS_MAX)], ALERT_COLOR),
        ([(0.0, 0.0), (AXIS_MAX, BAND_SPLIT)], UNSTABLE_COLOR),
    ];
    for (corners, color) in washes {
        chart.draw_series(std::iter::once(Rectangle::new(
            corners,
            color.mix(BAND_OPACITY).filled(),
        )))?;
    }

    let categories = [
        (StabilityCategory::Stable, STABLE_COLOR),
        (StabilityCategory::Alert, ALERT_COLOR),
        (StabilityCategory::Unstable, UNSTABLE_COLOR),
    ];
    for (category, color) in categories {
        chart
            .draw_series(
                points
                    .iter()
                    .filter(|point| point.status == category)
                    .map(|point| {
                        Circle::new((point.gaqi, point.gei), POINT_RADIUS, color.filled())
                    }),
            )?
            .label(category.as_str())
            .legend(move |(x, y)| {
                Circle::new((x.saturating_add(10), y), POINT_RADIUS, color.filled())
            });
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()?;

    root.present()?;
    Ok(())
}

use plotters::prelude::*;

use crate::error::{AppError, AppResult, ChartError};
use crate::feed::CorrelationMatrix;

const PLOT_SIZE: (u32, u32) = (900, 900);
const NEGATIVE_RGB: (u8, u8, u8) = (0x3b, 0x82, 0xf6);
const POSITIVE_RGB: (u8, u8, u8) = (0xef, 0x44, 0x44);

/// Heatmap of the measure correlation matrix: white at zero, shading to
/// blue for negative and red for positive correlations.
///
/// # Errors
///
/// Returns an error when the matrix is not square or drawing fails.
pub fn plot_correlation_matrix(matrix: &CorrelationMatrix, path: &str) -> AppResult<()> {
    let size = matrix.labels.len();
    if size == 0 {
        return Ok(());
    }
    if matrix.matrix.len() != size {
        return Err(AppError::chart(ChartError::MatrixShape {
            rows: matrix.matrix.len(),
            labels: size,
        }));
    }

    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let axis_max = i32::try_from(size).unwrap_or(i32::MAX);
    let mut chart = ChartBuilder::on(&root)
        .caption("Measure Correlation", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(80)
        .y_label_area_size(120)
        .build_cartesian_2d(0i32..axis_max, 0i32..axis_max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(size)
        .y_labels(size)
        .x_label_formatter(&|idx| label_at(matrix, *idx))
        .y_label_formatter(&|idx| label_at(matrix, *idx))
        .draw()?;

    for (row_idx, row) in matrix.matrix.iter().enumerate() {
        let y = i32::try_from(row_idx).unwrap_or(i32::MAX);
        for (col_idx, value) in row.iter().enumerate() {
            let x = i32::try_from(col_idx).unwrap_or(i32::MAX);
            chart.draw_series(std::iter::once(Rectangle::new(
                [(x, y), (x.saturating_add(1), y.saturating_add(1))],
                correlation_color(*value).filled(),
            )))?;
        }
    }

    root.present()?;
    Ok(())
}

fn label_at(matrix: &CorrelationMatrix, idx: i32) -> String {
    usize::try_from(idx)
        .ok()
        .and_then(|pos| matrix.labels.get(pos))
        .cloned()
        .unwrap_or_default()
}

/// Maps a correlation in [-1, 1] to a cell color. Non-finite values render
/// as the zero color.
#[must_use]
pub(crate) fn correlation_color(value: f64) -> RGBColor {
    let clamped = if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    };
    let strength = clamped.abs();
    let (r, g, b) = if clamped < 0.0 {
        NEGATIVE_RGB
    } else {
        POSITIVE_RGB
    };
    RGBColor(
        blend_channel(r, strength),
        blend_channel(g, strength),
        blend_channel(b, strength),
    )
}

fn blend_channel(target: u8, strength: f64) -> u8 {
    let target = f64::from(target);
    let value = 255.0 + (target - 255.0) * strength;
    value.clamp(0.0, 255.0) as u8
}

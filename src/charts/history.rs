use plotters::prelude::*;

use crate::error::AppResult;
use crate::frames::Frame;

const PLOT_SIZE: (u32, u32) = (1600, 600);
const AXIS_FLOOR: f64 = 100.0;

/// Line chart of the four indices across the frame sequence.
///
/// # Errors
///
/// Returns an error when the backing file cannot be drawn or presented.
pub fn plot_index_history(frames: &[Frame], path: &str) -> AppResult<()> {
    if frames.is_empty() {
        return Ok(());
    }

    let mut gaqi = Vec::with_capacity(frames.len());
    let mut gei = Vec::with_capacity(frames.len());
    let mut tci = Vec::with_capacity(frames.len());
    let mut sri = Vec::with_capacity(frames.len());
    for (idx, frame) in frames.iter().enumerate() {
        let Some(point) = frame.points.first() else {
            continue;
        };
        let x = idx as f64;
        gaqi.push((x, point.gaqi));
        gei.push((x, point.gei));
        tci.push((x, point.tci));
        sri.push((x, point.sri));
    }

    let y_max = gaqi
        .iter()
        .chain(&gei)
        .chain(&tci)
        .chain(&sri)
        .map(|(_, value)| *value)
        .fold(AXIS_FLOOR, f64::max);
    let x_max = (frames.len() as f64).max(1.0);

    let root = BitMapBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Environmental Indices", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Frame")
        .y_desc("Index value")
        .draw()?;

    let series = [
        ("GAQI", &gaqi, BLUE),
        ("GEI", &gei, MAGENTA),
        ("TCI", &tci, GREEN),
        ("SRI", &sri, RED),
    ];
    for (label, values, color) in series {
        chart
            .draw_series(LineSeries::new(values.iter().copied(), color))?
            .label(label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x.saturating_add(20), y)], color)
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

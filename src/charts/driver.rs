use std::path::Path;

use tokio::fs;
use tracing::{error, info};

use crate::args::MonitorArgs;
use crate::error::{AppError, AppResult, ChartError};
use crate::feed::CorrelationMatrix;
use crate::frames::{Frame, apply_bounds};

use super::{
    plot_correlation_matrix, plot_index_history, plot_score_timeline, plot_stability_scatter,
};

/// Writes the full chart set for a classified history into the configured
/// output directory. Returns the directory when anything was plotted.
///
/// # Errors
///
/// Returns an error when the output directory cannot be created or a chart
/// fails to render.
pub async fn export_charts(
    frames: &[Frame],
    correlation: Option<&CorrelationMatrix>,
    args: &MonitorArgs,
) -> AppResult<Option<String>> {
    if frames.is_empty() {
        return Ok(None);
    }
    let path = args.charts_path.clone();

    if let Err(err) = fs::create_dir_all(Path::new(&path)).await {
        error!("Failed to create output directory '{}': {}", path, err);
        return Err(AppError::chart(ChartError::CreateOutputDir {
            path: path.into(),
            source: err,
        }));
    }

    info!("Plotting stability scatter...");
    let latest_points = frames
        .last()
        .map(|frame| apply_bounds(&args.bounds(), &frame.points))
        .unwrap_or_default();
    plot_stability_scatter(&latest_points, &format!("{}/stability_scatter.png", path))?;

    info!("Plotting index history...");
    plot_index_history(frames, &format!("{}/index_history.png", path))?;

    info!("Plotting stability score timeline...");
    plot_score_timeline(frames, &format!("{}/score_timeline.png", path))?;

    if let Some(matrix) = correlation {
        info!("Plotting measure correlation...");
        plot_correlation_matrix(matrix, &format!("{}/correlation_matrix.png", path))?;
    }

    Ok(Some(path))
}

use tracing::{info, warn};

use crate::args::MonitorArgs;
use crate::charts;
use crate::error::{AppError, AppResult, ValidationError};
use crate::feed::FeedClient;

use super::{fetch_correlation, fetch_frames};

pub(crate) async fn run_export(args: &MonitorArgs) -> AppResult<()> {
    let url = args
        .url
        .as_deref()
        .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;
    let client = FeedClient::new(url, args.timeout, &args.headers)?;

    let frames = fetch_frames(&client, args).await;
    if frames.is_empty() {
        warn!("No history frames to chart.");
        return Ok(());
    }

    let correlation = if args.no_correlation {
        None
    } else {
        fetch_correlation(&client).await
    };

    if let Some(path) = charts::export_charts(&frames, correlation.as_ref(), args).await? {
        info!("Charts written to '{}'.", path);
    }
    Ok(())
}

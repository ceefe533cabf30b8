mod export;
mod playback;
mod summary;
mod watch;

use tracing::warn;

use crate::args::MonitorArgs;
use crate::feed::{CorrelationMatrix, FeedClient};
use crate::frames::{Frame, build_frames};

pub(crate) use export::run_export;
pub(crate) use playback::run_playback;
pub(crate) use watch::run_watch;

/// Fetches and classifies the history window. Transport and decode failures
/// degrade to an empty frame list; the caller decides what "no data" means.
pub(super) async fn fetch_frames(client: &FeedClient, args: &MonitorArgs) -> Vec<Frame> {
    match client.history(args.lookback).await {
        Ok(payload) => build_frames(&payload.series),
        Err(err) => {
            warn!("History fetch failed: {}; treating as no data.", err);
            Vec::new()
        }
    }
}

/// Fetches the correlation matrix, degrading to `None` on failure.
pub(super) async fn fetch_correlation(client: &FeedClient) -> Option<CorrelationMatrix> {
    match client.correlation().await {
        Ok(matrix) => Some(matrix),
        Err(err) => {
            warn!("Correlation fetch failed: {}; omitting correlation view.", err);
            None
        }
    }
}

use crate::args::MonitorArgs;
use crate::error::{AppError, AppResult, ValidationError};

pub(in crate::entry) struct WatchPlan {
    pub(super) args: MonitorArgs,
}

impl WatchPlan {
    pub(super) fn new(args: MonitorArgs) -> AppResult<Self> {
        if args.url.is_none() {
            tracing::error!("Missing URL (set --url or provide in config).");
            return Err(AppError::validation(ValidationError::MissingUrl));
        }
        Ok(Self { args })
    }
}

pub(in crate::entry) enum RunPlan {
    Playback(MonitorArgs),
    Export(MonitorArgs),
    Watch(WatchPlan),
}

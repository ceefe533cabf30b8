use clap::ArgMatches;

use crate::args::MonitorArgs;
use crate::config::{apply_config, load_config};
use crate::error::{AppError, AppResult, ValidationError};

use super::types::{RunPlan, WatchPlan};

pub(crate) fn build_plan(mut args: MonitorArgs, matches: &ArgMatches) -> AppResult<RunPlan> {
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, matches, &config)?;
    }

    if args.playback {
        ensure_url(&args)?;
        return Ok(RunPlan::Playback(args));
    }

    if args.export_charts {
        ensure_url(&args)?;
        return Ok(RunPlan::Export(args));
    }

    Ok(RunPlan::Watch(WatchPlan::new(args)?))
}

fn ensure_url(args: &MonitorArgs) -> AppResult<()> {
    if args.url.is_none() {
        tracing::error!("Missing URL (set --url or provide in config).");
        return Err(AppError::validation(ValidationError::MissingUrl));
    }
    Ok(())
}

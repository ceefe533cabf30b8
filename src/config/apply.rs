use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::args::{MonitorArgs, parse_header};
use crate::error::{AppError, AppResult, ConfigError};

use super::types::{ConfigFile, DurationValue};

fn is_cli(matches: &ArgMatches, name: &str) -> bool {
    matches.value_source(name) == Some(ValueSource::CommandLine)
}

fn resolve_duration(
    value: &DurationValue,
    field: &'static str,
) -> AppResult<std::time::Duration> {
    value.to_duration().map_err(|err| {
        AppError::config(ConfigError::InvalidDuration { field, source: err })
    })
}

/// Applies config-file values to CLI arguments. A value set explicitly on
/// the command line always wins.
///
/// # Errors
///
/// Returns an error when config values are malformed.
pub fn apply_config(
    args: &mut MonitorArgs,
    matches: &ArgMatches,
    config: &ConfigFile,
) -> AppResult<()> {
    if !is_cli(matches, "url")
        && let Some(url) = config.url.clone()
    {
        args.url = Some(url);
    }

    if !is_cli(matches, "headers")
        && let Some(headers) = config.headers.as_ref()
    {
        let mut parsed = Vec::with_capacity(headers.len());
        for header in headers {
            parsed.push(parse_header(header)?);
        }
        args.headers = parsed;
    }

    if !is_cli(matches, "timeout")
        && let Some(timeout) = config.timeout.as_ref()
    {
        args.timeout = resolve_duration(timeout, "timeout")?;
    }

    if !is_cli(matches, "lookback")
        && let Some(lookback) = config.lookback.as_ref()
    {
        args.lookback = resolve_duration(lookback, "lookback")?;
    }

    if !is_cli(matches, "tick")
        && let Some(tick) = config.tick.as_ref()
    {
        args.tick = resolve_duration(tick, "tick")?;
    }

    if !is_cli(matches, "poll")
        && let Some(poll) = config.poll.as_ref()
    {
        args.poll = resolve_duration(poll, "poll")?;
    }

    if !is_cli(matches, "tci_min")
        && let Some(value) = config.tci_min
    {
        args.tci_min = value;
    }

    if !is_cli(matches, "tci_max")
        && let Some(value) = config.tci_max
    {
        args.tci_max = value;
    }

    if !is_cli(matches, "sri_min")
        && let Some(value) = config.sri_min
    {
        args.sri_min = value;
    }

    if !is_cli(matches, "sri_max")
        && let Some(value) = config.sri_max
    {
        args.sri_max = value;
    }

    if !is_cli(matches, "charts_path")
        && let Some(path) = config.charts_path.clone()
    {
        args.charts_path = path;
    }

    if !is_cli(matches, "no_correlation")
        && let Some(no_correlation) = config.no_correlation
    {
        args.no_correlation = no_correlation;
    }

    if !is_cli(matches, "no_ui")
        && let Some(no_ui) = config.no_ui
    {
        args.no_ui = no_ui;
    }

    if !is_cli(matches, "no_color")
        && let Some(no_color) = config.no_color
    {
        args.no_color = no_color;
    }

    Ok(())
}

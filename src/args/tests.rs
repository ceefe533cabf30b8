use std::time::Duration;

use clap::Parser;

use crate::error::{AppError, AppResult};

use super::MonitorArgs;
use super::parsers::{parse_bound_arg, parse_duration_arg, parse_header};

#[test]
fn duration_units_parse() -> AppResult<()> {
    let cases = [
        ("400ms", Duration::from_millis(400)),
        ("30s", Duration::from_secs(30)),
        ("30", Duration::from_secs(30)),
        ("5m", Duration::from_secs(300)),
        ("1h", Duration::from_secs(3600)),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration_arg(input)?;
        if parsed != expected {
            return Err(AppError::validation(format!(
                "'{}' parsed to {:?}",
                input, parsed
            )));
        }
    }
    Ok(())
}

#[test]
fn invalid_durations_are_rejected() -> AppResult<()> {
    for input in ["", "abc", "10d", "0s"] {
        if parse_duration_arg(input).is_ok() {
            return Err(AppError::validation(format!("'{}' was accepted", input)));
        }
    }
    Ok(())
}

#[test]
fn headers_split_on_first_colon() -> AppResult<()> {
    let (key, value) = parse_header("Authorization: Bearer a:b:c")?;
    if key != "Authorization" || value != "Bearer a:b:c" {
        return Err(AppError::validation(format!(
            "Parsed to '{}': '{}'",
            key, value
        )));
    }
    if parse_header("no separator").is_ok() {
        return Err(AppError::validation("Missing colon was accepted"));
    }
    Ok(())
}

#[test]
fn bounds_must_be_finite() -> AppResult<()> {
    let parsed = parse_bound_arg("42.5")?;
    if parsed != 42.5 {
        return Err(AppError::validation(format!("Parsed to {}", parsed)));
    }
    let negative = parse_bound_arg("-10")?;
    if negative != -10.0 {
        return Err(AppError::validation(format!("Parsed to {}", negative)));
    }
    for input in ["nan", "inf", "-inf", "ten"] {
        if parse_bound_arg(input).is_ok() {
            return Err(AppError::validation(format!("'{}' was accepted", input)));
        }
    }
    Ok(())
}

#[test]
fn cli_defaults_cover_the_full_index_range() -> AppResult<()> {
    let args = MonitorArgs::try_parse_from(["airscope", "--url", "http://localhost:8080"])?;
    let bounds = args.bounds();
    if bounds.tci_min != 0.0
        || bounds.tci_max != 100.0
        || bounds.sri_min != 0.0
        || bounds.sri_max != 100.0
    {
        return Err(AppError::validation(format!("Unexpected bounds {:?}", bounds)));
    }
    if args.tick != Duration::from_millis(400) {
        return Err(AppError::validation(format!(
            "Unexpected tick {:?}",
            args.tick
        )));
    }
    if args.playback || args.export_charts || args.no_ui {
        return Err(AppError::validation("Mode flags should default to off"));
    }
    Ok(())
}

#[test]
fn cli_accepts_inverted_bounds() -> AppResult<()> {
    let args = MonitorArgs::try_parse_from([
        "airscope",
        "--url",
        "http://localhost:8080",
        "--tci-min",
        "80",
        "--tci-max",
        "20",
    ])?;
    let bounds = args.bounds();
    if bounds.tci_min != 80.0 || bounds.tci_max != 20.0 {
        return Err(AppError::validation(format!("Unexpected bounds {:?}", bounds)));
    }
    Ok(())
}

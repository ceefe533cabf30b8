use std::time::Duration;

use crate::error::{AppError, AppResult, ValidationError};

/// Parses durations like `400ms`, `30s`, `5m`, `1h`; a bare number means
/// seconds.
///
/// # Errors
///
/// Returns an error for empty input, unknown units, overflow, or a zero
/// duration.
pub fn parse_duration_arg(value: &str) -> AppResult<Duration> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::validation(ValidationError::DurationEmpty));
    }

    let mut digits_len = 0usize;
    for ch in value.chars() {
        if ch.is_ascii_digit() {
            digits_len = digits_len.saturating_add(1);
        } else {
            break;
        }
    }
    if digits_len == 0 {
        return Err(AppError::validation(ValidationError::InvalidDurationFormat {
            value: value.to_owned(),
        }));
    }
    let (num_part, unit_part) = value.split_at(digits_len);
    let number: u64 = num_part.parse().map_err(|err| {
        AppError::validation(ValidationError::InvalidDurationNumber {
            value: value.to_owned(),
            source: err,
        })
    })?;

    let unit = if unit_part.is_empty() { "s" } else { unit_part };
    let duration = match unit {
        "ms" => Duration::from_millis(number),
        "s" => Duration::from_secs(number),
        "m" => {
            let secs = number
                .checked_mul(60)
                .ok_or_else(|| AppError::validation(ValidationError::DurationOverflow))?;
            Duration::from_secs(secs)
        }
        "h" => {
            let secs = number
                .checked_mul(60)
                .and_then(|seconds| seconds.checked_mul(60))
                .ok_or_else(|| AppError::validation(ValidationError::DurationOverflow))?;
            Duration::from_secs(secs)
        }
        _ => {
            return Err(AppError::validation(ValidationError::InvalidDurationUnit {
                unit: unit.to_owned(),
            }));
        }
    };

    if duration.as_millis() == 0 {
        return Err(AppError::validation(ValidationError::DurationZero));
    }

    Ok(duration)
}

/// Parses a `Key: Value` header argument.
///
/// # Errors
///
/// Returns an error when the separator or key is missing.
pub fn parse_header(value: &str) -> AppResult<(String, String)> {
    let Some((key, val)) = value.split_once(':') else {
        return Err(AppError::validation(ValidationError::InvalidHeaderFormat {
            value: value.to_owned(),
        }));
    };
    let key = key.trim();
    if key.is_empty() {
        return Err(AppError::validation(ValidationError::InvalidHeaderFormat {
            value: value.to_owned(),
        }));
    }
    Ok((key.to_owned(), val.trim().to_owned()))
}

/// Parses a finite numeric filter bound.
///
/// Inverted min/max pairs are allowed (they filter everything out), but NaN
/// and infinities are rejected here.
///
/// # Errors
///
/// Returns an error when the value is not a finite number.
pub fn parse_bound_arg(value: &str) -> AppResult<f64> {
    let trimmed = value.trim();
    let bound: f64 = trimmed.parse().map_err(|err| {
        AppError::validation(ValidationError::InvalidBoundNumber {
            value: trimmed.to_owned(),
            source: err,
        })
    })?;
    if !bound.is_finite() {
        return Err(AppError::validation(ValidationError::BoundNotFinite {
            value: trimmed.to_owned(),
        }));
    }
    Ok(bound)
}

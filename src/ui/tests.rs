use crate::error::{AppError, AppResult};
use crate::frames::StabilityCategory;

use super::model::{
    format_index, format_score, format_timestamp, index_ratio, scrubber_label, scrubber_ratio,
};
use super::render::{category_rgb, correlation_cell_rgb};

#[test]
fn indices_format_to_one_decimal_and_scores_to_two() -> AppResult<()> {
    if format_index(12.34) != "12.3" {
        return Err(AppError::validation(format_index(12.34)));
    }
    if format_index(50.0) != "50.0" {
        return Err(AppError::validation(format_index(50.0)));
    }
    if format_score(0.728_011) != "0.73" {
        return Err(AppError::validation(format_score(0.728_011)));
    }
    if format_score(1.0) != "1.00" {
        return Err(AppError::validation(format_score(1.0)));
    }
    Ok(())
}

#[test]
fn timestamps_format_as_utc_or_dash() -> AppResult<()> {
    let formatted = format_timestamp(Some(0));
    if formatted != "1970-01-01 00:00:00 UTC" {
        return Err(AppError::validation(formatted));
    }
    if format_timestamp(None) != "-" {
        return Err(AppError::validation("Missing timestamp should render '-'"));
    }
    Ok(())
}

#[test]
fn scrubber_label_is_one_based_and_clamped() -> AppResult<()> {
    if scrubber_label(0, 0) != "frame 0/0" {
        return Err(AppError::validation(scrubber_label(0, 0)));
    }
    if scrubber_label(0, 10) != "frame 1/10" {
        return Err(AppError::validation(scrubber_label(0, 10)));
    }
    if scrubber_label(9, 10) != "frame 10/10" {
        return Err(AppError::validation(scrubber_label(9, 10)));
    }
    if scrubber_label(42, 10) != "frame 10/10" {
        return Err(AppError::validation(scrubber_label(42, 10)));
    }
    Ok(())
}

#[test]
fn scrubber_ratio_stays_in_unit_range() -> AppResult<()> {
    let cases = [
        (0, 0, 0.0),
        (0, 1, 0.0),
        (0, 5, 0.0),
        (4, 5, 1.0),
        (99, 5, 1.0),
    ];
    for (index, count, expected) in cases {
        let ratio = scrubber_ratio(index, count);
        if ratio != expected {
            return Err(AppError::validation(format!(
                "ratio({}, {}) = {}",
                index, count, ratio
            )));
        }
    }
    Ok(())
}

#[test]
fn index_ratio_clamps_out_of_range_values() -> AppResult<()> {
    if index_ratio(50.0) != 0.5 {
        return Err(AppError::validation(format!("{}", index_ratio(50.0))));
    }
    if index_ratio(-10.0) != 0.0 {
        return Err(AppError::validation("Negative value should clamp to 0"));
    }
    if index_ratio(250.0) != 1.0 {
        return Err(AppError::validation("Oversized value should clamp to 1"));
    }
    if index_ratio(f64::NAN) != 0.0 {
        return Err(AppError::validation("NaN should clamp to 0"));
    }
    Ok(())
}

#[test]
fn category_colors_are_distinct() -> AppResult<()> {
    let stable = category_rgb(StabilityCategory::Stable);
    let alert = category_rgb(StabilityCategory::Alert);
    let unstable = category_rgb(StabilityCategory::Unstable);
    if stable == alert || alert == unstable || stable == unstable {
        return Err(AppError::validation("Category colors collide"));
    }
    Ok(())
}

#[test]
fn correlation_cells_share_the_heatmap_anchors() -> AppResult<()> {
    if correlation_cell_rgb(0.0) != (255, 255, 255) {
        return Err(AppError::validation("Zero correlation is not white"));
    }
    if correlation_cell_rgb(1.0) != (0xef, 0x44, 0x44) {
        return Err(AppError::validation("Full positive is not the red anchor"));
    }
    if correlation_cell_rgb(-1.0) != (0x3b, 0x82, 0xf6) {
        return Err(AppError::validation("Full negative is not the blue anchor"));
    }
    if correlation_cell_rgb(f64::NAN) != (255, 255, 255) {
        return Err(AppError::validation("NaN correlation is not white"));
    }
    Ok(())
}

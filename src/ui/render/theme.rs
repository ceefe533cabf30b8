use ratatui::style::{Color, Style};

use crate::frames::StabilityCategory;

pub(super) const UI_MARGIN: u16 = 1;
pub(super) const HEADER_HEIGHT: u16 = 3;
pub(super) const CHART_MIN_HEIGHT: u16 = 10;
pub(super) const PANEL_ROW_HEIGHT: u16 = 5;
pub(super) const SCRUBBER_HEIGHT: u16 = 3;
pub(super) const HELP_HEIGHT: u16 = 1;
pub(super) const GAUGE_HEIGHT: u16 = 3;

pub(super) const CHART_BG_RGB: (u8, u8, u8) = (0x0a, 0x0a, 0x0a);
pub(super) const PANEL_BORDER_RGB: (u8, u8, u8) = (0xe5, 0xe7, 0xeb);
pub(super) const PANEL_TEXT_RGB: (u8, u8, u8) = (0xff, 0xff, 0xff);
pub(super) const PANEL_MUTED_RGB: (u8, u8, u8) = (0xd1, 0xd5, 0xdb);
pub(super) const ACCENT_SCRUBBER_RGB: (u8, u8, u8) = (0xc0, 0x84, 0xfc);
pub(super) const ACCENT_SPARK_RGB: (u8, u8, u8) = (0x22, 0xd3, 0xee);
pub(super) const GAUGE_GAQI_RGB: (u8, u8, u8) = (0x38, 0xbd, 0xf8);
pub(super) const GAUGE_GEI_RGB: (u8, u8, u8) = (0xa7, 0x8b, 0xfa);
pub(super) const GAUGE_TCI_RGB: (u8, u8, u8) = (0x22, 0xd3, 0xee);
pub(super) const GAUGE_SRI_RGB: (u8, u8, u8) = (0xf4, 0x72, 0xb6);

pub(crate) const STABLE_RGB: (u8, u8, u8) = (0x22, 0xc5, 0x5e);
pub(crate) const ALERT_RGB: (u8, u8, u8) = (0xf5, 0x9e, 0x0b);
pub(crate) const UNSTABLE_RGB: (u8, u8, u8) = (0xef, 0x44, 0x44);

const CORRELATION_NEGATIVE_RGB: (u8, u8, u8) = (0x3b, 0x82, 0xf6);
const CORRELATION_POSITIVE_RGB: (u8, u8, u8) = (0xef, 0x44, 0x44);

pub(super) const fn rgb(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

pub(super) fn style_color(no_color: bool, color: Color) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(color)
    }
}

pub(super) fn panel_block_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default()
            .bg(rgb(CHART_BG_RGB))
            .fg(rgb(PANEL_TEXT_RGB))
    }
}

pub(super) fn panel_border_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(rgb(PANEL_BORDER_RGB))
    }
}

pub(super) fn panel_title_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(rgb(PANEL_TEXT_RGB))
    }
}

pub(super) fn axis_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().fg(rgb(PANEL_MUTED_RGB))
    }
}

pub(super) fn app_background_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default().bg(rgb(CHART_BG_RGB))
    }
}

pub(super) fn chart_surface_style(no_color: bool) -> Style {
    if no_color {
        Style::default()
    } else {
        Style::default()
            .bg(rgb(CHART_BG_RGB))
            .fg(rgb(PANEL_TEXT_RGB))
    }
}

pub(crate) const fn category_rgb(category: StabilityCategory) -> (u8, u8, u8) {
    match category {
        StabilityCategory::Stable => STABLE_RGB,
        StabilityCategory::Alert => ALERT_RGB,
        StabilityCategory::Unstable => UNSTABLE_RGB,
    }
}

/// Correlation cell color: white at zero, shading to blue for negative and
/// red for positive values. Mirrors the PNG heatmap mapping.
pub(crate) fn correlation_cell_rgb(value: f64) -> (u8, u8, u8) {
    let clamped = if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    };
    let strength = clamped.abs();
    let (r, g, b) = if clamped < 0.0 {
        CORRELATION_NEGATIVE_RGB
    } else {
        CORRELATION_POSITIVE_RGB
    };
    (
        blend_channel(r, strength),
        blend_channel(g, strength),
        blend_channel(b, strength),
    )
}

fn blend_channel(target: u8, strength: f64) -> u8 {
    let target = f64::from(target);
    let value = 255.0 + (target - 255.0) * strength;
    value.clamp(0.0, 255.0) as u8
}

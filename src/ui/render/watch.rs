use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::{Backend, Frame},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Sparkline},
};

use crate::ui::model::{WatchView, format_index, format_score, format_timestamp, index_ratio};

use super::theme::{
    ACCENT_SPARK_RGB, GAUGE_GAQI_RGB, GAUGE_GEI_RGB, GAUGE_HEIGHT, GAUGE_SRI_RGB, GAUGE_TCI_RGB,
    HEADER_HEIGHT, UI_MARGIN, app_background_style, category_rgb, correlation_cell_rgb,
    panel_block_style, panel_border_style, panel_title_style, rgb, style_color,
};

const CELL_TEXT: &str = " \u{2588}\u{2588}";
const LABEL_WIDTH: usize = 12;

pub(super) fn draw<B: Backend>(f: &mut Frame<'_, B>, view: &WatchView) {
    let size = f.size();
    f.render_widget(
        Block::default().style(app_background_style(view.no_color)),
        size,
    );

    let gauges_height = GAUGE_HEIGHT.saturating_mul(4);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(UI_MARGIN)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(gauges_height),
            Constraint::Min(6),
        ])
        .split(size);

    let (header, gauges, bottom) = match chunks.as_ref() {
        [a, b, c] => (*a, *b, *c),
        _ => return,
    };

    render_header(f, view, header);
    render_gauges(f, view, gauges);

    let bottom_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(bottom);
    if let [spark, grid] = bottom_chunks.as_ref() {
        render_sparkline(f, view, *spark);
        render_correlation(f, view, *grid);
    }
}

fn render_header<B: Backend>(f: &mut Frame<'_, B>, view: &WatchView, area: Rect) {
    let mut spans = Vec::new();
    match view.reading.as_ref() {
        Some(reading) => {
            spans.push(Span::raw(format!(
                "{} | ",
                format_timestamp(reading.timestamp)
            )));
            spans.push(Span::styled(
                format!("score {} ({})", format_score(reading.score), reading.status),
                style_color(view.no_color, rgb(category_rgb(reading.status))),
            ));
        }
        None => spans.push(Span::raw("waiting for first reading")),
    }
    spans.push(Span::raw(format!(" | poll {}s", view.poll.as_secs())));
    if view.stale {
        spans.push(Span::raw(" | STALE"));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" airscope - live watch ")
            .borders(Borders::ALL)
            .style(panel_block_style(view.no_color))
            .border_style(panel_border_style(view.no_color))
            .title_style(panel_title_style(view.no_color)),
    );
    f.render_widget(header, area);
}

fn render_gauges<B: Backend>(f: &mut Frame<'_, B>, view: &WatchView, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(GAUGE_HEIGHT),
            Constraint::Length(GAUGE_HEIGHT),
            Constraint::Length(GAUGE_HEIGHT),
            Constraint::Length(GAUGE_HEIGHT),
        ])
        .split(area);

    let Some(reading) = view.reading.as_ref() else {
        return;
    };
    let gauges = [
        ("GAQI", reading.gaqi, GAUGE_GAQI_RGB),
        ("GEI", reading.gei, GAUGE_GEI_RGB),
        ("TCI", reading.tci, GAUGE_TCI_RGB),
        ("SRI", reading.sri, GAUGE_SRI_RGB),
    ];
    for (slot, (title, value, accent)) in rows.iter().zip(gauges) {
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .style(panel_block_style(view.no_color))
                    .border_style(panel_border_style(view.no_color))
                    .title_style(panel_title_style(view.no_color)),
            )
            .gauge_style(style_color(view.no_color, rgb(accent)))
            .ratio(index_ratio(value))
            .label(format_index(value));
        f.render_widget(gauge, *slot);
    }
}

fn render_sparkline<B: Backend>(f: &mut Frame<'_, B>, view: &WatchView, area: Rect) {
    let sparkline = Sparkline::default()
        .block(
            Block::default()
                .title("Stability score (x100)")
                .borders(Borders::ALL)
                .style(panel_block_style(view.no_color))
                .border_style(panel_border_style(view.no_color))
                .title_style(panel_title_style(view.no_color)),
        )
        .style(style_color(view.no_color, rgb(ACCENT_SPARK_RGB)))
        .data(&view.recent_scores);
    f.render_widget(sparkline, area);
}

fn render_correlation<B: Backend>(f: &mut Frame<'_, B>, view: &WatchView, area: Rect) {
    let lines = view.correlation.as_ref().map_or_else(
        || vec![Line::from("No correlation data.")],
        |cells| {
            cells
                .matrix
                .iter()
                .zip(&cells.labels)
                .map(|(row, label)| {
                    let mut spans = vec![Span::raw(format!(
                        "{:<width$}",
                        truncated(label),
                        width = LABEL_WIDTH
                    ))];
                    for value in row {
                        if view.no_color {
                            spans.push(Span::raw(format!(" {:+.1}", value)));
                        } else {
                            spans.push(Span::styled(
                                CELL_TEXT,
                                style_color(false, rgb(correlation_cell_rgb(*value))),
                            ));
                        }
                    }
                    Line::from(spans)
                })
                .collect()
        },
    );
    let panel = Paragraph::new(lines).block(
        Block::default()
            .title("Measure correlation")
            .borders(Borders::ALL)
            .style(panel_block_style(view.no_color))
            .border_style(panel_border_style(view.no_color))
            .title_style(panel_title_style(view.no_color)),
    );
    f.render_widget(panel, area);
}

fn truncated(label: &str) -> String {
    label.chars().take(LABEL_WIDTH).collect()
}

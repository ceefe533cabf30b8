use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::{Backend, Frame},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph},
};

use crate::frames::StabilityCategory;
use crate::ui::model::{
    PlaybackView, format_index, format_score, format_timestamp, scrubber_label, scrubber_ratio,
};

use super::theme::{
    ACCENT_SCRUBBER_RGB, CHART_MIN_HEIGHT, HEADER_HEIGHT, HELP_HEIGHT, PANEL_MUTED_RGB,
    PANEL_ROW_HEIGHT, SCRUBBER_HEIGHT, UI_MARGIN, app_background_style, axis_style, category_rgb,
    chart_surface_style, panel_block_style, panel_border_style, panel_title_style, rgb,
    style_color,
};

const AXIS_MAX: f64 = 100.0;
const HELP_LINE: &str =
    "space play/pause | left/right scrub | home/end jump | t/T y/Y tci | s/S d/D sri | a apply | r reset | q quit";

pub(super) fn draw<B: Backend>(f: &mut Frame<'_, B>, view: &PlaybackView) {
    let size = f.size();
    f.render_widget(
        Block::default().style(app_background_style(view.no_color)),
        size,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(UI_MARGIN)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(CHART_MIN_HEIGHT),
            Constraint::Length(PANEL_ROW_HEIGHT),
            Constraint::Length(SCRUBBER_HEIGHT),
            Constraint::Length(HELP_HEIGHT),
        ])
        .split(size);

    let (header, chart_area, panel_row, scrubber, help) = match chunks.as_ref() {
        [a, b, c, d, e] => (*a, *b, *c, *d, *e),
        _ => return,
    };

    render_header(f, view, header);
    render_scatter(f, view, chart_area);

    let panel_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(panel_row);
    if let [inspect, filter] = panel_chunks.as_ref() {
        render_inspection(f, view, *inspect);
        render_filter(f, view, *filter);
    }

    render_scrubber(f, view, scrubber);
    f.render_widget(
        Paragraph::new(HELP_LINE).style(style_color(view.no_color, rgb(PANEL_MUTED_RGB))),
        help,
    );
}

fn render_header<B: Backend>(f: &mut Frame<'_, B>, view: &PlaybackView, area: Rect) {
    let state_label = if view.playing { "playing" } else { "paused" };
    let line = Line::from(vec![
        Span::raw(format!("{} | ", state_label)),
        Span::raw(format!("{} | ", format_timestamp(view.timestamp))),
        Span::raw(scrubber_label(view.frame_index, view.frame_count)),
    ]);
    let header = Paragraph::new(line).alignment(Alignment::Left).block(
        Block::default()
            .title(" airscope - stability playback ")
            .borders(Borders::ALL)
            .style(panel_block_style(view.no_color))
            .border_style(panel_border_style(view.no_color))
            .title_style(panel_title_style(view.no_color)),
    );
    f.render_widget(header, area);
}

fn render_scatter<B: Backend>(f: &mut Frame<'_, B>, view: &PlaybackView, area: Rect) {
    let mut stable = Vec::new();
    let mut alert = Vec::new();
    let mut unstable = Vec::new();
    for point in &view.visible {
        let coords = (point.gaqi.clamp(0.0, AXIS_MAX), point.gei.clamp(0.0, AXIS_MAX));
        match point.status {
            StabilityCategory::Stable => stable.push(coords),
            StabilityCategory::Alert => alert.push(coords),
            StabilityCategory::Unstable => unstable.push(coords),
        }
    }

    let datasets = vec![
        scatter_dataset("stable", &stable, StabilityCategory::Stable, view.no_color),
        scatter_dataset("alert", &alert, StabilityCategory::Alert, view.no_color),
        scatter_dataset(
            "unstable",
            &unstable,
            StabilityCategory::Unstable,
            view.no_color,
        ),
    ];

    let axis_labels = vec![Span::raw("0"), Span::raw("50"), Span::raw("100")];
    let chart = Chart::new(datasets)
        .style(chart_surface_style(view.no_color))
        .block(
            Block::default()
                .title("Stability Map (GAQI x GEI)")
                .borders(Borders::ALL)
                .style(panel_block_style(view.no_color))
                .border_style(panel_border_style(view.no_color))
                .title_style(panel_title_style(view.no_color)),
        )
        .x_axis(
            Axis::default()
                .title("GAQI")
                .style(axis_style(view.no_color))
                .bounds([0.0, AXIS_MAX])
                .labels(axis_labels.clone()),
        )
        .y_axis(
            Axis::default()
                .title("GEI")
                .style(axis_style(view.no_color))
                .bounds([0.0, AXIS_MAX])
                .labels(axis_labels),
        );
    f.render_widget(chart, area);
}

fn scatter_dataset<'data>(
    name: &'static str,
    data: &'data [(f64, f64)],
    category: StabilityCategory,
    no_color: bool,
) -> Dataset<'data> {
    Dataset::default()
        .name(name)
        .marker(symbols::Marker::Dot)
        .graph_type(GraphType::Scatter)
        .style(style_color(no_color, rgb(category_rgb(category))))
        .data(data)
}

fn render_inspection<B: Backend>(f: &mut Frame<'_, B>, view: &PlaybackView, area: Rect) {
    let lines = view.visible.first().map_or_else(
        || vec![Line::from("No points in bounds.")],
        |point| {
            vec![
                Line::from(format!(
                    "GAQI {}   GEI {}",
                    format_index(point.gaqi),
                    format_index(point.gei)
                )),
                Line::from(format!(
                    "TCI  {}   SRI {}",
                    format_index(point.tci),
                    format_index(point.sri)
                )),
                Line::from(Span::styled(
                    format!("Score {} ({})", format_score(point.score), point.status),
                    style_color(view.no_color, rgb(category_rgb(point.status))),
                )),
            ]
        },
    );
    let panel = Paragraph::new(lines).block(
        Block::default()
            .title("Inspection")
            .borders(Borders::ALL)
            .style(panel_block_style(view.no_color))
            .border_style(panel_border_style(view.no_color))
            .title_style(panel_title_style(view.no_color)),
    );
    f.render_widget(panel, area);
}

fn render_filter<B: Backend>(f: &mut Frame<'_, B>, view: &PlaybackView, area: Rect) {
    let lines = vec![
        Line::from(format!(
            "TCI [{}, {}]",
            format_index(view.bounds.tci_min),
            format_index(view.bounds.tci_max)
        )),
        Line::from(format!(
            "SRI [{}, {}]",
            format_index(view.bounds.sri_min),
            format_index(view.bounds.sri_max)
        )),
        Line::from(format!(
            "{} visible, {} hidden",
            view.visible.len(),
            view.hidden
        )),
    ];
    let panel = Paragraph::new(lines).block(
        Block::default()
            .title("Range Filter")
            .borders(Borders::ALL)
            .style(panel_block_style(view.no_color))
            .border_style(panel_border_style(view.no_color))
            .title_style(panel_title_style(view.no_color)),
    );
    f.render_widget(panel, area);
}

fn render_scrubber<B: Backend>(f: &mut Frame<'_, B>, view: &PlaybackView, area: Rect) {
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title("Position")
                .borders(Borders::ALL)
                .style(panel_block_style(view.no_color))
                .border_style(panel_border_style(view.no_color))
                .title_style(panel_title_style(view.no_color)),
        )
        .gauge_style(style_color(view.no_color, rgb(ACCENT_SCRUBBER_RGB)))
        .ratio(scrubber_ratio(view.frame_index, view.frame_count))
        .label(scrubber_label(view.frame_index, view.frame_count));
    f.render_widget(gauge, area);
}

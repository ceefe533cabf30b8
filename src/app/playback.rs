use std::io::{self, IsTerminal};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use tokio::sync::watch;
use tracing::warn;

use crate::args::MonitorArgs;
use crate::error::{AppError, AppResult, ValidationError};
use crate::feed::FeedClient;
use crate::frames::{FilterBounds, apply_bounds};
use crate::playback::{PlaybackState, TickTimer};
use crate::ui::model::{PlaybackView, UiData};
use crate::ui::render::setup_render_ui;

use super::fetch_frames;
use super::summary::summary_lines;

/// UI refresh poll cadence while interactive.
const UI_POLL_INTERVAL: Duration = Duration::from_millis(100);
/// Non-blocking poll interval for keyboard events.
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(0);
/// Step applied to a filter bound per keypress.
const BOUND_STEP: f64 = 5.0;

pub(crate) async fn run_playback(args: &MonitorArgs) -> AppResult<()> {
    let url = args
        .url
        .as_deref()
        .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;
    let client = FeedClient::new(url, args.timeout, &args.headers)?;

    let frames = fetch_frames(&client, args).await;
    if frames.is_empty() {
        warn!("No playable history frames; playback stays idle.");
        return Ok(());
    }

    let mut bounds = args.bounds();

    if !io::stdout().is_terminal() || args.no_ui {
        for line in summary_lines(&frames, &bounds) {
            println!("{line}");
        }
        return Ok(());
    }

    let stop = Arc::new(AtomicBool::new(false));
    let stop_handle = stop.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            stop_handle.store(true, Ordering::SeqCst);
        }
    });

    let (shutdown_tx, _) = crate::shutdown_handlers::shutdown_channel();
    let (ui_tx, _) = watch::channel(UiData::Idle);
    let render_ui_handle = setup_render_ui(&shutdown_tx, &ui_tx);

    let mut state = PlaybackState::new(frames);
    let mut timer = TickTimer::new(args.tick);
    timer.start(Instant::now());
    // The first frame renders immediately; playback starts armed.
    let mut dirty = true;
    let mut step_now = false;

    let result = async {
        loop {
            if stop.load(Ordering::SeqCst) {
                break;
            }

            if event::poll(EVENT_POLL_INTERVAL)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                    break;
                }
                if matches!(key.code, KeyCode::Char('c'))
                    && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                if matches!(key.code, KeyCode::Char(' ')) {
                    if state.toggle() {
                        // Resuming performs one animation step immediately.
                        timer.start(Instant::now());
                        step_now = true;
                    } else {
                        timer.stop();
                        dirty = true;
                    }
                } else if matches!(key.code, KeyCode::Left | KeyCode::Char('h')) {
                    // Scrubbing never changes the play/pause state.
                    state.step_back();
                    dirty = true;
                } else if matches!(key.code, KeyCode::Right | KeyCode::Char('l')) {
                    state.step_forward();
                    dirty = true;
                } else if matches!(key.code, KeyCode::Home) {
                    state.scrub_to(0);
                    dirty = true;
                } else if matches!(key.code, KeyCode::End) {
                    state.scrub_to(state.frame_count().saturating_sub(1));
                    dirty = true;
                } else if matches!(key.code, KeyCode::Char('t')) {
                    bounds.tci_min -= BOUND_STEP;
                    dirty = true;
                } else if matches!(key.code, KeyCode::Char('T')) {
                    bounds.tci_min += BOUND_STEP;
                    dirty = true;
                } else if matches!(key.code, KeyCode::Char('y')) {
                    bounds.tci_max -= BOUND_STEP;
                    dirty = true;
                } else if matches!(key.code, KeyCode::Char('Y')) {
                    bounds.tci_max += BOUND_STEP;
                    dirty = true;
                } else if matches!(key.code, KeyCode::Char('s')) {
                    bounds.sri_min -= BOUND_STEP;
                    dirty = true;
                } else if matches!(key.code, KeyCode::Char('S')) {
                    bounds.sri_min += BOUND_STEP;
                    dirty = true;
                } else if matches!(key.code, KeyCode::Char('d')) {
                    bounds.sri_max -= BOUND_STEP;
                    dirty = true;
                } else if matches!(key.code, KeyCode::Char('D')) {
                    bounds.sri_max += BOUND_STEP;
                    dirty = true;
                } else if matches!(key.code, KeyCode::Char('a')) {
                    // Re-filter and re-render with the live bounds.
                    dirty = true;
                } else if matches!(key.code, KeyCode::Char('r')) {
                    bounds = args.bounds();
                    dirty = true;
                }
            }

            let now = Instant::now();
            if step_now || (state.is_playing() && timer.due(now)) {
                step_now = false;
                let mut view = build_view(&state, &bounds, args.no_color);
                state.advance();
                // The scrubber reflects the post-advance position while the
                // chart shows the frame just rendered.
                view.frame_index = state.current_index();
                drop(ui_tx.send(UiData::Playback(view)));
                dirty = false;
            } else if dirty {
                let view = build_view(&state, &bounds, args.no_color);
                drop(ui_tx.send(UiData::Playback(view)));
                dirty = false;
            }

            tokio::time::sleep(UI_POLL_INTERVAL).await;
        }

        Ok::<(), AppError>(())
    }
    .await;

    drop(shutdown_tx.send(()));
    if let Err(err) = render_ui_handle.await {
        eprintln!("Playback UI task failed: {}", err);
    }
    result
}

fn build_view(state: &PlaybackState, bounds: &FilterBounds, no_color: bool) -> PlaybackView {
    let (timestamp, visible, hidden) = state.current_frame().map_or_else(
        || (None, Vec::new(), 0),
        |frame| {
            let visible = apply_bounds(bounds, &frame.points);
            let hidden = frame.points.len().saturating_sub(visible.len());
            (frame.timestamp, visible, hidden)
        },
    );
    PlaybackView {
        playing: state.is_playing(),
        frame_index: state.current_index(),
        frame_count: state.frame_count(),
        timestamp,
        bounds: *bounds,
        visible,
        hidden,
        no_color,
    }
}

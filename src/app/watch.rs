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
use crate::frames::build_frames;
use crate::playback::TickTimer;
use crate::ui::model::{
    CorrelationCells, CurrentReading, UiData, WatchView, format_index, format_score,
    format_timestamp,
};
use crate::ui::render::setup_render_ui;

use super::fetch_correlation;

/// UI refresh poll cadence while interactive.
const UI_POLL_INTERVAL: Duration = Duration::from_millis(100);
/// Non-blocking poll interval for keyboard events.
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(0);
/// Correlation refreshes once per this many reading polls.
const CORRELATION_EVERY: u64 = 5;
/// Sparkline history length.
const RECENT_SCORES_CAPACITY: usize = 120;
/// Sparkline scale factor and ceiling for out-of-range scores.
const SCORE_SPARK_SCALE: f64 = 100.0;
const SCORE_SPARK_CEILING: f64 = 400.0;

pub(crate) async fn run_watch(args: &MonitorArgs) -> AppResult<()> {
    let url = args
        .url
        .as_deref()
        .ok_or_else(|| AppError::validation(ValidationError::MissingUrl))?;
    let client = FeedClient::new(url, args.timeout, &args.headers)?;

    if !io::stdout().is_terminal() || args.no_ui {
        match fetch_reading(&client).await {
            Some(reading) => {
                println!("Latest reading ({}):", format_timestamp(reading.timestamp));
                println!(
                    "  GAQI {}  GEI {}  TCI {}  SRI {}",
                    format_index(reading.gaqi),
                    format_index(reading.gei),
                    format_index(reading.tci),
                    format_index(reading.sri)
                );
                println!(
                    "  Score {} ({})",
                    format_score(reading.score),
                    reading.status
                );
            }
            None => println!("No reading available."),
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

    let mut reading: Option<CurrentReading> = None;
    let mut correlation: Option<CorrelationCells> = None;
    let mut recent_scores: Vec<u64> = Vec::new();
    let mut stale = false;
    let mut cycles = 0u64;

    let mut poll_timer = TickTimer::new(args.poll);
    poll_timer.start(Instant::now());
    // First poll happens immediately; the timer paces the rest.
    let mut poll_now = true;

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
            }

            if poll_now || poll_timer.due(Instant::now()) {
                poll_now = false;
                match fetch_reading(&client).await {
                    Some(current) => {
                        reading = Some(current);
                        stale = false;
                        push_score(&mut recent_scores, current.score);
                    }
                    None => stale = true,
                }

                let refresh_correlation = !args.no_correlation
                    && cycles.checked_rem(CORRELATION_EVERY) == Some(0);
                if refresh_correlation
                    && let Some(matrix) = fetch_correlation(&client).await
                {
                    correlation = Some(CorrelationCells {
                        labels: matrix.labels,
                        matrix: matrix.matrix,
                    });
                }
                cycles = cycles.saturating_add(1);

                let view = WatchView {
                    reading,
                    recent_scores: recent_scores.clone(),
                    correlation: correlation.clone(),
                    stale,
                    poll: args.poll,
                    no_color: args.no_color,
                };
                drop(ui_tx.send(UiData::Watch(view)));
            }

            tokio::time::sleep(UI_POLL_INTERVAL).await;
        }

        Ok::<(), AppError>(())
    }
    .await;

    drop(shutdown_tx.send(()));
    if let Err(err) = render_ui_handle.await {
        eprintln!("Watch UI task failed: {}", err);
    }
    result
}

/// Fetches and classifies the latest reading. Incomplete readings are
/// dropped the same way history entries are.
async fn fetch_reading(client: &FeedClient) -> Option<CurrentReading> {
    match client.latest().await {
        Ok(latest) => {
            let entry = latest.into_series_entry();
            let frames = build_frames(std::slice::from_ref(&entry));
            frames
                .first()
                .and_then(|frame| frame.points.first())
                .map(|point| CurrentReading::from_point(point, entry.timestamp))
        }
        Err(err) => {
            warn!("Latest fetch failed: {}; keeping previous reading.", err);
            None
        }
    }
}

fn push_score(scores: &mut Vec<u64>, score: f64) {
    let scaled = (score * SCORE_SPARK_SCALE).clamp(0.0, SCORE_SPARK_CEILING) as u64;
    if scores.len() >= RECENT_SCORES_CAPACITY {
        scores.remove(0);
    }
    scores.push(scaled);
}

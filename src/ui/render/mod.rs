mod playback;
mod theme;
mod watch;

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::watch as watch_channel;

use crate::error::AppResult;
use crate::shutdown::ShutdownSender;

use super::model::UiData;

pub(crate) use theme::{category_rgb, correlation_cell_rgb};

pub struct UiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

fn setup_terminal() -> AppResult<UiTerminal> {
    enable_raw_mode()?;
    if let Err(err) = execute!(io::stdout(), EnterAlternateScreen) {
        disable_raw_mode().ok();
        return Err(err.into());
    }
    let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    Ok(UiTerminal { terminal })
}

fn cleanup_terminal() {
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen).ok();
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        cleanup_terminal();
    }
}

/// Spawns the render task: it owns the terminal and redraws on every
/// [`UiData`] sent through the watch channel until shutdown is signalled.
#[must_use]
pub fn setup_render_ui(
    shutdown_tx: &ShutdownSender,
    ui_tx: &watch_channel::Sender<UiData>,
) -> tokio::task::JoinHandle<()> {
    let mut ui_rx = ui_tx.subscribe();
    let mut shutdown_rx = shutdown_tx.subscribe();
    tokio::spawn(async move {
        let mut terminal = match setup_terminal() {
            Ok(terminal) => terminal,
            Err(err) => {
                eprintln!("Failed to setup terminal: {}", err);
                return;
            }
        };
        let _guard = TerminalGuard;

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => break,
                res = ui_rx.changed() => {
                    if res.is_ok() {
                        let data = ui_rx.borrow().clone();
                        render(&mut terminal, &data);
                    } else {
                        break;
                    }
                }
            }
        }
    })
}

fn render(ui: &mut UiTerminal, data: &UiData) {
    let result = ui.terminal.draw(|frame| match *data {
        UiData::Idle => {}
        UiData::Playback(ref view) => playback::draw(frame, view),
        UiData::Watch(ref view) => watch::draw(frame, view),
    });
    if let Err(err) = result {
        eprintln!("Failed to render UI: {}", err);
    }
}

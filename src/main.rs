mod app;
mod args;
mod charts;
mod config;
mod entry;
mod error;
mod feed;
mod frames;
mod playback;
mod shutdown;
mod shutdown_handlers;
mod system;
mod ui;

use error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}

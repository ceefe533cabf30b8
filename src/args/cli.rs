use clap::Parser;
use std::time::Duration;

use crate::frames::FilterBounds;

use super::defaults::default_charts_path;
use super::parsers::{parse_bound_arg, parse_duration_arg, parse_header};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Terminal visualization client for indoor air-quality monitoring - live index gauges, stability playback, correlation views, and chart exports."
)]
pub struct MonitorArgs {
    /// Base URL of the monitoring feed API
    #[arg(long, short)]
    pub url: Option<String>,

    /// Extra request headers in 'Key: Value' format (repeatable)
    #[arg(long, short = 'H', value_parser = parse_header)]
    pub headers: Vec<(String, String)>,

    /// Request timeout (supports ms/s/m/h)
    #[arg(long, value_parser = parse_duration_arg, default_value = "10s")]
    pub timeout: Duration,

    /// Replay recent history with stability classification instead of
    /// watching live readings
    #[arg(long)]
    pub playback: bool,

    /// Lookback window for history fetches (supports ms/s/m/h)
    #[arg(long, value_parser = parse_duration_arg, default_value = "1h")]
    pub lookback: Duration,

    /// Playback step cadence (supports ms/s/m/h)
    #[arg(long, value_parser = parse_duration_arg, default_value = "400ms")]
    pub tick: Duration,

    /// Poll interval for live readings (supports ms/s/m/h)
    #[arg(long, value_parser = parse_duration_arg, default_value = "5s")]
    pub poll: Duration,

    /// Lower TCI bound of the range filter
    #[arg(long = "tci-min", value_parser = parse_bound_arg, default_value = "0")]
    pub tci_min: f64,

    /// Upper TCI bound of the range filter
    #[arg(long = "tci-max", value_parser = parse_bound_arg, default_value = "100")]
    pub tci_max: f64,

    /// Lower SRI bound of the range filter
    #[arg(long = "sri-min", value_parser = parse_bound_arg, default_value = "0")]
    pub sri_min: f64,

    /// Upper SRI bound of the range filter
    #[arg(long = "sri-max", value_parser = parse_bound_arg, default_value = "100")]
    pub sri_max: f64,

    /// Fetch history once, write chart PNGs, and exit
    #[arg(long = "export-charts")]
    pub export_charts: bool,

    /// Output directory for exported charts
    #[arg(long = "charts-path", default_value_t = default_charts_path())]
    pub charts_path: String,

    /// Skip correlation matrix fetches
    #[arg(long = "no-correlation")]
    pub no_correlation: bool,

    /// Disable the interactive terminal UI (print a one-shot summary)
    #[arg(long = "no-ui")]
    pub no_ui: bool,

    /// Disable ANSI colors
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Verbose logging
    #[arg(long, short)]
    pub verbose: bool,

    /// Path to a TOML/JSON config file
    #[arg(long, short)]
    pub config: Option<String>,
}

impl MonitorArgs {
    /// Range-filter bounds as currently configured.
    #[must_use]
    pub const fn bounds(&self) -> FilterBounds {
        FilterBounds {
            tci_min: self.tci_min,
            tci_max: self.tci_max,
            sri_min: self.sri_min,
            sri_max: self.sri_max,
        }
    }
}

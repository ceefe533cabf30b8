//! HTTP client for the monitoring feed.
//!
//! All endpoints are plain JSON-over-HTTP GETs. Calls return typed errors;
//! the application drivers decide whether a failure degrades to "no data"
//! or aborts the run.
mod client;
mod types;

#[cfg(test)]
mod tests;

pub use client::FeedClient;
pub use types::{CorrelationMatrix, HistoryResponse, IndexBundle, LatestResponse, SeriesEntry};

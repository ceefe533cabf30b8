//! Core library for the `airscope` CLI.
//!
//! This crate provides the internal building blocks used by the binary:
//! CLI argument types, configuration parsing, the monitoring-feed HTTP
//! client, frame building and stability classification, playback state,
//! and the terminal UI model. The primary user-facing interface is the
//! `airscope` command-line application; library APIs may evolve as the
//! CLI grows.
pub mod args;
pub mod config;
pub mod error;
pub mod feed;
pub mod frames;
pub mod playback;
pub mod shutdown;
pub mod ui;

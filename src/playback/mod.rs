//! Playback over a loaded frame sequence.
//!
//! [`PlaybackState`] is a plain value driven by the application loop, so the
//! transition rules are testable without a terminal or a timer. The
//! [`TickTimer`] is the cancellable cadence gate for the animation loop.
mod state;
mod timer;


pub use state::PlaybackState;
pub use timer::TickTimer;

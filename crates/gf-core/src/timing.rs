//! Lightweight stage timing.
//!
//! Timers only measure; callers decide how to report (the engine logs
//! elapsed times through `tracing` at debug level).

use std::time::Instant;

/// A simple timer that measures elapsed time of one labelled stage.
pub struct Timer {
    label: String,
    start: Instant,
}

impl Timer {
    /// Create and start a new timer with the given label.
    pub fn start(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            start: Instant::now(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Elapsed time in seconds so far.
    pub fn elapsed_seconds(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    /// Stop the timer and return its label with the elapsed seconds.
    pub fn stop(self) -> (String, f64) {
        let elapsed = self.elapsed_seconds();
        (self.label, elapsed)
    }
}

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

/// Receives best-effort progress events from walkers.
///
/// Events fire roughly every `progress_interval` acceptances. The cadence is
/// approximate under concurrency: the shared acceptance counter can jump
/// past a multiple of the interval without any single walker landing exactly
/// on it, so sinks must tolerate skipped events. Implementations must be
/// cheap and non-blocking; a slow sink stalls the walker that called it.
pub trait ProgressSink: Send + Sync {
    /// Called by the walker `worker_id` after its acceptance landed on the
    /// progress cadence. `total_accepted` is the run-wide acceptance count.
    fn generated(&self, worker_id: usize, total_accepted: u64, elapsed: Duration);
}

/// Ignores all progress events
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn generated(&self, _worker_id: usize, _total_accepted: u64, _elapsed: Duration) {}
}

/// Logs progress events through `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn generated(&self, worker_id: usize, total_accepted: u64, elapsed: Duration) {
        info!(
            "[worker {}] generated {} strings, elapsed: {}ms",
            worker_id,
            total_accepted,
            elapsed.as_millis()
        );
    }
}

/// Drives an indicatif progress bar from progress events
#[derive(Debug)]
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    /// Creates a bar sized to the requested target count
    pub fn new(target: u64) -> Self {
        let style = ProgressStyle::with_template(
            "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} strings",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar());
        let bar = ProgressBar::new(target).with_style(style);
        Self { bar }
    }

    /// Fills the bar to `total` and finishes it
    pub fn finish(&self, total: u64) {
        self.bar.set_position(total);
        self.bar.finish();
    }
}

impl ProgressSink for BarProgress {
    fn generated(&self, _worker_id: usize, total_accepted: u64, _elapsed: Duration) {
        // Positions can arrive out of order across workers; never move backwards.
        if total_accepted > self.bar.position() {
            self.bar.set_position(total_accepted);
        }
    }
}

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;

/// Tracks walker activity during one generation run.
///
/// All counters are relaxed atomics shared across workers; they are
/// observational only and play no part in the termination protocol, which
/// lives entirely in the shared result set.
#[derive(Debug, Clone)]
pub struct GenerationMetrics {
    frames_walked: Arc<AtomicU64>,
    accepted: Arc<AtomicU64>,
    duplicates: Arc<AtomicU64>,
    saturated_rejections: Arc<AtomicU64>,
}

impl GenerationMetrics {
    /// Creates a new GenerationMetrics instance with all counters at zero
    pub fn new() -> Self {
        Self {
            frames_walked: Arc::new(AtomicU64::new(0)),
            accepted: Arc::new(AtomicU64::new(0)),
            duplicates: Arc::new(AtomicU64::new(0)),
            saturated_rejections: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Records one stack frame popped by a walker
    pub fn record_frame(&self) {
        self.frames_walked.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a candidate accepted into the result set
    pub fn record_accepted(&self) {
        self.accepted.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a candidate rejected because another walker produced it first
    pub fn record_duplicate(&self) {
        self.duplicates.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a candidate rejected because the set had already reached target size
    pub fn record_saturated(&self) {
        self.saturated_rejections.fetch_add(1, Ordering::Relaxed);
    }

    /// Gets a snapshot of the current counters
    pub fn get_stats(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            frames_walked: self.frames_walked.load(Ordering::Relaxed),
            accepted: self.accepted.load(Ordering::Relaxed),
            duplicates: self.duplicates.load(Ordering::Relaxed),
            saturated_rejections: self.saturated_rejections.load(Ordering::Relaxed),
        }
    }

    /// Logs the current counters
    pub fn log_stats(&self) {
        let stats = self.get_stats();
        info!(
            "Walker stats: {} frames, {} accepted, {} duplicates, {} saturated rejections",
            stats.frames_walked, stats.accepted, stats.duplicates, stats.saturated_rejections
        );
    }
}

impl Default for GenerationMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time view of the walker counters
#[derive(Debug, Clone, Copy)]
pub struct MetricsSnapshot {
    pub frames_walked: u64,
    pub accepted: u64,
    pub duplicates: u64,
    pub saturated_rejections: u64,
}

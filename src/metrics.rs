// Store metrics module
//
// Lightweight counters for profile persistence activity

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Counters for config store activity.
///
/// Uses atomic operations so a host can read them from another thread without locks.
/// The binary logs a summary on shutdown.
#[derive(Debug)]
pub struct StoreMetrics {
    /// Profiles loaded successfully
    pub loads: AtomicUsize,

    /// Profiles saved successfully
    pub saves: AtomicUsize,

    /// Store operations that returned an error
    pub failures: AtomicUsize,

    /// Font sets created by draining the font queue
    pub fonts_loaded: AtomicUsize,

    /// Total bytes written to profile files
    pub bytes_written: AtomicU64,

    start_time: Instant,
}

impl StoreMetrics {
    pub fn new() -> Self {
        Self {
            loads: AtomicUsize::new(0),
            saves: AtomicUsize::new(0),
            failures: AtomicUsize::new(0),
            fonts_loaded: AtomicUsize::new(0),
            bytes_written: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record_load(&self) {
        self.loads.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful save of `bytes` bytes
    pub fn record_save(&self, bytes: usize) {
        self.saves.fetch_add(1, Ordering::Relaxed);
        self.bytes_written.fetch_add(bytes as u64, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_font_loaded(&self) {
        self.fonts_loaded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// One-line summary of all counters
    pub fn summary(&self) -> String {
        format!(
            "{} loads, {} saves ({} bytes), {} failures, {} fonts loaded",
            self.loads.load(Ordering::Relaxed),
            self.saves.load(Ordering::Relaxed),
            self.bytes_written.load(Ordering::Relaxed),
            self.failures.load(Ordering::Relaxed),
            self.fonts_loaded.load(Ordering::Relaxed)
        )
    }

    pub fn log_summary(&self) {
        tracing::info!("=== Store Metrics Summary ===");
        tracing::info!("Uptime: {:.2}s", self.uptime().as_secs_f64());
        tracing::info!("{}", self.summary());
    }
}

impl Default for StoreMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_metrics_creation() {
        let metrics = StoreMetrics::new();
        assert_eq!(metrics.loads.load(Ordering::Relaxed), 0);
        assert_eq!(metrics.failures.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_record_operations() {
        let metrics = StoreMetrics::new();

        metrics.record_load();
        metrics.record_load();
        metrics.record_save(120);
        metrics.record_save(30);
        metrics.record_failure();
        metrics.record_font_loaded();

        assert_eq!(metrics.loads.load(Ordering::Relaxed), 2);
        assert_eq!(metrics.saves.load(Ordering::Relaxed), 2);
        assert_eq!(metrics.bytes_written.load(Ordering::Relaxed), 150);
        assert_eq!(metrics.failures.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.fonts_loaded.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_summary_format() {
        let metrics = StoreMetrics::new();
        metrics.record_save(64);

        assert_eq!(
            metrics.summary(),
            "0 loads, 1 saves (64 bytes), 0 failures, 0 fonts loaded"
        );
    }

    #[test]
    fn test_uptime() {
        let metrics = StoreMetrics::new();
        thread::sleep(Duration::from_millis(10));
        assert!(metrics.uptime().as_millis() >= 10);
    }
}

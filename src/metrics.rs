// Demo metrics module
//
// Lock-free counters for booking attempts, greetings and UI hand-offs

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Application metrics
///
/// Uses atomic operations so presenters (UI thread) and workers can record
/// without locks. Logged once on shutdown.
#[derive(Debug)]
pub struct Metrics {
    /// Booking attempts that spawned a worker
    pub bookings_started: AtomicU64,

    pub bookings_completed: AtomicU64,

    pub bookings_failed: AtomicU64,

    pub bookings_cancelled: AtomicU64,

    /// Book clicks rejected because a booking was in flight or the form was invalid
    pub book_clicks_ignored: AtomicU64,

    /// Completed "say hello" operations
    pub greetings: AtomicU64,

    /// Messages applied on the UI thread
    pub ui_messages: AtomicU64,

    /// Total booking worker time in milliseconds
    pub total_booking_time_ms: AtomicU64,

    /// Application start time
    start_time: Instant,
}

impl Metrics {
    /// Create a new Metrics instance
    pub fn new() -> Self {
        Self {
            bookings_started: AtomicU64::new(0),
            bookings_completed: AtomicU64::new(0),
            bookings_failed: AtomicU64::new(0),
            bookings_cancelled: AtomicU64::new(0),
            book_clicks_ignored: AtomicU64::new(0),
            greetings: AtomicU64::new(0),
            ui_messages: AtomicU64::new(0),
            total_booking_time_ms: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record_booking_started(&self) {
        self.bookings_started.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_booking_completed(&self) {
        self.bookings_completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_booking_failed(&self) {
        self.bookings_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_booking_cancelled(&self) {
        self.bookings_cancelled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_book_click_ignored(&self) {
        self.book_clicks_ignored.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_greeting(&self) {
        self.greetings.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_ui_message(&self) {
        self.ui_messages.fetch_add(1, Ordering::Relaxed);
    }

    /// Record how long a booking worker ran
    pub fn record_booking_time(&self, duration: Duration) {
        self.total_booking_time_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Get total uptime
    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Average worker time per finished booking in milliseconds
    pub fn avg_booking_time_ms(&self) -> f64 {
        let total = self.total_booking_time_ms.load(Ordering::Relaxed);
        let count = self.bookings_completed.load(Ordering::Relaxed)
            + self.bookings_failed.load(Ordering::Relaxed)
            + self.bookings_cancelled.load(Ordering::Relaxed);
        if count > 0 {
            total as f64 / count as f64
        } else {
            0.0
        }
    }

    /// Log metrics summary
    pub fn log_summary(&self) {
        tracing::info!("=== Metrics Summary ===");
        tracing::info!("Uptime: {:.2}s", self.uptime().as_secs_f64());
        tracing::info!(
            "Bookings: {} started, {} completed, {} failed, {} cancelled, {} clicks ignored",
            self.bookings_started.load(Ordering::Relaxed),
            self.bookings_completed.load(Ordering::Relaxed),
            self.bookings_failed.load(Ordering::Relaxed),
            self.bookings_cancelled.load(Ordering::Relaxed),
            self.book_clicks_ignored.load(Ordering::Relaxed)
        );
        tracing::info!(
            "Average booking time: {:.2}ms",
            self.avg_booking_time_ms()
        );
        tracing::info!(
            "Greetings: {}, UI messages: {}",
            self.greetings.load(Ordering::Relaxed),
            self.ui_messages.load(Ordering::Relaxed)
        );
    }
}

impl Default for Metrics {
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
        let metrics = Metrics::new();
        assert_eq!(metrics.bookings_started.load(Ordering::Relaxed), 0);
        assert_eq!(metrics.ui_messages.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_record_booking_outcomes() {
        let metrics = Metrics::new();

        metrics.record_booking_started();
        metrics.record_booking_started();
        metrics.record_booking_completed();
        metrics.record_booking_cancelled();
        metrics.record_book_click_ignored();

        assert_eq!(metrics.bookings_started.load(Ordering::Relaxed), 2);
        assert_eq!(metrics.bookings_completed.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.bookings_failed.load(Ordering::Relaxed), 0);
        assert_eq!(metrics.bookings_cancelled.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.book_clicks_ignored.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_avg_booking_time() {
        let metrics = Metrics::new();
        assert_eq!(metrics.avg_booking_time_ms(), 0.0);

        metrics.record_booking_completed();
        metrics.record_booking_time(Duration::from_millis(100));
        metrics.record_booking_failed();
        metrics.record_booking_time(Duration::from_millis(200));

        assert_eq!(metrics.total_booking_time_ms.load(Ordering::Relaxed), 300);
        assert_eq!(metrics.avg_booking_time_ms(), 150.0);
    }

    #[test]
    fn test_uptime() {
        let metrics = Metrics::new();
        thread::sleep(Duration::from_millis(10));
        assert!(metrics.uptime().as_millis() >= 10);
    }
}

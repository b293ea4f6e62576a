//! Basic metrics instrumentation for tracking performance.
//!
//! Provides counters and duration tracking for HTTP requests and API operations.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Metrics collector for tracking API performance.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Total number of HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total number of HTTP errors
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,

    /// Number of people fetched
    people_fetched_total: Arc<AtomicU64>,

    /// Number of groups fetched
    groups_fetched_total: Arc<AtomicU64>,

    /// Number of reminders created
    reminders_created_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_errors_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
            people_fetched_total: Arc::new(AtomicU64::new(0)),
            groups_fetched_total: Arc::new(AtomicU64::new(0)),
            reminders_created_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record an HTTP error.
    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record people fetched.
    pub fn record_people_fetched(&self, count: usize) {
        self.people_fetched_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Record groups fetched.
    pub fn record_groups_fetched(&self, count: usize) {
        self.groups_fetched_total
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Record a reminder created.
    pub fn record_reminder_created(&self) {
        self.reminders_created_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total HTTP requests.
    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP errors.
    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP duration in milliseconds.
    pub fn http_duration_total_ms(&self) -> u64 {
        self.http_duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average HTTP request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms.load(Ordering::Relaxed);
        let count = self.http_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get total people fetched.
    pub fn people_fetched_total(&self) -> u64 {
        self.people_fetched_total.load(Ordering::Relaxed)
    }

    /// Get total groups fetched.
    pub fn groups_fetched_total(&self) -> u64 {
        self.groups_fetched_total.load(Ordering::Relaxed)
    }

    /// Get total reminders created.
    pub fn reminders_created_total(&self) -> u64 {
        self.reminders_created_total.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_start_at_zero() {
        let metrics = Metrics::new();
        assert_eq!(metrics.http_requests_total(), 0);
        assert_eq!(metrics.http_errors_total(), 0);
        assert_eq!(metrics.http_duration_avg_ms(), 0.0);
    }

    #[test]
    fn test_metrics_record_and_read() {
        let metrics = Metrics::new();
        metrics.record_http_request(Duration::from_millis(10));
        metrics.record_http_request(Duration::from_millis(30));
        metrics.record_http_error();
        metrics.record_people_fetched(3);
        metrics.record_groups_fetched(2);
        metrics.record_reminder_created();

        assert_eq!(metrics.http_requests_total(), 2);
        assert_eq!(metrics.http_errors_total(), 1);
        assert_eq!(metrics.http_duration_total_ms(), 40);
        assert_eq!(metrics.http_duration_avg_ms(), 20.0);
        assert_eq!(metrics.people_fetched_total(), 3);
        assert_eq!(metrics.groups_fetched_total(), 2);
        assert_eq!(metrics.reminders_created_total(), 1);
    }

    #[test]
    fn test_metrics_shared_across_clones() {
        let metrics = Metrics::new();
        let clone = metrics.clone();
        clone.record_http_error();
        assert_eq!(metrics.http_errors_total(), 1);
    }
}

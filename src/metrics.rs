//! Lookup metrics and observability module.
//!
//! This module provides metrics tracking for localization operations,
//! including key hit rates, key fallbacks, and date parse failures.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global lookup metrics singleton.
pub struct LookupMetrics {
    /// Number of lookups that resolved to a translation entry
    key_hits: AtomicUsize,

    /// Number of lookups that fell back to echoing the key
    key_fallbacks: AtomicUsize,

    /// Number of date/date-time inputs that could not be parsed
    date_parse_failures: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<LookupMetrics> = OnceLock::new();

impl LookupMetrics {
    /// Get the global lookup metrics instance.
    ///
    /// This method initializes the metrics on first call and returns a
    /// reference to the singleton instance on subsequent calls.
    pub fn global() -> &'static LookupMetrics {
        METRICS.get_or_init(|| LookupMetrics {
            key_hits: AtomicUsize::new(0),
            key_fallbacks: AtomicUsize::new(0),
            date_parse_failures: AtomicUsize::new(0),
        })
    }

    /// Record a lookup that found a translation entry.
    pub fn record_hit(&self) {
        self.key_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that fell back to the key itself.
    pub fn record_key_fallback(&self) {
        self.key_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a date input that could not be parsed.
    pub fn record_date_parse_failure(&self) {
        self.date_parse_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current key hit count.
    pub fn key_hits(&self) -> usize {
        self.key_hits.load(Ordering::Relaxed)
    }

    /// Get the current key fallback count.
    pub fn key_fallbacks(&self) -> usize {
        self.key_fallbacks.load(Ordering::Relaxed)
    }

    /// Get the current date parse failure count.
    pub fn date_parse_failures(&self) -> usize {
        self.date_parse_failures.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.key_hits();
        let fallbacks = self.key_fallbacks();
        let total_lookups = hits + fallbacks;
        let hit_rate = if total_lookups > 0 {
            (hits as f64 / total_lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            key_hits: hits,
            key_fallbacks: fallbacks,
            hit_rate,
            date_parse_failures: self.date_parse_failures(),
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.key_hits.store(0, Ordering::Relaxed);
        self.key_fallbacks.store(0, Ordering::Relaxed);
        self.date_parse_failures.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of lookup metrics, suitable for logging or serving as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub key_hits: usize,
    pub key_fallbacks: usize,
    pub hit_rate: f64,
    pub date_parse_failures: usize,
}

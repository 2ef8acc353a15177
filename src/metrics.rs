//! Site activity metrics.
//!
//! Counters for locale and form activity. One instance is created by the
//! composition root and shared with both components.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters for localization and form activity.
#[derive(Debug, Default)]
pub struct SiteMetrics {
    /// Number of full renders (discovered entries + fixed labels)
    renders: AtomicUsize,

    /// Number of explicit locale toggles
    toggles: AtomicUsize,

    /// Number of live phone mask recomputations
    phone_formats: AtomicUsize,

    /// Number of submissions that passed validation and delivery
    submissions_accepted: AtomicUsize,

    /// Number of submissions that failed validation or delivery
    submissions_rejected: AtomicUsize,
}

impl SiteMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_render(&self) {
        self.renders.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_toggle(&self) {
        self.toggles.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_phone_format(&self) {
        self.phone_formats.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_accepted(&self) {
        self.submissions_accepted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_submission_rejected(&self) {
        self.submissions_rejected.fetch_add(1, Ordering::Relaxed);
    }

    pub fn renders(&self) -> usize {
        self.renders.load(Ordering::Relaxed)
    }

    pub fn toggles(&self) -> usize {
        self.toggles.load(Ordering::Relaxed)
    }

    pub fn phone_formats(&self) -> usize {
        self.phone_formats.load(Ordering::Relaxed)
    }

    pub fn submissions_accepted(&self) -> usize {
        self.submissions_accepted.load(Ordering::Relaxed)
    }

    pub fn submissions_rejected(&self) -> usize {
        self.submissions_rejected.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let accepted = self.submissions_accepted();
        let rejected = self.submissions_rejected();
        let total = accepted + rejected;
        let acceptance_rate = if total > 0 {
            (accepted as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            renders: self.renders(),
            toggles: self.toggles(),
            phone_formats: self.phone_formats(),
            submissions_accepted: accepted,
            submissions_rejected: rejected,
            acceptance_rate,
        }
    }
}

/// Snapshot of [`SiteMetrics`].
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub renders: usize,
    pub toggles: usize,
    pub phone_formats: usize,
    pub submissions_accepted: usize,
    pub submissions_rejected: usize,

    /// Accepted submissions as a percentage (0-100)
    pub acceptance_rate: f64,
}

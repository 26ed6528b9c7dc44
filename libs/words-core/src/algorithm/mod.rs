//! Spaced repetition interval policies.

pub mod forgetting_curve;

use chrono::{DateTime, Duration, Utc};

pub use forgetting_curve::ForgettingCurve;

/// Trait for review interval policies.
pub trait SpacedRepetitionAlgorithm: Send + Sync {
    /// Days until the next review for a word graded at `level` after
    /// `review_count` earlier reviews.
    fn interval_days(&self, level: Option<u8>, review_count: u32) -> f64;

    /// Instant of the next review, keeping sub-day precision.
    fn next_review(
        &self,
        level: Option<u8>,
        review_count: u32,
        now: DateTime<Utc>,
    ) -> DateTime<Utc> {
        now + days_to_duration(self.interval_days(level, review_count))
    }
}

/// Convert a possibly fractional day count to a duration in milliseconds.
pub fn days_to_duration(days: f64) -> Duration {
    const MILLIS_PER_DAY: f64 = 24.0 * 60.0 * 60.0 * 1000.0;
    Duration::milliseconds((days * MILLIS_PER_DAY).round() as i64)
}

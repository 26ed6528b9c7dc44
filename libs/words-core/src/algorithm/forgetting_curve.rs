//! Fixed-interval forgetting-curve schedule.
//!
//! Each mastery tier owns an ordered list of day offsets. The offset is
//! picked by how many times the word was reviewed before (under any tier),
//! clamped to the last entry.

use super::SpacedRepetitionAlgorithm;
use crate::types::MasteryLevel;

const FAIR_INTERVALS: [f64; 7] = [0.5, 1.0, 3.0, 7.0, 15.0, 30.0, 60.0];
const FAMILIAR_INTERVALS: [f64; 7] = [1.0, 3.0, 7.0, 15.0, 30.0, 60.0, 90.0];
const MASTERED_INTERVALS: [f64; 7] = [3.0, 7.0, 15.0, 30.0, 90.0, 180.0, 365.0];

/// Forgetting-curve table keyed by mastery tier.
#[derive(Debug, Clone)]
pub struct ForgettingCurve {
    pub fair: Vec<f64>,
    pub familiar: Vec<f64>,
    pub mastered: Vec<f64>,
}

impl Default for ForgettingCurve {
    fn default() -> Self {
        Self {
            fair: FAIR_INTERVALS.to_vec(),
            familiar: FAMILIAR_INTERVALS.to_vec(),
            mastered: MASTERED_INTERVALS.to_vec(),
        }
    }
}

impl ForgettingCurve {
    /// Offsets for a raw level value. Unknown or missing values use the
    /// fair tier.
    pub fn intervals(&self, level: Option<u8>) -> &[f64] {
        match level.and_then(MasteryLevel::from_value) {
            Some(MasteryLevel::Familiar) => &self.familiar,
            Some(MasteryLevel::Mastered) => &self.mastered,
            Some(MasteryLevel::Fair) | None => &self.fair,
        }
    }
}

impl SpacedRepetitionAlgorithm for ForgettingCurve {
    fn interval_days(&self, level: Option<u8>, review_count: u32) -> f64 {
        let intervals = self.intervals(level);
        let last = intervals.len().saturating_sub(1);
        let index = (review_count as usize).min(last);
        intervals.get(index).copied().unwrap_or(0.0)
    }
}

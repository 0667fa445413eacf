//! Request object: everything one generation run needs.

use tt_core::Course;
use tt_score::WeightConfig;

// ── SearchLimits ──────────────────────────────────────────────────────────────

/// Safety bounds on the amount of work and output.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchLimits {
    /// Number of ranked results to keep.  Must be ≥ 1.
    pub top_k: usize,

    /// Hard cap on combinations generated.  Reaching it sets `truncated`.
    pub max_combinations: u64,

    /// Total-combination count above which `large_search_space_warning` is
    /// raised before work begins.  Non-fatal.
    pub warning_threshold: u64,

    /// Call `EnumerationObserver::on_progress` every N combinations.
    /// 0 disables progress callbacks.
    pub progress_interval: u64,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            top_k:             10,
            max_combinations:  1_000_000,
            warning_threshold: 5_000_000,
            progress_interval: 5_000,
        }
    }
}

// ── ScheduleRequest ───────────────────────────────────────────────────────────

/// Input to one generation run.
///
/// Courses are expected to carry only their *active* options; filtering is
/// the caller's job.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleRequest {
    pub courses: Vec<Course>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub weights: WeightConfig,

    #[cfg_attr(feature = "serde", serde(default))]
    pub limits: SearchLimits,
}

impl ScheduleRequest {
    /// A request with default [`SearchLimits`].
    pub fn new(courses: Vec<Course>, weights: WeightConfig) -> Self {
        Self { courses, weights, limits: SearchLimits::default() }
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }
}

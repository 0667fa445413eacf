//! Engine output types.

use tt_core::{CourseId, ScheduleEntry};

/// One retained combination and its score.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RankedResult {
    /// One entry per course, in request course order.  Placeholders mark
    /// skipped optional courses.
    pub combination: Vec<ScheduleEntry>,

    pub score: f64,

    /// Position of this combination in the lexicographic enumeration order.
    /// Breaks score ties (earlier wins).
    pub discovery_index: u64,

    /// Chosen option index per course, parallel to `combination`.
    pub choice: Vec<usize>,
}

impl RankedResult {
    /// Entries actually taken (placeholders skipped).
    pub fn taken(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.combination.iter().filter(|e| !e.is_placeholder)
    }
}

/// Counters describing how far the search got.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchStats {
    /// Size of the full cartesian product (saturates at `u64::MAX`).
    pub total_combinations: u64,

    /// Combinations actually generated.
    pub enumerated: u64,

    /// Generated combinations that passed the conflict check.
    pub valid: u64,

    /// `true` if the run stopped because the cancel token was set.
    pub cancelled: bool,
}

/// Result of one generation run.
///
/// An empty `results` with `truncated == false` means nothing fits; with
/// `truncated == true` it means the search was cut short before finding
/// anything.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScheduleResponse {
    /// At most `top_k` results, descending by score, ties by discovery index.
    pub results: Vec<RankedResult>,

    /// The combination cap was hit or the run was cancelled.
    pub truncated: bool,

    /// The total combination count exceeded the warning threshold.
    pub large_search_space_warning: bool,

    pub stats: SearchStats,

    /// Optional courses left out because they had no options.
    pub dropped_courses: Vec<CourseId>,
}

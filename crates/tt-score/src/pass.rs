//! `ScoringPass`: composable additive scoring layers.
//!
//! A pass sees only the real (non-placeholder) entries R of a combination and
//! returns its additive contribution.  Passes chain with
//! `first.then(second)`; the chain's value is the sum of both.
//!
//! [`score`] and [`score_with`] are the entry points: they strip
//! placeholders, return [`EMPTY_SCHEDULE_SCORE`] for an empty R, and
//! otherwise sum the passes.

use tt_core::ScheduleEntry;

use crate::{BaseScore, DayPreferenceScore, WeightConfig};

/// Score of a combination in which every course was skipped.
pub const EMPTY_SCHEDULE_SCORE: f64 = -1000.0;

// ── Trait ─────────────────────────────────────────────────────────────────────

/// One additive term of the schedule score.
///
/// # Contract
///
/// - Pure: identical `(real, weights)` always yields the identical value.
/// - `real` never contains placeholders and is never empty.
/// - `real` has already passed the conflict check.
/// - Implementations must be `Send + Sync` (shared across Rayon threads).
pub trait ScoringPass: Send + Sync {
    fn evaluate(&self, real: &[&ScheduleEntry], weights: &WeightConfig) -> f64;
}

// ── Chained pass ──────────────────────────────────────────────────────────────

/// Sum of two passes.  Construct with `pass_a.then(pass_b)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ChainedPass<A: ScoringPass, B: ScoringPass> {
    first:  A,
    second: B,
}

impl<A: ScoringPass, B: ScoringPass> ScoringPass for ChainedPass<A, B> {
    #[inline]
    fn evaluate(&self, real: &[&ScheduleEntry], weights: &WeightConfig) -> f64 {
        self.first.evaluate(real, weights) + self.second.evaluate(real, weights)
    }
}

/// Extension trait that adds `.then(other)` to any `ScoringPass`.
pub trait ScoringPassExt: ScoringPass + Sized {
    fn then<B: ScoringPass>(self, other: B) -> ChainedPass<Self, B> {
        ChainedPass { first: self, second: other }
    }
}

impl<P: ScoringPass + Sized> ScoringPassExt for P {}

/// Base terms followed by the per-day preference layer.
pub type StandardScorer = ChainedPass<BaseScore, DayPreferenceScore>;

pub fn standard_scorer() -> StandardScorer {
    BaseScore.then(DayPreferenceScore)
}

// ── Entry points ──────────────────────────────────────────────────────────────

/// Score `combination` with the standard two-pass scorer.
pub fn score(combination: &[&ScheduleEntry], weights: &WeightConfig) -> f64 {
    score_with(&standard_scorer(), combination, weights)
}

/// Score `combination` with an arbitrary pass.
///
/// Apply only to combinations that passed `tt_core::is_valid`.
pub fn score_with<P: ScoringPass + ?Sized>(
    pass:        &P,
    combination: &[&ScheduleEntry],
    weights:     &WeightConfig,
) -> f64 {
    let real: Vec<&ScheduleEntry> = combination
        .iter()
        .copied()
        .filter(|e| !e.is_placeholder)
        .collect();
    if real.is_empty() {
        return EMPTY_SCHEDULE_SCORE;
    }
    pass.evaluate(&real, weights)
}

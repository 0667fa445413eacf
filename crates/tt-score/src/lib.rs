//! `tt-score` — desirability scoring for fully assigned weekly schedules.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`weights`] | `WeightConfig`, `ShiftPreference`, `DayPreference`, `DayPreferences` |
//! | [`pass`]    | `ScoringPass` trait, `ChainedPass`, `score`, `score_with`       |
//! | [`base`]    | `BaseScore`: gaps, rating, shift, load                          |
//! | [`day`]     | `DayPreferenceScore`: per-day avoid / prioritize / bias layer   |
//! | [`error`]   | `ScoreError`, `ScoreResult<T>`                                  |
//!
//! # Scoring model (summary)
//!
//! Only the non-placeholder entries R of a combination are scored:
//!
//! ```text
//! R empty → EMPTY_SCHEDULE_SCORE (-1000)
//! score   = BaseScore(R) + day_weight × DayPreferenceScore(R)
//! ```
//!
//! Both passes are pure functions of `(R, weights)`; they are composed with
//! `BaseScore.then(DayPreferenceScore)` and can be tested independently.

pub mod base;
pub mod day;
pub mod error;
pub mod pass;
pub mod weights;

#[cfg(test)]
mod tests;

pub use base::BaseScore;
pub use day::DayPreferenceScore;
pub use error::{ScoreError, ScoreResult};
pub use pass::{
    score, score_with, standard_scorer, ChainedPass, ScoringPass, ScoringPassExt, StandardScorer,
    EMPTY_SCHEDULE_SCORE,
};
pub use weights::{DayMode, DayPreference, DayPreferences, ShiftPreference, TimeBias, WeightConfig};

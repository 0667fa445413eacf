//! Error type for malformed schedule input.
//!
//! Every variant here is a contract violation: it is detected while building
//! the input types and is fatal to the request that carried it.

use thiserror::Error;

use crate::DayOfWeek;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("invalid interval on {day}: {start}..{end} (need start < end <= 1440)")]
    InvalidInterval {
        day:   DayOfWeek,
        start: u16,
        end:   u16,
    },

    #[error("invalid rating {0}: expected a finite value in 0..=10")]
    InvalidRating(f64),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `tt-core`.
pub type CoreResult<T> = Result<T, CoreError>;

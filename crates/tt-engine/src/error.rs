use thiserror::Error;
use tt_core::{CoreError, CourseId};
use tt_score::ScoreError;

/// Contract violations detected before enumeration starts.
///
/// Hitting the combination cap or being cancelled is not an error; those are
/// reported through `ScheduleResponse::truncated`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("mandatory course {course_id} ({name}) has no options")]
    MandatoryCourseHasNoOptions {
        course_id: CourseId,
        name:      String,
    },

    #[error(transparent)]
    InvalidWeightConfig(#[from] ScoreError),

    #[error("course {course_id}: {source}")]
    InvalidEntry {
        course_id: CourseId,
        #[source]
        source:    CoreError,
    },

    #[error("engine configuration error: {0}")]
    Config(String),
}

pub type EngineResult<T> = Result<T, EngineError>;

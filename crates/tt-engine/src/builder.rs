//! Fluent builder for constructing an [`Engine`].

use tt_core::{Course, ScheduleEntry};
use tt_score::{standard_scorer, ScoringPass, StandardScorer};

use crate::{CancelToken, Engine, EngineError, EngineResult, ScheduleRequest};

/// Fluent builder for [`Engine<S>`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                                |
/// |---------------------|----------------------------------------|
/// | `.cancel_token(t)`  | none; only the caps stop the run      |
/// | `.scorer(s)`        | `BaseScore.then(DayPreferenceScore)`   |
///
/// # Validation
///
/// [`build`](EngineBuilder::build) performs every contract check up front so
/// that enumeration itself cannot fail:
///
/// - `top_k ≥ 1`
/// - weights are finite and non-negative
/// - every entry has a valid rating and well-formed intervals
/// - every mandatory course has at least one real option
///
/// Placeholders are removed from mandatory courses, so a mandatory course is
/// never skipped.  Optional courses with no options are dropped (and reported in
/// `ScheduleResponse::dropped_courses`).  Optional courses missing their
/// placeholder get one appended.
pub struct EngineBuilder<S: ScoringPass = StandardScorer> {
    request: ScheduleRequest,
    cancel:  Option<CancelToken>,
    scorer:  S,
}

impl EngineBuilder<StandardScorer> {
    pub fn new(request: ScheduleRequest) -> Self {
        Self { request, cancel: None, scorer: standard_scorer() }
    }
}

impl<S: ScoringPass> EngineBuilder<S> {
    /// Supply a handle that stops the run at its next checkpoint when set.
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Replace the scoring pass chain.
    pub fn scorer<T: ScoringPass>(self, scorer: T) -> EngineBuilder<T> {
        EngineBuilder { request: self.request, cancel: self.cancel, scorer }
    }

    /// Validate inputs and return a ready-to-run [`Engine`].
    pub fn build(self) -> EngineResult<Engine<S>> {
        let ScheduleRequest { courses, weights, limits } = self.request;

        if limits.top_k == 0 {
            return Err(EngineError::Config("top_k must be at least 1".into()));
        }
        weights.validate()?;

        let mut kept = Vec::with_capacity(courses.len());
        let mut dropped = Vec::new();

        for mut course in courses {
            for entry in &course.options {
                entry.validate().map_err(|source| EngineError::InvalidEntry {
                    course_id: course.course_id,
                    source,
                })?;
            }

            if course.mandatory {
                strip_placeholders(&mut course);
                if !course.has_offerings() {
                    return Err(EngineError::MandatoryCourseHasNoOptions {
                        course_id: course.course_id,
                        name:      course.name,
                    });
                }
            } else if course.options.is_empty() {
                log::warn!(
                    "dropping optional course {} ({}): no active options",
                    course.course_id,
                    course.name
                );
                dropped.push(course.course_id);
                continue;
            } else {
                normalize_placeholder(&mut course);
            }

            kept.push(course);
        }

        Ok(Engine {
            courses: kept,
            weights,
            limits,
            cancel: self.cancel,
            scorer: self.scorer,
            dropped,
        })
    }
}

/// Ensure an optional course ends with exactly one placeholder.
fn normalize_placeholder(course: &mut Course) {
    let placeholders = course.options.iter().filter(|e| e.is_placeholder).count();
    let last_is_placeholder = course.options.last().is_some_and(|e| e.is_placeholder);
    if placeholders == 1 && last_is_placeholder {
        return;
    }
    log::debug!("normalizing placeholder for optional course {}", course.course_id);
    course.options.retain(|e| !e.is_placeholder);
    course.options.push(ScheduleEntry::placeholder(course.course_id));
}

/// Remove any placeholder from a mandatory course.
fn strip_placeholders(course: &mut Course) {
    if course.options.iter().any(|e| e.is_placeholder) {
        log::debug!("removing placeholder from mandatory course {}", course.course_id);
        course.options.retain(|e| !e.is_placeholder);
    }
}

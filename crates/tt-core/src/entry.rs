//! Course offerings: `ScheduleEntry` and `Course`.
//!
//! # Placeholder entries
//!
//! An optional course can be skipped.  Rather than special-casing that in
//! the enumerator, [`Course::optional`] appends one synthetic placeholder
//! entry after the real offerings.  The placeholder owns no intervals, so it
//! never conflicts, and scoring ignores it.  Choosing it means "do not take
//! this course".

use crate::{CoreError, CoreResult, CourseId, TimeInterval};

/// Upper bound of the instructor rating scale.
pub const MAX_RATING: f64 = 10.0;

const PLACEHOLDER_LABEL: &str = "N/A";

// ── ScheduleEntry ─────────────────────────────────────────────────────────────

/// One selectable offering ("group") of a course.
///
/// Built once by the ingestion layer and only ever read by the engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleEntry {
    /// Course this offering belongs to.
    pub course_id: CourseId,

    /// Group label as printed in the catalog (e.g. `"2"`).
    pub label: String,

    pub instructor: String,

    /// Instructor quality, `0.0..=10.0`.
    pub rating: f64,

    /// Weekly meetings.  Empty for placeholders.
    pub intervals: Vec<TimeInterval>,

    /// `true` for the synthetic "skip this course" option.
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_placeholder: bool,
}

impl ScheduleEntry {
    /// Construct a real offering, validating the rating.
    pub fn new(
        course_id:  CourseId,
        label:      impl Into<String>,
        instructor: impl Into<String>,
        rating:     f64,
        intervals:  Vec<TimeInterval>,
    ) -> CoreResult<Self> {
        let entry = Self {
            course_id,
            label: label.into(),
            instructor: instructor.into(),
            rating,
            intervals,
            is_placeholder: false,
        };
        entry.validate()?;
        Ok(entry)
    }

    /// The "do not take this course" option for `course_id`.
    pub fn placeholder(course_id: CourseId) -> Self {
        Self {
            course_id,
            label:          PLACEHOLDER_LABEL.to_string(),
            instructor:     PLACEHOLDER_LABEL.to_string(),
            rating:         0.0,
            intervals:      Vec::new(),
            is_placeholder: true,
        }
    }

    /// Re-check the rating and every interval.
    ///
    /// Entries that arrive through public fields or deserialization skip
    /// [`ScheduleEntry::new`], so the engine calls this before enumerating.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.rating.is_finite() || !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(CoreError::InvalidRating(self.rating));
        }
        if let Some(bad) = self.intervals.iter().find(|iv| !iv.is_well_formed()) {
            return Err(CoreError::InvalidInterval {
                day:   bad.day(),
                start: bad.start_minute(),
                end:   bad.end_minute(),
            });
        }
        Ok(())
    }

    /// Total weekly contact time in minutes.
    pub fn weekly_minutes(&self) -> u32 {
        self.intervals.iter().map(|iv| iv.duration_minutes() as u32).sum()
    }
}

// ── Course ────────────────────────────────────────────────────────────────────

/// A subject from which exactly one entry must be chosen.
///
/// Invariant (upheld by the constructors): an optional course with at least
/// one offering ends with exactly one placeholder; a mandatory course has
/// none.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Course {
    pub course_id: CourseId,

    /// Human-readable title, carried through to results.
    pub name: String,

    pub mandatory: bool,

    /// Mutually exclusive choices, in catalog order.
    pub options: Vec<ScheduleEntry>,
}

impl Course {
    /// A course that must be taken.  Placeholders in `offerings` are dropped.
    pub fn mandatory(
        course_id: CourseId,
        name:      impl Into<String>,
        mut offerings: Vec<ScheduleEntry>,
    ) -> Self {
        offerings.retain(|e| !e.is_placeholder);
        Self { course_id, name: name.into(), mandatory: true, options: offerings }
    }

    /// A course that may be skipped.
    ///
    /// Appends the placeholder after `offerings` unless `offerings` is empty,
    /// in which case the course has no options and the engine drops it.
    pub fn optional(
        course_id: CourseId,
        name:      impl Into<String>,
        mut offerings: Vec<ScheduleEntry>,
    ) -> Self {
        offerings.retain(|e| !e.is_placeholder);
        if !offerings.is_empty() {
            offerings.push(ScheduleEntry::placeholder(course_id));
        }
        Self { course_id, name: name.into(), mandatory: false, options: offerings }
    }

    /// Offerings excluding the placeholder.
    pub fn real_options(&self) -> impl Iterator<Item = &ScheduleEntry> {
        self.options.iter().filter(|e| !e.is_placeholder)
    }

    /// `true` if at least one non-placeholder offering exists.
    pub fn has_offerings(&self) -> bool {
        self.real_options().next().is_some()
    }
}

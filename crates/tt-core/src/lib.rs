//! `tt-core` — foundational types for the `timetable` schedule engine.
//!
//! This crate is a dependency of every other `tt-*` crate.  It has no `tt-*`
//! dependencies and a single external one (`thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CourseId`                                            |
//! | [`time`]        | `DayOfWeek`, `TimeInterval`, `overlaps`               |
//! | [`entry`]       | `ScheduleEntry`, `Course`                             |
//! | [`conflict`]    | `conflicts`, `is_valid`                               |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types; deserialized intervals are re-validated. |

pub mod conflict;
pub mod entry;
pub mod error;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use conflict::{conflicts, is_valid};
pub use entry::{Course, ScheduleEntry, MAX_RATING};
pub use error::{CoreError, CoreResult};
pub use ids::CourseId;
pub use time::{overlaps, parse_hhmm, DayOfWeek, TimeInterval, MINUTES_PER_DAY};

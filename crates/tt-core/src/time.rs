//! Weekly time model.
//!
//! # Design
//!
//! A schedule lives on a generic weekly template: six teaching days and a
//! minute-of-day clock.  A `TimeInterval` is a half-open span
//! `[start_minute, end_minute)` on one day:
//!
//! ```text
//! mon 09:00-10:00  ≡  TimeInterval { day: Mon, start: 540, end: 600 }
//! ```
//!
//! Integer minutes keep all overlap arithmetic exact.  Two intervals that
//! touch at an endpoint (`a.end == b.start`) do not overlap.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

/// Minutes in one day; the exclusive upper bound for `end_minute`.
pub const MINUTES_PER_DAY: u16 = 1_440;

// ── DayOfWeek ─────────────────────────────────────────────────────────────────

/// Teaching day of the weekly template.  Sunday is not modelled.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DayOfWeek {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl DayOfWeek {
    /// All days in week order.
    pub const ALL: [DayOfWeek; 6] = [
        DayOfWeek::Mon,
        DayOfWeek::Tue,
        DayOfWeek::Wed,
        DayOfWeek::Thu,
        DayOfWeek::Fri,
        DayOfWeek::Sat,
    ];

    /// Number of days in the template.
    pub const COUNT: usize = 6;

    /// Zero-based position in the week, usable as an array index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    fn as_str(self) -> &'static str {
        match self {
            DayOfWeek::Mon => "mon",
            DayOfWeek::Tue => "tue",
            DayOfWeek::Wed => "wed",
            DayOfWeek::Thu => "thu",
            DayOfWeek::Fri => "fri",
            DayOfWeek::Sat => "sat",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = CoreError;

    /// Accepts English and Spanish abbreviations, case-insensitive, with or
    /// without accents (`mon`, `Lun`, `MIÉ`, `sab`, `Monday`, …).
    fn from_str(s: &str) -> CoreResult<Self> {
        let lower = s.trim().to_lowercase().replace('é', "e").replace('á', "a");
        let prefix: String = lower.chars().take(3).collect();
        match prefix.as_str() {
            "mon" | "lun" => Ok(DayOfWeek::Mon),
            "tue" | "mar" => Ok(DayOfWeek::Tue),
            "wed" | "mie" => Ok(DayOfWeek::Wed),
            "thu" | "jue" => Ok(DayOfWeek::Thu),
            "fri" | "vie" => Ok(DayOfWeek::Fri),
            "sat" | "sab" => Ok(DayOfWeek::Sat),
            _ => Err(CoreError::Parse(format!("unknown day {s:?}"))),
        }
    }
}

// ── TimeInterval ──────────────────────────────────────────────────────────────

/// A half-open minute span `[start_minute, end_minute)` on one weekday.
///
/// Immutable once constructed; the only way in is [`TimeInterval::new`], which
/// enforces `start_minute < end_minute <= 1440`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawInterval"))]
pub struct TimeInterval {
    day:          DayOfWeek,
    start_minute: u16,
    end_minute:   u16,
}

impl TimeInterval {
    /// Build an interval, rejecting empty, inverted, or past-midnight spans.
    pub fn new(day: DayOfWeek, start_minute: u16, end_minute: u16) -> CoreResult<Self> {
        if start_minute >= end_minute || end_minute > MINUTES_PER_DAY {
            return Err(CoreError::InvalidInterval {
                day,
                start: start_minute,
                end:   end_minute,
            });
        }
        Ok(Self { day, start_minute, end_minute })
    }

    /// Build from `"HH:MM"` strings, e.g. `TimeInterval::parse(Mon, "07:00", "08:30")`.
    pub fn parse(day: DayOfWeek, start: &str, end: &str) -> CoreResult<Self> {
        Self::new(day, parse_hhmm(start)?, parse_hhmm(end)?)
    }

    #[inline]
    pub fn day(&self) -> DayOfWeek {
        self.day
    }

    #[inline]
    pub fn start_minute(&self) -> u16 {
        self.start_minute
    }

    #[inline]
    pub fn end_minute(&self) -> u16 {
        self.end_minute
    }

    #[inline]
    pub fn duration_minutes(&self) -> u16 {
        self.end_minute - self.start_minute
    }

    /// `true` if the bounds still satisfy the construction invariant.
    ///
    /// Always true for values built through [`TimeInterval::new`]; the engine
    /// re-checks it before enumeration starts.
    pub fn is_well_formed(&self) -> bool {
        self.start_minute < self.end_minute && self.end_minute <= MINUTES_PER_DAY
    }

    /// Same-day, half-open overlap.  See [`overlaps`].
    #[inline]
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        overlaps(self, other)
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}-{:02}:{:02}",
            self.day,
            self.start_minute / 60,
            self.start_minute % 60,
            self.end_minute / 60,
            self.end_minute % 60,
        )
    }
}

/// `true` iff `a` and `b` share at least one minute on the same day.
///
/// Touching endpoints (`a.end == b.start`) do not count.
#[inline]
pub fn overlaps(a: &TimeInterval, b: &TimeInterval) -> bool {
    a.day == b.day && a.start_minute < b.end_minute && b.start_minute < a.end_minute
}

/// Parse `"HH:MM"` (24-hour) into minutes since midnight.
///
/// `"24:00"` is accepted as the end-of-day bound.
pub fn parse_hhmm(s: &str) -> CoreResult<u16> {
    let bad = || CoreError::Parse(format!("invalid time {s:?}: expected HH:MM"));
    let (h, m) = s.trim().split_once(':').ok_or_else(bad)?;
    let h: u16 = h.trim().parse().map_err(|_| bad())?;
    let m: u16 = m.trim().parse().map_err(|_| bad())?;
    if m >= 60 || h > 24 || (h == 24 && m != 0) {
        return Err(bad());
    }
    Ok(h * 60 + m)
}

// ── Serde support ─────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawInterval {
    day:          DayOfWeek,
    start_minute: u16,
    end_minute:   u16,
}

#[cfg(feature = "serde")]
impl TryFrom<RawInterval> for TimeInterval {
    type Error = CoreError;

    fn try_from(raw: RawInterval) -> CoreResult<Self> {
        TimeInterval::new(raw.day, raw.start_minute, raw.end_minute)
    }
}

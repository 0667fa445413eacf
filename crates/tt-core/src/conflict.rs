//! Conflict detector.
//!
//! A combination fixes exactly one entry per course, so validity is an
//! O(n²) pairwise scan over n chosen entries (n = course count).  Each pair
//! test is O(|a.intervals| × |b.intervals|); both factors are tiny in
//! practice (a group meets a handful of times a week).

use crate::ScheduleEntry;

/// `true` iff some interval of `a` overlaps some interval of `b`.
///
/// Placeholders own no intervals and therefore never conflict.
pub fn conflicts(a: &ScheduleEntry, b: &ScheduleEntry) -> bool {
    a.intervals
        .iter()
        .any(|x| b.intervals.iter().any(|y| x.overlaps(y)))
}

/// `true` iff no unordered pair of distinct entries in `combination`
/// conflicts.  The verdict does not depend on entry order.
pub fn is_valid(combination: &[&ScheduleEntry]) -> bool {
    for (i, a) in combination.iter().enumerate() {
        for b in &combination[i + 1..] {
            if conflicts(a, b) {
                return false;
            }
        }
    }
    true
}

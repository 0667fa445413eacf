//! Base scoring pass: dead time, instructor quality, shift fit, and load.
//!
//! ```text
//! base = − gap_weight    × total_gap_hours
//!        + rating_weight × mean(rating)
//!        + shift_weight  × shift_hours
//!        + load_weight   × |R|
//! ```
//!
//! Only dead time *between* classes on the same day counts as a gap; time
//! before the first or after the last class of a day is free.

use tt_core::{DayOfWeek, ScheduleEntry, TimeInterval, MINUTES_PER_DAY};

use crate::{ScoringPass, ShiftPreference, WeightConfig};

/// Gap, rating, shift, and load terms.
#[derive(Clone, Copy, Debug, Default)]
pub struct BaseScore;

impl ScoringPass for BaseScore {
    fn evaluate(&self, real: &[&ScheduleEntry], weights: &WeightConfig) -> f64 {
        let mut score = 0.0;
        score -= weights.gap_weight * total_gap_hours(real);
        score += weights.rating_weight * mean_rating(real);
        score += weights.shift_weight * shift_hours(real, weights.shift_preference);
        score += weights.load_weight * real.len() as f64;
        score
    }
}

/// Sum over days of the idle time between consecutive classes, in hours.
pub fn total_gap_hours(real: &[&ScheduleEntry]) -> f64 {
    let mut by_day: [Vec<&TimeInterval>; DayOfWeek::COUNT] = Default::default();
    for iv in real.iter().flat_map(|e| e.intervals.iter()) {
        by_day[iv.day().index()].push(iv);
    }

    let mut gap_minutes: i64 = 0;
    for day in by_day.iter_mut() {
        day.sort_unstable_by_key(|iv| (iv.start_minute(), iv.end_minute()));
        for pair in day.windows(2) {
            gap_minutes += pair[1].start_minute() as i64 - pair[0].end_minute() as i64;
        }
    }
    gap_minutes as f64 / 60.0
}

/// Arithmetic mean of the ratings in `real`; `0.0` when empty.
pub fn mean_rating(real: &[&ScheduleEntry]) -> f64 {
    if real.is_empty() {
        return 0.0;
    }
    real.iter().map(|e| e.rating).sum::<f64>() / real.len() as f64
}

/// Hours credited by the shift preference.
///
/// `Morning` credits the hours left in the day after the latest class ends;
/// `Evening` credits the hours before the earliest class starts.  With no
/// intervals at all both come out as zero.
pub fn shift_hours(real: &[&ScheduleEntry], pref: ShiftPreference) -> f64 {
    let intervals = || real.iter().flat_map(|e| e.intervals.iter());
    match pref {
        ShiftPreference::Morning => {
            let latest_end = intervals()
                .map(|iv| iv.end_minute())
                .max()
                .unwrap_or(MINUTES_PER_DAY);
            (MINUTES_PER_DAY - latest_end) as f64 / 60.0
        }
        ShiftPreference::Evening => {
            let earliest_start = intervals().map(|iv| iv.start_minute()).min().unwrap_or(0);
            earliest_start as f64 / 60.0
        }
        ShiftPreference::Mixed => 0.0,
    }
}

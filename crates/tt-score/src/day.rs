//! Per-day preference layer.
//!
//! For each weekday the occupied half-hour blocks of R are counted (block `b`
//! covers minutes `[30b, 30b + 30)`; an interval occupies every block it
//! touches).  The day's [`DayPreference`] then contributes:
//!
//! | Condition                          | Term                                  |
//! |------------------------------------|---------------------------------------|
//! | `Avoid` and blocks > 0             | − `AVOID_PENALTY_PER_BLOCK` × blocks   |
//! | otherwise blocks > max             | − `EXCESS_PENALTY_PER_BLOCK` × excess  |
//! | `Prioritize`                       | + `PRIORITIZE_BONUS_PER_BLOCK` × blocks|
//! | `Early` / `Late`, blocks > 0       | ± `TIME_BIAS_BONUS` vs. midday         |
//! | `Free`, blocks > 0                 | − `FREE_DAY_PENALTY_PER_BLOCK` × blocks|
//!
//! The sum over days is scaled by `WeightConfig::day_weight`.

use tt_core::{DayOfWeek, ScheduleEntry};

use crate::{DayMode, DayPreference, ScoringPass, TimeBias, WeightConfig};

pub const AVOID_PENALTY_PER_BLOCK:    f64 = 10.0;
pub const EXCESS_PENALTY_PER_BLOCK:   f64 = 2.0;
pub const PRIORITIZE_BONUS_PER_BLOCK: f64 = 0.5;
pub const TIME_BIAS_BONUS:            f64 = 3.0;
pub const FREE_DAY_PENALTY_PER_BLOCK: f64 = 5.0;

/// Boundary between "early" and "late" mean start times (12:00).
pub const MIDDAY_MINUTE: f64 = 720.0;

/// Per-day avoid / prioritize / cap / time-bias adjustments.
#[derive(Clone, Copy, Debug, Default)]
pub struct DayPreferenceScore;

impl ScoringPass for DayPreferenceScore {
    fn evaluate(&self, real: &[&ScheduleEntry], weights: &WeightConfig) -> f64 {
        let occupancy = DayOccupancy::from_entries(real);
        let raw: f64 = weights
            .per_day
            .iter()
            .map(|(day, pref)| day_term(pref, occupancy.blocks(day), occupancy.mean_start(day)))
            .sum();
        weights.day_weight * raw
    }
}

/// Unscaled contribution of one day.
pub fn day_term(pref: &DayPreference, blocks: u32, mean_start: Option<f64>) -> f64 {
    let blocks_f = blocks as f64;
    let mut term = 0.0;

    if pref.mode == DayMode::Avoid && blocks > 0 {
        term -= AVOID_PENALTY_PER_BLOCK * blocks_f;
    } else if blocks > pref.max_half_hour_blocks as u32 {
        term -= EXCESS_PENALTY_PER_BLOCK * (blocks - pref.max_half_hour_blocks as u32) as f64;
    }

    if pref.mode == DayMode::Prioritize {
        term += PRIORITIZE_BONUS_PER_BLOCK * blocks_f;
    }

    if let Some(mean) = mean_start.filter(|_| blocks > 0) {
        match pref.time_bias {
            TimeBias::Early if mean < MIDDAY_MINUTE => term += TIME_BIAS_BONUS,
            TimeBias::Early => term -= TIME_BIAS_BONUS,
            TimeBias::Late if mean >= MIDDAY_MINUTE => term += TIME_BIAS_BONUS,
            TimeBias::Late => term -= TIME_BIAS_BONUS,
            TimeBias::Free => term -= FREE_DAY_PENALTY_PER_BLOCK * blocks_f,
            TimeBias::Mixed => {}
        }
    }

    term
}

// ── Occupancy ─────────────────────────────────────────────────────────────────

/// Half-hour block bitmask and start-time statistics per weekday.
///
/// 48 blocks fit in a `u64`, so the union over intervals is a bitwise OR.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DayOccupancy {
    masks:      [u64; DayOfWeek::COUNT],
    start_sum:  [u32; DayOfWeek::COUNT],
    starts:     [u32; DayOfWeek::COUNT],
}

impl DayOccupancy {
    pub fn from_entries(real: &[&ScheduleEntry]) -> Self {
        let mut occ = Self::default();
        for iv in real.iter().flat_map(|e| e.intervals.iter()) {
            let d = iv.day().index();
            let first = (iv.start_minute() / 30) as u32;
            let last = ((iv.end_minute() - 1) / 30) as u32;
            occ.masks[d] |= block_range_mask(first, last);
            occ.start_sum[d] += iv.start_minute() as u32;
            occ.starts[d] += 1;
        }
        occ
    }

    /// Occupied half-hour blocks on `day`.
    #[inline]
    pub fn blocks(&self, day: DayOfWeek) -> u32 {
        self.masks[day.index()].count_ones()
    }

    /// Mean start minute of the classes on `day`, or `None` if it is empty.
    pub fn mean_start(&self, day: DayOfWeek) -> Option<f64> {
        let n = self.starts[day.index()];
        (n > 0).then(|| self.start_sum[day.index()] as f64 / n as f64)
    }
}

/// Bits `first..=last` set.  `last < 48`.
#[inline]
fn block_range_mask(first: u32, last: u32) -> u64 {
    let upto_last = if last >= 63 { u64::MAX } else { (1u64 << (last + 1)) - 1 };
    let below_first = (1u64 << first) - 1;
    upto_last & !below_first
}

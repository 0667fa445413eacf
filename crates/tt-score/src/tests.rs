//! Unit tests for tt-score.

use tt_core::{CourseId, DayOfWeek, ScheduleEntry, TimeInterval};

use crate::{DayMode, DayPreference, ShiftPreference, TimeBias, WeightConfig};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn group(course: u32, rating: f64, meetings: &[(DayOfWeek, u16, u16)]) -> ScheduleEntry {
    let intervals = meetings
        .iter()
        .map(|&(d, s, e)| TimeInterval::new(d, s, e).unwrap())
        .collect();
    ScheduleEntry::new(CourseId(course), "1", "prof", rating, intervals).unwrap()
}

/// Mon 09:00–10:00, rating 8.
fn early_group() -> ScheduleEntry {
    group(1, 8.0, &[(DayOfWeek::Mon, 540, 600)])
}

/// Mon 11:00–12:00, rating 6.
fn late_group() -> ScheduleEntry {
    group(2, 6.0, &[(DayOfWeek::Mon, 660, 720)])
}

fn with_day(day: DayOfWeek, pref: DayPreference) -> WeightConfig {
    let mut w = WeightConfig::default();
    w.per_day.set(day, pref);
    w
}

// ── Base pass ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod base {
    use super::*;
    use crate::base::{mean_rating, shift_hours, total_gap_hours};
    use crate::{BaseScore, ScoringPass};

    #[test]
    fn default_weights_two_groups() {
        let (a, b) = (early_group(), late_group());
        let w = WeightConfig::default();
        // −50×1h gap + 70×7 mean + 30×12h after noon + 80×2 courses
        assert_eq!(BaseScore.evaluate(&[&a, &b], &w), -50.0 + 490.0 + 360.0 + 160.0);
    }

    #[test]
    fn gap_only_between_classes() {
        let a = early_group();
        assert_eq!(total_gap_hours(&[&a]), 0.0);

        let b = late_group();
        assert_eq!(total_gap_hours(&[&a, &b]), 1.0);
        assert_eq!(total_gap_hours(&[&b, &a]), 1.0);
    }

    #[test]
    fn gaps_sum_per_day_only() {
        // Mon 09–10 and Tue 11–12 are on different days: no gap.
        let a = early_group();
        let b = group(2, 6.0, &[(DayOfWeek::Tue, 660, 720)]);
        assert_eq!(total_gap_hours(&[&a, &b]), 0.0);

        // Three Mon classes: 09–10, 10:30–11, 12–13 → 0.5h + 1h.
        let c = group(3, 5.0, &[(DayOfWeek::Mon, 630, 660), (DayOfWeek::Wed, 600, 660)]);
        let d = group(4, 5.0, &[(DayOfWeek::Mon, 720, 780)]);
        assert_eq!(total_gap_hours(&[&a, &c, &d]), 1.5);
    }

    #[test]
    fn mean_rating_over_entries() {
        let (a, b) = (early_group(), late_group());
        assert_eq!(mean_rating(&[&a, &b]), 7.0);
        assert_eq!(mean_rating(&[]), 0.0);
    }

    #[test]
    fn shift_terms() {
        let (a, b) = (early_group(), late_group());
        assert_eq!(shift_hours(&[&a, &b], ShiftPreference::Morning), 12.0);
        assert_eq!(shift_hours(&[&a, &b], ShiftPreference::Evening), 9.0);
        assert_eq!(shift_hours(&[&a, &b], ShiftPreference::Mixed), 0.0);
    }

    #[test]
    fn shift_terms_without_intervals_are_zero() {
        let online = group(9, 7.0, &[]);
        assert_eq!(shift_hours(&[&online], ShiftPreference::Morning), 0.0);
        assert_eq!(shift_hours(&[&online], ShiftPreference::Evening), 0.0);
    }

    #[test]
    fn zero_weights_zero_score() {
        let a = early_group();
        let w = WeightConfig {
            gap_weight:    0.0,
            rating_weight: 0.0,
            shift_weight:  0.0,
            load_weight:   0.0,
            ..WeightConfig::default()
        };
        assert_eq!(BaseScore.evaluate(&[&a], &w), 0.0);
    }
}

// ── Day-preference pass ───────────────────────────────────────────────────────

#[cfg(test)]
mod day {
    use super::*;
    use crate::day::DayOccupancy;
    use crate::{DayPreferenceScore, ScoringPass};

    fn pref(mode: DayMode, time_bias: TimeBias, max: u8) -> DayPreference {
        DayPreference { mode, time_bias, max_half_hour_blocks: max }
    }

    #[test]
    fn block_counting() {
        // 07:00–08:30 → blocks 14, 15, 16
        let a = group(1, 5.0, &[(DayOfWeek::Mon, 420, 510)]);
        // 07:15–07:45 on Tuesday touches blocks 14 and 15
        let b = group(2, 5.0, &[(DayOfWeek::Tue, 435, 465)]);
        let occ = DayOccupancy::from_entries(&[&a, &b]);
        assert_eq!(occ.blocks(DayOfWeek::Mon), 3);
        assert_eq!(occ.blocks(DayOfWeek::Tue), 2);
        assert_eq!(occ.blocks(DayOfWeek::Wed), 0);
        assert_eq!(occ.mean_start(DayOfWeek::Wed), None);
    }

    #[test]
    fn last_block_of_day() {
        let a = group(1, 5.0, &[(DayOfWeek::Sat, 1410, 1440)]);
        let occ = DayOccupancy::from_entries(&[&a]);
        assert_eq!(occ.blocks(DayOfWeek::Sat), 1);
    }

    #[test]
    fn default_preferences_are_neutral() {
        let (a, b) = (early_group(), late_group());
        assert_eq!(DayPreferenceScore.evaluate(&[&a, &b], &WeightConfig::default()), 0.0);
    }

    #[test]
    fn avoided_day_penalised_per_block() {
        let a = early_group(); // 2 blocks on Mon
        let w = with_day(DayOfWeek::Mon, pref(DayMode::Avoid, TimeBias::Mixed, 48));
        assert_eq!(DayPreferenceScore.evaluate(&[&a], &w), -20.0);

        // Avoiding an unused day costs nothing.
        let w = with_day(DayOfWeek::Sat, pref(DayMode::Avoid, TimeBias::Mixed, 48));
        assert_eq!(DayPreferenceScore.evaluate(&[&a], &w), 0.0);
    }

    #[test]
    fn avoid_supersedes_block_cap() {
        let a = early_group();
        let w = with_day(DayOfWeek::Mon, pref(DayMode::Avoid, TimeBias::Mixed, 0));
        assert_eq!(DayPreferenceScore.evaluate(&[&a], &w), -20.0);
    }

    #[test]
    fn excess_blocks_penalised() {
        let a = early_group();
        let w = with_day(DayOfWeek::Mon, pref(DayMode::Normal, TimeBias::Mixed, 1));
        assert_eq!(DayPreferenceScore.evaluate(&[&a], &w), -2.0);
    }

    #[test]
    fn prioritized_day_rewarded() {
        let a = early_group();
        let w = with_day(DayOfWeek::Mon, pref(DayMode::Prioritize, TimeBias::Mixed, 48));
        assert_eq!(DayPreferenceScore.evaluate(&[&a], &w), 1.0);
    }

    #[test]
    fn time_bias_against_midday() {
        let a = early_group(); // mean start 09:00
        let early = with_day(DayOfWeek::Mon, pref(DayMode::Normal, TimeBias::Early, 48));
        let late = with_day(DayOfWeek::Mon, pref(DayMode::Normal, TimeBias::Late, 48));
        assert_eq!(DayPreferenceScore.evaluate(&[&a], &early), 3.0);
        assert_eq!(DayPreferenceScore.evaluate(&[&a], &late), -3.0);

        let pm = group(3, 5.0, &[(DayOfWeek::Mon, 720, 780)]); // exactly midday
        assert_eq!(DayPreferenceScore.evaluate(&[&pm], &late), 3.0);
    }

    #[test]
    fn free_day_penalises_any_class() {
        let a = early_group();
        let w = with_day(DayOfWeek::Mon, pref(DayMode::Normal, TimeBias::Free, 48));
        assert_eq!(DayPreferenceScore.evaluate(&[&a], &w), -10.0);
    }

    #[test]
    fn day_weight_scales_layer() {
        let a = early_group();
        let mut w = with_day(DayOfWeek::Mon, pref(DayMode::Avoid, TimeBias::Early, 48));
        assert_eq!(DayPreferenceScore.evaluate(&[&a], &w), -17.0);
        w.day_weight = 0.5;
        assert_eq!(DayPreferenceScore.evaluate(&[&a], &w), -8.5);
        w.day_weight = 0.0;
        assert_eq!(DayPreferenceScore.evaluate(&[&a], &w), 0.0);
    }
}

// ── Composition and entry points ──────────────────────────────────────────────

#[cfg(test)]
mod passes {
    use super::*;
    use crate::{
        score, score_with, BaseScore, DayPreferenceScore, ScoringPass, ScoringPassExt,
        EMPTY_SCHEDULE_SCORE,
    };

    #[test]
    fn standard_score_is_sum_of_passes() {
        let (a, b) = (early_group(), late_group());
        let w = with_day(
            DayOfWeek::Mon,
            DayPreference { mode: DayMode::Prioritize, ..DayPreference::default() },
        );
        let base = BaseScore.evaluate(&[&a, &b], &w);
        let day = DayPreferenceScore.evaluate(&[&a, &b], &w);
        assert_eq!(score(&[&a, &b], &w), base + day);
    }

    #[test]
    fn empty_selection_yields_sentinel() {
        let w = WeightConfig::default();
        assert_eq!(score(&[], &w), EMPTY_SCHEDULE_SCORE);

        let p1 = ScheduleEntry::placeholder(CourseId(1));
        let p2 = ScheduleEntry::placeholder(CourseId(2));
        assert_eq!(score(&[&p1, &p2], &w), EMPTY_SCHEDULE_SCORE);
    }

    #[test]
    fn placeholders_excluded_from_aggregates() {
        let a = early_group();
        let p = ScheduleEntry::placeholder(CourseId(2));
        let w = WeightConfig::default();
        assert_eq!(score(&[&a, &p], &w), score(&[&a], &w));
    }

    #[test]
    fn score_is_pure() {
        let (a, b) = (early_group(), late_group());
        let w = WeightConfig::default();
        let first = score(&[&a, &b], &w);
        for _ in 0..10 {
            assert_eq!(score(&[&a, &b], &w).to_bits(), first.to_bits());
        }
    }

    #[test]
    fn custom_chain() {
        struct Constant(f64);
        impl ScoringPass for Constant {
            fn evaluate(&self, _: &[&ScheduleEntry], _: &WeightConfig) -> f64 {
                self.0
            }
        }

        let a = early_group();
        let w = WeightConfig::default();
        let chain = Constant(1.5).then(Constant(2.0)).then(Constant(-0.5));
        assert_eq!(score_with(&chain, &[&a], &w), 3.0);
        // The sentinel short-circuits before any pass runs.
        assert_eq!(score_with(&chain, &[], &w), EMPTY_SCHEDULE_SCORE);
    }
}

// ── WeightConfig ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod weights {
    use super::*;
    use crate::ScoreError;

    #[test]
    fn defaults_are_valid() {
        assert!(WeightConfig::default().validate().is_ok());
    }

    #[test]
    fn negative_weight_rejected() {
        let w = WeightConfig { gap_weight: -1.0, ..WeightConfig::default() };
        assert!(matches!(w.validate(), Err(ScoreError::InvalidWeightConfig(m)) if m.contains("gap_weight")));
    }

    #[test]
    fn non_finite_weight_rejected() {
        let w = WeightConfig { day_weight: f64::INFINITY, ..WeightConfig::default() };
        assert!(w.validate().is_err());
        let w = WeightConfig { rating_weight: f64::NAN, ..WeightConfig::default() };
        assert!(w.validate().is_err());
    }

    #[test]
    fn block_cap_above_day_rejected() {
        let w = with_day(
            DayOfWeek::Fri,
            DayPreference { max_half_hour_blocks: 49, ..DayPreference::default() },
        );
        assert!(w.validate().is_err());
    }

    #[test]
    fn day_preferences_map_roundtrip() {
        use std::collections::BTreeMap;

        use crate::DayPreferences;

        let mut map = BTreeMap::new();
        map.insert(
            DayOfWeek::Sat,
            DayPreference { mode: DayMode::Avoid, ..DayPreference::default() },
        );
        let prefs = DayPreferences::from(map);
        assert_eq!(prefs.get(DayOfWeek::Sat).mode, DayMode::Avoid);
        assert_eq!(*prefs.get(DayOfWeek::Mon), DayPreference::default());

        let back: BTreeMap<DayOfWeek, DayPreference> = prefs.into();
        assert_eq!(back.len(), DayOfWeek::COUNT);
    }
}

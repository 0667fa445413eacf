//! Tests for the planner's config and embedded sample.

use std::io::Cursor;

use tt_catalog::load_catalog_reader;
use tt_core::DayOfWeek;
use tt_engine::{generate, ScheduleRequest};
use tt_score::{DayMode, ShiftPreference, TimeBias};

use crate::config::PlannerConfig;
use crate::{weekly_hours, SAMPLE_CATALOG};

const SAMPLE_CONFIG: &str = include_str!("../data/planner.json");

#[test]
fn sample_config_parses() {
    let config = PlannerConfig::from_json(SAMPLE_CONFIG).unwrap();
    assert_eq!(config.limits.top_k, 5);
    assert_eq!(config.weights.shift_preference, ShiftPreference::Morning);
    assert_eq!(config.weights.per_day.get(DayOfWeek::Sat).mode, DayMode::Avoid);
    let fri = config.weights.per_day.get(DayOfWeek::Fri);
    assert_eq!(fri.time_bias, TimeBias::Early);
    assert_eq!(fri.max_half_hour_blocks, 12);
    assert_eq!(config.weights.per_day.get(DayOfWeek::Mon).mode, DayMode::Normal);
}

#[test]
fn empty_config_is_default() {
    let config = PlannerConfig::from_json("{}").unwrap();
    assert_eq!(config.limits, tt_engine::SearchLimits::default());
    assert_eq!(config.weights, tt_score::WeightConfig::default());
}

#[test]
fn unknown_config_key_is_rejected() {
    assert!(PlannerConfig::from_json(r#"{ "weight": {} }"#).is_err());
}

#[test]
fn sample_catalog_produces_a_ranking() {
    let courses = load_catalog_reader(Cursor::new(SAMPLE_CATALOG)).unwrap();
    assert_eq!(courses.len(), 6);

    let config = PlannerConfig::from_json(SAMPLE_CONFIG).unwrap();
    let request = ScheduleRequest::new(courses, config.weights).with_limits(config.limits);
    let response = generate(request).unwrap();

    assert!(!response.truncated);
    assert_eq!(response.stats.total_combinations, 3 * 2 * 3 * 2 * 3 * 3);
    assert!(!response.results.is_empty());
    assert!(response.results.len() <= 5);
    for pair in response.results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn weekly_hours_skip_placeholders() {
    let courses = load_catalog_reader(Cursor::new(SAMPLE_CATALOG)).unwrap();
    let response = generate(ScheduleRequest::new(courses, Default::default())).unwrap();
    let best = &response.results[0];
    let expected: u32 = best
        .combination
        .iter()
        .filter(|e| !e.is_placeholder)
        .flat_map(|e| e.intervals.iter())
        .map(|iv| iv.duration_minutes() as u32)
        .sum();
    assert!(expected > 0);
    assert_eq!(weekly_hours(best), expected as f64 / 60.0);
}

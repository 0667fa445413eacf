//! Unit tests for tt-core primitives.

use crate::{CourseId, DayOfWeek, ScheduleEntry, TimeInterval};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn iv(day: DayOfWeek, start: u16, end: u16) -> TimeInterval {
    TimeInterval::new(day, start, end).unwrap()
}

fn entry(course: u32, label: &str, intervals: Vec<TimeInterval>) -> ScheduleEntry {
    ScheduleEntry::new(CourseId(course), label, "prof", 8.0, intervals).unwrap()
}

#[cfg(test)]
mod ids {
    use crate::CourseId;

    #[test]
    fn ordering() {
        assert!(CourseId(1601) < CourseId(1602));
    }

    #[test]
    fn display() {
        assert_eq!(CourseId(7).to_string(), "CourseId(7)");
    }
}

#[cfg(test)]
mod time {
    use super::*;
    use crate::{overlaps, parse_hhmm, CoreError};

    #[test]
    fn rejects_inverted_and_empty_spans() {
        assert!(matches!(
            TimeInterval::new(DayOfWeek::Mon, 600, 540),
            Err(CoreError::InvalidInterval { start: 600, end: 540, .. })
        ));
        assert!(TimeInterval::new(DayOfWeek::Mon, 600, 600).is_err());
    }

    #[test]
    fn rejects_past_midnight() {
        assert!(TimeInterval::new(DayOfWeek::Fri, 1380, 1441).is_err());
        assert!(TimeInterval::new(DayOfWeek::Fri, 1380, 1440).is_ok());
    }

    #[test]
    fn touching_endpoints_do_not_overlap() {
        let a = iv(DayOfWeek::Mon, 540, 600);
        let b = iv(DayOfWeek::Mon, 600, 660);
        assert!(!overlaps(&a, &b));
        assert!(!overlaps(&b, &a));
    }

    #[test]
    fn shared_minute_overlaps() {
        let a = iv(DayOfWeek::Mon, 540, 601);
        let b = iv(DayOfWeek::Mon, 600, 660);
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));
    }

    #[test]
    fn containment_overlaps() {
        let outer = iv(DayOfWeek::Wed, 420, 720);
        let inner = iv(DayOfWeek::Wed, 480, 510);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn different_days_never_overlap() {
        let a = iv(DayOfWeek::Mon, 540, 600);
        let b = iv(DayOfWeek::Tue, 540, 600);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn parse_hhmm_values() {
        assert_eq!(parse_hhmm("07:00").unwrap(), 420);
        assert_eq!(parse_hhmm(" 8:30 ").unwrap(), 510);
        assert_eq!(parse_hhmm("24:00").unwrap(), 1440);
        assert!(parse_hhmm("24:30").is_err());
        assert!(parse_hhmm("10:60").is_err());
        assert!(parse_hhmm("1030").is_err());
    }

    #[test]
    fn parse_interval_and_display() {
        let t = TimeInterval::parse(DayOfWeek::Thu, "07:00", "08:30").unwrap();
        assert_eq!(t.duration_minutes(), 90);
        assert_eq!(t.to_string(), "thu 07:00-08:30");
    }

    #[test]
    fn day_parsing_accepts_both_languages() {
        assert_eq!("Lun".parse::<DayOfWeek>().unwrap(), DayOfWeek::Mon);
        assert_eq!("MIÉ".parse::<DayOfWeek>().unwrap(), DayOfWeek::Wed);
        assert_eq!("thursday".parse::<DayOfWeek>().unwrap(), DayOfWeek::Thu);
        assert_eq!(" sab ".parse::<DayOfWeek>().unwrap(), DayOfWeek::Sat);
        assert!("dom".parse::<DayOfWeek>().is_err());
    }

    #[test]
    fn day_index_matches_week_order() {
        for (i, d) in DayOfWeek::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
        }
        assert_eq!(DayOfWeek::ALL.len(), DayOfWeek::COUNT);
    }
}

#[cfg(test)]
mod entries {
    use super::*;
    use crate::{CoreError, Course};

    #[test]
    fn rating_out_of_range_rejected() {
        let r = ScheduleEntry::new(CourseId(1), "1", "p", 10.5, vec![]);
        assert!(matches!(r, Err(CoreError::InvalidRating(_))));
        let r = ScheduleEntry::new(CourseId(1), "1", "p", f64::NAN, vec![]);
        assert!(r.is_err());
    }

    #[test]
    fn optional_course_appends_single_placeholder() {
        let c = Course::optional(
            CourseId(5),
            "Electives",
            vec![entry(5, "1", vec![iv(DayOfWeek::Mon, 420, 510)])],
        );
        assert_eq!(c.options.len(), 2);
        assert!(!c.options[0].is_placeholder);
        assert!(c.options[1].is_placeholder);
        assert!(c.options[1].intervals.is_empty());
        assert_eq!(c.real_options().count(), 1);
    }

    #[test]
    fn optional_course_does_not_duplicate_placeholder() {
        let c = Course::optional(
            CourseId(5),
            "Electives",
            vec![
                entry(5, "1", vec![iv(DayOfWeek::Mon, 420, 510)]),
                ScheduleEntry::placeholder(CourseId(5)),
            ],
        );
        assert_eq!(c.options.iter().filter(|e| e.is_placeholder).count(), 1);
        assert!(c.options.last().unwrap().is_placeholder);
    }

    #[test]
    fn optional_course_without_offerings_is_empty() {
        let c = Course::optional(CourseId(5), "Electives", vec![]);
        assert!(c.options.is_empty());
        assert!(!c.has_offerings());
    }

    #[test]
    fn mandatory_course_has_no_placeholder() {
        let c = Course::mandatory(CourseId(1), "Soils", vec![entry(1, "1", vec![])]);
        assert!(c.options.iter().all(|e| !e.is_placeholder));
    }

    #[test]
    fn mandatory_course_drops_supplied_placeholder() {
        let c = Course::mandatory(
            CourseId(1),
            "Soils",
            vec![
                entry(1, "1", vec![iv(DayOfWeek::Mon, 420, 510)]),
                ScheduleEntry::placeholder(CourseId(1)),
            ],
        );
        assert_eq!(c.options.len(), 1);
        assert!(c.has_offerings());

        let only = Course::mandatory(CourseId(2), "Ghost", vec![ScheduleEntry::placeholder(CourseId(2))]);
        assert!(only.options.is_empty());
        assert!(!only.has_offerings());
    }

    #[test]
    fn weekly_minutes_sums_meetings() {
        let e = entry(
            1,
            "1",
            vec![
                iv(DayOfWeek::Mon, 420, 510),
                iv(DayOfWeek::Wed, 420, 510),
                iv(DayOfWeek::Fri, 420, 510),
            ],
        );
        assert_eq!(e.weekly_minutes(), 270);
    }
}

#[cfg(test)]
mod conflict {
    use super::*;
    use crate::{conflicts, is_valid};

    #[test]
    fn placeholder_never_conflicts() {
        let p = ScheduleEntry::placeholder(CourseId(9));
        let e = entry(1, "1", vec![iv(DayOfWeek::Mon, 0, 1440)]);
        assert!(!conflicts(&p, &e));
        assert!(!conflicts(&e, &p));
    }

    #[test]
    fn any_shared_interval_conflicts() {
        let a = entry(1, "1", vec![iv(DayOfWeek::Mon, 420, 510), iv(DayOfWeek::Wed, 420, 510)]);
        let b = entry(2, "1", vec![iv(DayOfWeek::Tue, 420, 510), iv(DayOfWeek::Wed, 500, 560)]);
        assert!(conflicts(&a, &b));
        assert!(conflicts(&b, &a));
    }

    #[test]
    fn back_to_back_groups_are_compatible() {
        let a = entry(1, "1", vec![iv(DayOfWeek::Mon, 420, 510)]);
        let b = entry(2, "1", vec![iv(DayOfWeek::Mon, 510, 600)]);
        assert!(!conflicts(&a, &b));
    }

    #[test]
    fn is_valid_is_order_independent() {
        let a = entry(1, "1", vec![iv(DayOfWeek::Mon, 540, 600)]);
        let b = entry(2, "1", vec![iv(DayOfWeek::Mon, 600, 660)]);
        let c = entry(3, "1", vec![iv(DayOfWeek::Mon, 630, 700)]);

        let perms: [[&ScheduleEntry; 3]; 6] = [
            [&a, &b, &c],
            [&a, &c, &b],
            [&b, &a, &c],
            [&b, &c, &a],
            [&c, &a, &b],
            [&c, &b, &a],
        ];
        for p in &perms {
            assert!(!is_valid(p), "b and c overlap in every order");
        }
        assert!(is_valid(&[&a, &b]));
        assert!(is_valid(&[&b, &a]));
    }

    #[test]
    fn empty_and_singleton_combinations_are_valid() {
        let a = entry(1, "1", vec![iv(DayOfWeek::Mon, 540, 600)]);
        assert!(is_valid(&[]));
        assert!(is_valid(&[&a]));
    }
}

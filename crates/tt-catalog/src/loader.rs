//! CSV catalog loader.
//!
//! # CSV format
//!
//! One row per weekly meeting of a group.  Rows with the same `course_id`
//! form one course; rows with the same `(course_id, group)` form one
//! offering.  Courses and groups keep their first-appearance order.
//!
//! ```csv
//! course_id,course_name,mandatory,group,instructor,rating,day,start,end
//! 1601,SOIL BEHAVIOUR,true,1,M.I. EDUARDO ALVAREZ,10,"Lun, Mie, Vie",07:00,08:30
//! 1601,SOIL BEHAVIOUR,true,2,ING. ARACELI SANCHEZ,9,mon;wed;fri,08:30,10:00
//! 1725,HYDRAULICS,false,1,DR. PEREZ,7,tue,10:00,12:00
//! ```
//!
//! **`day`** lists one or more days separated by `,` or `;` (English or
//! Spanish abbreviations).  **`mandatory`** accepts `true`/`false`,
//! `yes`/`no`, `1`/`0`.  Optional courses get a placeholder appended.
//!
//! Every row of a course must agree on `mandatory`, and every row of a group
//! on `instructor` and `rating`.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tt_core::{Course, CourseId, DayOfWeek, ScheduleEntry, TimeInterval};

use crate::{CatalogError, CatalogResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CatalogRecord {
    course_id:   u32,
    course_name: String,
    mandatory:   String,
    group:       String,
    instructor:  String,
    rating:      f64,
    day:         String,
    start:       String,
    end:         String,
}

/// Accumulates rows of one course before `Course` construction.
struct CourseDraft {
    id:        CourseId,
    name:      String,
    mandatory: bool,
    groups:    Vec<ScheduleEntry>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a course catalog from a CSV file.
pub fn load_catalog_csv(path: &Path) -> CatalogResult<Vec<Course>> {
    let file = std::fs::File::open(path)?;
    load_catalog_reader(file)
}

/// Like [`load_catalog_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for catalogs embedded in
/// the binary.
pub fn load_catalog_reader<R: Read>(reader: R) -> CatalogResult<Vec<Course>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut drafts: Vec<CourseDraft> = Vec::new();
    let mut course_pos: HashMap<u32, usize> = HashMap::new();
    let mut group_pos: HashMap<(u32, String), usize> = HashMap::new();

    for (i, result) in csv_reader.deserialize::<CatalogRecord>().enumerate() {
        let record = i as u64 + 1;
        let row = result.map_err(|e| CatalogError::Parse { record, message: e.to_string() })?;
        let mandatory = parse_flag(&row.mandatory).ok_or_else(|| CatalogError::Parse {
            record,
            message: format!("invalid mandatory flag {:?}", row.mandatory),
        })?;

        // ── Course ────────────────────────────────────────────────────────
        let ci = *course_pos.entry(row.course_id).or_insert_with(|| {
            drafts.push(CourseDraft {
                id:        CourseId(row.course_id),
                name:      row.course_name.clone(),
                mandatory,
                groups:    Vec::new(),
            });
            drafts.len() - 1
        });
        let draft = &mut drafts[ci];
        if draft.mandatory != mandatory {
            return Err(CatalogError::Parse {
                record,
                message: format!("course {} mixes mandatory and optional rows", row.course_id),
            });
        }

        // ── Meetings ──────────────────────────────────────────────────────
        let meetings = parse_meetings(&row.day, &row.start, &row.end)
            .map_err(|source| CatalogError::Invalid { record, source })?;

        // ── Group ─────────────────────────────────────────────────────────
        match group_pos.get(&(row.course_id, row.group.clone())) {
            Some(&gi) => {
                let entry = &mut draft.groups[gi];
                if entry.instructor != row.instructor || entry.rating != row.rating {
                    return Err(CatalogError::Parse {
                        record,
                        message: format!(
                            "group {} of course {} has inconsistent instructor or rating",
                            row.group, row.course_id
                        ),
                    });
                }
                entry.intervals.extend(meetings);
            }
            None => {
                let entry = ScheduleEntry::new(
                    draft.id,
                    row.group.clone(),
                    row.instructor,
                    row.rating,
                    meetings,
                )
                .map_err(|source| CatalogError::Invalid { record, source })?;
                group_pos.insert((row.course_id, row.group), draft.groups.len());
                draft.groups.push(entry);
            }
        }
    }

    log::info!("loaded {} courses from catalog", drafts.len());

    Ok(drafts
        .into_iter()
        .map(|d| {
            if d.mandatory {
                Course::mandatory(d.id, d.name, d.groups)
            } else {
                Course::optional(d.id, d.name, d.groups)
            }
        })
        .collect())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

/// Expand a day list like `"Lun, Mie, Vie"` into one interval per day.
fn parse_meetings(days: &str, start: &str, end: &str) -> tt_core::CoreResult<Vec<TimeInterval>> {
    days.split([',', ';'])
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| TimeInterval::parse(d.parse::<DayOfWeek>()?, start, end))
        .collect()
}

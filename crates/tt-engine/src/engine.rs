//! The `Engine` struct and its enumeration loop.

use std::ops::Range;

use tt_core::{is_valid, Course, CourseId, ScheduleEntry};
use tt_score::{score_with, ScoringPass, StandardScorer, WeightConfig};

use crate::{
    total_combinations, CancelToken, CombinationCursor, EngineBuilder, EngineResult,
    EnumerationObserver, NoopObserver, RankedResult, ScheduleRequest, ScheduleResponse,
    SearchLimits, SearchStats, TopK,
};

/// The cancel token is polled once per this many combinations.
pub const CANCEL_CHECK_INTERVAL: u64 = 5_000;

/// Run a request with the standard scorer and no observer.
pub fn generate(request: ScheduleRequest) -> EngineResult<ScheduleResponse> {
    Ok(EngineBuilder::new(request).build()?.run(&mut NoopObserver))
}

// ── Shard outcome ─────────────────────────────────────────────────────────────

/// What one scan over a contiguous index range produced.
struct Shard {
    top:        TopK,
    enumerated: u64,
    valid:      u64,
    cancelled:  bool,
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// A validated, ready-to-run generation request.
///
/// The engine holds no global state; `run` borrows it immutably and may be
/// called any number of times, always producing the same ranking.
///
/// Create via [`EngineBuilder`].
pub struct Engine<S: ScoringPass = StandardScorer> {
    pub(crate) courses: Vec<Course>,
    pub(crate) weights: WeightConfig,
    pub(crate) limits:  SearchLimits,
    pub(crate) cancel:  Option<CancelToken>,
    pub(crate) scorer:  S,
    pub(crate) dropped: Vec<CourseId>,
}

impl<S: ScoringPass> Engine<S> {
    // ── Accessors ─────────────────────────────────────────────────────────

    /// Courses after validation (empty optional courses removed).
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn weights(&self) -> &WeightConfig {
        &self.weights
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Size of the full cartesian product of the validated courses.
    pub fn total_combinations(&self) -> u64 {
        total_combinations(&self.radices())
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Enumerate, gate, score, and rank.
    ///
    /// Never fails: hitting `max_combinations` or the cancel token yields a
    /// partial ranking with `truncated = true`.
    pub fn run<O: EnumerationObserver>(&self, observer: &mut O) -> ScheduleResponse {
        let total = self.total_combinations();
        let large_search_space_warning = total > self.limits.warning_threshold;
        let limit = total.min(self.limits.max_combinations);

        if large_search_space_warning {
            log::warn!(
                "search space has {total} combinations (threshold {}); enumeration is capped at {}",
                self.limits.warning_threshold,
                self.limits.max_combinations
            );
        }
        log::info!(
            "enumerating {limit} of {total} combinations over {} courses (top_k = {})",
            self.courses.len(),
            self.limits.top_k
        );
        observer.on_start(total, large_search_space_warning);

        let shard = self.enumerate(0..limit, total, observer);

        let stats = SearchStats {
            total_combinations: total,
            enumerated:         shard.enumerated,
            valid:              shard.valid,
            cancelled:          shard.cancelled,
        };
        let truncated = shard.cancelled || total > self.limits.max_combinations;
        if truncated {
            log::warn!(
                "search truncated after {} of {total} combinations{}",
                stats.enumerated,
                if stats.cancelled { " (cancelled)" } else { "" }
            );
        }
        log::info!(
            "{} valid combinations, {} retained",
            stats.valid,
            shard.top.len()
        );
        observer.on_finish(&stats);

        ScheduleResponse {
            results: self.materialize(shard.top),
            truncated,
            large_search_space_warning,
            stats,
            dropped_courses: self.dropped.clone(),
        }
    }

    // ── Enumeration ───────────────────────────────────────────────────────

    /// Sequential scan of `range`, reporting progress to `observer`.
    #[cfg(not(feature = "parallel"))]
    fn enumerate<O: EnumerationObserver>(
        &self,
        range:    Range<u64>,
        total:    u64,
        observer: &mut O,
    ) -> Shard {
        self.scan(range, |done| observer.on_progress(done, total))
    }

    /// Parallel scan: `range` is split into contiguous shards, each scanned
    /// on Rayon's pool with its own `TopK`, then merged in shard order.
    ///
    /// The merge is order-insensitive (see `top_k`), so the ranking matches
    /// the sequential path exactly.
    #[cfg(feature = "parallel")]
    fn enumerate<O: EnumerationObserver>(
        &self,
        range:    Range<u64>,
        total:    u64,
        observer: &mut O,
    ) -> Shard {
        use rayon::prelude::*;

        const SHARDS_PER_THREAD: u64 = 4;

        let len = range.end - range.start;
        let shard_count = (rayon::current_num_threads() as u64 * SHARDS_PER_THREAD).clamp(1, len.max(1));
        let shard_len = len.div_ceil(shard_count).max(1);

        let ranges: Vec<Range<u64>> = (0..shard_count)
            .map(|i| {
                let start = range.start + i * shard_len;
                start.min(range.end)..(start + shard_len).min(range.end)
            })
            .filter(|r| !r.is_empty())
            .collect();

        let shards: Vec<Shard> = ranges
            .into_par_iter()
            .map(|r| self.scan(r, |_| {}))
            .collect();

        let mut merged = Shard {
            top:        TopK::new(self.limits.top_k),
            enumerated: 0,
            valid:      0,
            cancelled:  false,
        };
        for shard in shards {
            merged.enumerated += shard.enumerated;
            merged.valid += shard.valid;
            merged.cancelled |= shard.cancelled;
            merged.top.merge(shard.top);
            if self.limits.progress_interval > 0 {
                observer.on_progress(merged.enumerated, total);
            }
        }
        merged
    }

    /// Scan one contiguous index range with a private `TopK`.
    ///
    /// `on_progress` receives the running count every `progress_interval`
    /// combinations.
    fn scan(&self, range: Range<u64>, mut on_progress: impl FnMut(u64)) -> Shard {
        let mut shard = Shard {
            top:        TopK::new(self.limits.top_k),
            enumerated: 0,
            valid:      0,
            cancelled:  false,
        };
        let mut cursor = CombinationCursor::starting_at(self.radices(), range.start);
        let mut selection: Vec<&ScheduleEntry> = Vec::with_capacity(self.courses.len());
        let progress_interval = self.limits.progress_interval;

        while let Some((index, choice)) = cursor.current() {
            if index >= range.end {
                break;
            }
            if shard.enumerated % CANCEL_CHECK_INTERVAL == 0 && self.is_cancelled() {
                shard.cancelled = true;
                break;
            }

            selection.clear();
            selection.extend(
                choice
                    .iter()
                    .zip(&self.courses)
                    .map(|(&option, course)| &course.options[option]),
            );
            shard.enumerated += 1;

            if is_valid(&selection) {
                shard.valid += 1;
                let score = score_with(&self.scorer, &selection, &self.weights);
                shard.top.offer(score, index, choice);
            }

            if progress_interval > 0 && shard.enumerated % progress_interval == 0 {
                log::debug!(
                    "scanned {} combinations from index {} ({} valid)",
                    shard.enumerated,
                    range.start,
                    shard.valid
                );
                on_progress(shard.enumerated);
            }
            cursor.advance();
        }

        shard
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn radices(&self) -> Vec<usize> {
        self.courses.iter().map(|c| c.options.len()).collect()
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }

    /// Turn retained candidates into owned, best-first results.
    fn materialize(&self, top: TopK) -> Vec<RankedResult> {
        top.into_sorted_vec()
            .into_iter()
            .map(|c| RankedResult {
                combination: c
                    .choice
                    .iter()
                    .zip(&self.courses)
                    .map(|(&option, course)| course.options[option].clone())
                    .collect(),
                score:           c.score,
                discovery_index: c.discovery_index,
                choice:          c.choice,
            })
            .collect()
    }
}

//! Enumeration observer trait for progress reporting.

use crate::SearchStats;

/// Callbacks invoked by [`Engine::run`][crate::Engine::run] at key points of
/// the enumeration.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl EnumerationObserver for ProgressPrinter {
///     fn on_progress(&mut self, enumerated: u64, total: u64) {
///         println!("{enumerated}/{total} combinations checked");
///     }
/// }
/// ```
pub trait EnumerationObserver {
    /// Called once before the first combination is generated.
    ///
    /// `large_search_space` mirrors `ScheduleResponse::large_search_space_warning`.
    fn on_start(&mut self, _total: u64, _large_search_space: bool) {}

    /// Called every `SearchLimits::progress_interval` combinations.
    ///
    /// With the `parallel` feature it is called once per merged shard instead.
    fn on_progress(&mut self, _enumerated: u64, _total: u64) {}

    /// Called once after enumeration stops, whether complete or truncated.
    fn on_finish(&mut self, _stats: &SearchStats) {}
}

/// An [`EnumerationObserver`] that does nothing.
pub struct NoopObserver;

impl EnumerationObserver for NoopObserver {}

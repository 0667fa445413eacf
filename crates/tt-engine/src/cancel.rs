//! Cooperative cancellation handle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared stop flag checked by the enumeration loop every
/// [`CANCEL_CHECK_INTERVAL`][crate::CANCEL_CHECK_INTERVAL] combinations.
///
/// Clones share the same flag, so one clone can be handed to a signal
/// handler or UI thread while the engine holds another.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that the running enumeration stop at its next checkpoint.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

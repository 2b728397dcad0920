//! Cooperative cancellation for optimization passes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Lets a host stop a running pass.
///
/// The optimizer polls [`is_canceled`](Self::is_canceled) once per incoming
/// range and aborts with [`OptimizeError::Cancelled`](crate::OptimizeError::Cancelled)
/// as soon as it returns true.
pub trait ProgressIndicator: Sync {
    fn is_canceled(&self) -> bool;
}

/// Indicator that never cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl ProgressIndicator for NeverCancel {
    fn is_canceled(&self) -> bool {
        false
    }
}

/// Shared flag another thread can raise to cancel a pass.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag {
    canceled: Arc<AtomicBool>,
}

impl CancellationFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation of every pass observing this flag.
    pub fn cancel(&self) {
        self.canceled.store(true, Ordering::Relaxed);
    }
}

impl ProgressIndicator for CancellationFlag {
    fn is_canceled(&self) -> bool {
        self.canceled.load(Ordering::Relaxed)
    }
}

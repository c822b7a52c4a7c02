// ============================================================================
// Slot Interface
// Receivers connected to a signal
// ============================================================================

use std::fmt;

/// Receiver of values emitted by a [`Signal`](crate::signals::Signal).
///
/// Implementations can record, log, forward, etc. Any `Fn(&T)` closure that
/// is `Send + Sync` is a slot.
pub trait Slot<T>: Send + Sync {
    /// Handle one emitted value
    fn on_signal(&self, value: &T);
}

impl<T, F> Slot<T> for F
where
    F: Fn(&T) + Send + Sync,
{
    #[inline]
    fn on_signal(&self, value: &T) {
        self(value)
    }
}

/// No-op slot for testing
pub struct NoOpSlot;

impl<T> Slot<T> for NoOpSlot {
    fn on_signal(&self, _value: &T) {
        // Do nothing
    }
}

/// Logging slot
pub struct LoggingSlot;

impl<T: fmt::Debug> Slot<T> for LoggingSlot {
    fn on_signal(&self, value: &T) {
        tracing::debug!("Signal delivered: {:?}", value);
    }
}

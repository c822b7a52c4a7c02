// ============================================================================
// Signal Spy
// Slot that records every value it receives
// ============================================================================

use crate::interfaces::Slot;
use parking_lot::Mutex;

/// Recording slot, mainly for tests and diagnostics.
///
/// Connect an `Arc<SignalSpy<T>>` to a signal and inspect what was emitted.
#[derive(Debug, Default)]
pub struct SignalSpy<T> {
    received: Mutex<Vec<T>>,
}

impl<T: Clone> SignalSpy<T> {
    pub fn new() -> Self {
        Self {
            received: Mutex::new(Vec::new()),
        }
    }

    /// Number of values received so far.
    pub fn count(&self) -> usize {
        self.received.lock().len()
    }

    /// Most recently received value.
    pub fn last(&self) -> Option<T> {
        self.received.lock().last().cloned()
    }

    /// All received values in arrival order.
    pub fn values(&self) -> Vec<T> {
        self.received.lock().clone()
    }

    pub fn clear(&self) {
        self.received.lock().clear();
    }
}

impl<T: Clone + Send> Slot<T> for SignalSpy<T> {
    fn on_signal(&self, value: &T) {
        self.received.lock().push(value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let spy = SignalSpy::new();
        spy.on_signal(&"a");
        spy.on_signal(&"b");

        assert_eq!(spy.count(), 2);
        assert_eq!(spy.last(), Some("b"));
        assert_eq!(spy.values(), vec!["a", "b"]);

        spy.clear();
        assert_eq!(spy.count(), 0);
        assert_eq!(spy.last(), None);
    }
}

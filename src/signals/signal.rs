// ============================================================================
// Signal
// Blockable one-to-many notification channel
// ============================================================================

use crate::interfaces::{Observable, Slot};
use parking_lot::RwLock;
use smallvec::SmallVec;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Handle returned by [`Signal::connect`], used to disconnect a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(u64);

/// A list of connected slots plus a blocked flag.
///
/// While blocked, [`emit`](Signal::emit) delivers nothing. Slots are called
/// outside the internal lock, so a slot may connect or disconnect slots on
/// the same signal.
pub struct Signal<T> {
    /// Name used in log output
    name: &'static str,

    /// Connected slots in connection order
    slots: RwLock<Vec<(SlotId, Arc<dyn Slot<T>>)>>,

    /// Blocked flag toggled through [`Observable`]
    blocked: AtomicBool,

    /// Source of slot ids
    next_id: AtomicU64,
}

impl<T> Signal<T> {
    /// Create an unblocked signal with no slots.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            slots: RwLock::new(Vec::new()),
            blocked: AtomicBool::new(false),
            next_id: AtomicU64::new(0),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Connect a slot; it receives every later unblocked emission.
    pub fn connect(&self, slot: Arc<dyn Slot<T>>) -> SlotId {
        let id = SlotId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.slots.write().push((id, slot));
        tracing::trace!("Connected slot {:?} to signal '{}'", id, self.name);
        id
    }

    /// Disconnect a slot. Returns false if the id was not connected.
    pub fn disconnect(&self, id: SlotId) -> bool {
        let mut slots = self.slots.write();
        let before = slots.len();
        slots.retain(|(slot_id, _)| *slot_id != id);
        before != slots.len()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.read().len()
    }

    /// Deliver `value` to every connected slot unless the signal is blocked.
    ///
    /// Returns whether the value was delivered.
    pub fn emit(&self, value: &T) -> bool {
        if self.blocked.load(Ordering::Acquire) {
            tracing::trace!("Signal '{}' blocked, emission dropped", self.name);
            return false;
        }

        let slots: SmallVec<[Arc<dyn Slot<T>>; 4]> = self
            .slots
            .read()
            .iter()
            .map(|(_, slot)| Arc::clone(slot))
            .collect();

        for slot in &slots {
            slot.on_signal(value);
        }
        true
    }
}

impl<T> Observable for Signal<T> {
    #[inline]
    fn signals_blocked(&self) -> bool {
        self.blocked.load(Ordering::Acquire)
    }

    #[inline]
    fn block_signals(&self, blocked: bool) -> bool {
        self.blocked.swap(blocked, Ordering::AcqRel)
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("name", &self.name)
            .field("slots", &self.slot_count())
            .field("blocked", &self.signals_blocked())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::SignalSpy;

    #[test]
    fn test_emit_reaches_all_slots() {
        let signal = Signal::<i32>::new("value_changed");
        let first = Arc::new(SignalSpy::<i32>::new());
        let second = Arc::new(SignalSpy::<i32>::new());
        signal.connect(first.clone());
        signal.connect(second.clone());

        assert!(signal.emit(&7));
        assert_eq!(first.values(), vec![7]);
        assert_eq!(second.values(), vec![7]);
    }

    #[test]
    fn test_blocked_signal_drops_emissions() {
        let signal = Signal::<i32>::new("value_changed");
        let spy = Arc::new(SignalSpy::<i32>::new());
        signal.connect(spy.clone());

        assert!(!signal.block_signals(true));
        assert!(signal.signals_blocked());
        assert!(!signal.emit(&1));
        assert_eq!(spy.count(), 0);

        assert!(signal.block_signals(false));
        assert!(signal.emit(&2));
        assert_eq!(spy.values(), vec![2]);
    }

    #[test]
    fn test_disconnect() {
        let signal = Signal::<i32>::new("value_changed");
        let spy = Arc::new(SignalSpy::<i32>::new());
        let id = signal.connect(spy.clone());
        assert_eq!(signal.slot_count(), 1);

        assert!(signal.disconnect(id));
        assert!(!signal.disconnect(id));
        signal.emit(&3);
        assert_eq!(spy.count(), 0);
    }

    #[test]
    fn test_slot_may_reconnect_during_emit() {
        let signal = Arc::new(Signal::<i32>::new("value_changed"));
        let weak = Arc::downgrade(&signal);
        signal.connect(Arc::new(move |_: &i32| {
            if let Some(signal) = weak.upgrade() {
                signal.connect(Arc::new(crate::interfaces::NoOpSlot));
            }
        }));

        signal.emit(&1);
        assert_eq!(signal.slot_count(), 2);
    }
}

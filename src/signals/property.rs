// ============================================================================
// Property
// Observable value cell that notifies on change
// ============================================================================

use super::signal::Signal;
use crate::interfaces::Observable;
use parking_lot::RwLock;
use std::fmt;

/// A value with a `changed` signal.
///
/// [`set`](Property::set) always stores the new value; the signal fires only
/// when the value actually changed and the property is not blocked.
pub struct Property<T> {
    value: RwLock<T>,
    changed: Signal<T>,
}

impl<T: Clone + PartialEq> Property<T> {
    pub fn new(name: &'static str, initial: T) -> Self {
        Self {
            value: RwLock::new(initial),
            changed: Signal::new(name),
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.value.read().clone()
    }

    /// Store `value`, notifying slots if it differs from the current one.
    ///
    /// Returns whether the value changed (regardless of blocking).
    pub fn set(&self, value: T) -> bool {
        {
            let mut current = self.value.write();
            if *current == value {
                return false;
            }
            *current = value.clone();
        }

        self.changed.emit(&value);
        true
    }

    /// The signal fired on every unblocked change.
    pub fn changed(&self) -> &Signal<T> {
        &self.changed
    }
}

impl Property<bool> {
    /// Flip a boolean property.
    pub fn toggle(&self) {
        let next = !self.get();
        self.set(next);
    }
}

impl<T> Observable for Property<T> {
    #[inline]
    fn signals_blocked(&self) -> bool {
        self.changed.signals_blocked()
    }

    #[inline]
    fn block_signals(&self, blocked: bool) -> bool {
        self.changed.block_signals(blocked)
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &*self.value.read())
            .field("changed", &self.changed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::SignalSpy;
    use std::sync::Arc;

    #[test]
    fn test_set_emits_only_on_change() {
        let checked = Property::new("toggled", false);
        let spy = Arc::new(SignalSpy::<bool>::new());
        checked.changed().connect(spy.clone());

        assert!(checked.set(true));
        assert!(!checked.set(true));
        assert_eq!(spy.values(), vec![true]);
    }

    #[test]
    fn test_blocked_set_stores_silently() {
        let checked = Property::new("toggled", false);
        let spy = Arc::new(SignalSpy::<bool>::new());
        checked.changed().connect(spy.clone());

        checked.block_signals(true);
        assert!(checked.set(true));
        assert!(checked.get());
        assert_eq!(spy.count(), 0);
    }

    #[test]
    fn test_toggle() {
        let checked = Property::new("toggled", false);
        checked.toggle();
        assert!(checked.get());
        checked.toggle();
        assert!(!checked.get());
    }
}

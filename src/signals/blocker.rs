// ============================================================================
// Signal Blocker
// Scoped guard that blocks notifications and restores the previous state
// ============================================================================

use crate::interfaces::Observable;
use std::ops::Deref;

/// Blocks an object's signals for as long as the guard lives.
///
/// Construction blocks the object unconditionally and remembers whether it
/// was already blocked; dropping the guard restores exactly that state. An
/// outer guard created while the object was unblocked is therefore the only
/// one whose drop unblocks it, which makes nesting safe as long as guards are
/// dropped in reverse order of creation.
///
/// The guard dereferences to the object, so it doubles as a proxy for calls
/// that must not notify.
///
/// # Example
/// ```
/// use core_primitives::interfaces::Observable;
/// use core_primitives::signals::{Property, SignalBlocker};
///
/// let checked = Property::new("toggled", false);
/// {
///     let blocker = SignalBlocker::new(&checked);
///     blocker.set(true); // no notification
///     assert!(checked.signals_blocked());
/// }
/// assert!(!checked.signals_blocked());
/// ```
#[must_use = "signals are restored as soon as the blocker is dropped"]
pub struct SignalBlocker<'a, T: Observable + ?Sized> {
    object: &'a T,
    was_blocked: bool,
}

impl<'a, T: Observable + ?Sized> SignalBlocker<'a, T> {
    /// Block `object`'s signals until the returned guard is dropped.
    pub fn new(object: &'a T) -> Self {
        let was_blocked = object.block_signals(true);
        tracing::trace!("Signals blocked (previously blocked: {})", was_blocked);
        Self {
            object,
            was_blocked,
        }
    }

    /// Whether the object was already blocked when this guard was created.
    pub fn was_blocked(&self) -> bool {
        self.was_blocked
    }

    /// The guarded object.
    pub fn object(&self) -> &'a T {
        self.object
    }
}

impl<T: Observable + ?Sized> Deref for SignalBlocker<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.object
    }
}

impl<T: Observable + ?Sized> Drop for SignalBlocker<'_, T> {
    fn drop(&mut self) {
        self.object.block_signals(self.was_blocked);
        tracing::trace!("Signals restored (blocked: {})", self.was_blocked);
    }
}

/// Block `object` for the duration of a single expression.
///
/// The returned guard is a temporary, so in `while_blocking(&p).set(x)` the
/// previous state is restored at the end of the statement, right after the
/// one call.
#[inline]
pub fn while_blocking<T: Observable + ?Sized>(object: &T) -> SignalBlocker<'_, T> {
    SignalBlocker::new(object)
}

/// Run `operation` with `object` blocked, then restore its previous state.
pub fn with_signals_blocked<T, R>(object: &T, operation: impl FnOnce(&T) -> R) -> R
where
    T: Observable + ?Sized,
{
    let blocker = SignalBlocker::new(object);
    operation(&blocker)
}

// ============================================================================
// Observable Interface
// Objects whose change notifications can be switched off and on
// ============================================================================

/// An object that emits change notifications which can be blocked.
///
/// Both methods take `&self`: implementations keep the flag in interior
/// mutable state so that several guards can hold shared borrows of the same
/// object at once.
pub trait Observable {
    /// Whether notifications are currently blocked.
    fn signals_blocked(&self) -> bool;

    /// Set the blocked flag and return its previous value.
    fn block_signals(&self, blocked: bool) -> bool;
}

/// Shared objects can be blocked through their handle.
impl<T: Observable + ?Sized> Observable for std::sync::Arc<T> {
    #[inline]
    fn signals_blocked(&self) -> bool {
        (**self).signals_blocked()
    }

    #[inline]
    fn block_signals(&self, blocked: bool) -> bool {
        (**self).block_signals(blocked)
    }
}

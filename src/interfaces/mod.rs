// ============================================================================
// Interfaces Module
// Traits at the seams between signal sources and their receivers
// ============================================================================

pub mod observable;
pub mod slot;

pub use observable::Observable;
pub use slot::{LoggingSlot, NoOpSlot, Slot};

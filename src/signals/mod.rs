// ============================================================================
// Signals Module
// Blockable notifications and the scoped guard that blocks them
// ============================================================================

mod blocker;
mod property;
mod signal;
mod spy;

pub use blocker::{while_blocking, with_signals_blocked, SignalBlocker};
pub use property::Property;
pub use signal::{Signal, SlotId};
pub use spy::SignalSpy;

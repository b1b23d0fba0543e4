//! Periodic tick source
//!
//! The time base of the whole firmware is a single periodic interrupt.
//! Implementations program a hardware timer and arrange for the interrupt
//! handler to call back into the tick service once per period.

/// Hardware timer able to raise a periodic interrupt
pub trait TickTimer {
    /// Program the timer to fire `ticks_per_second` times per second
    /// and enable its interrupt.
    fn start(&mut self, ticks_per_second: u32);
}

//! Time keeping
//!
//! The firmware has a single time base: a periodic tick interrupt that
//! advances a hundredths-of-a-second [`Clock`]. Every timeout in the system
//! is a [`Clock`] deadline obtained from [`TickService::future`] and checked
//! with [`TickService::has_arrived`].

pub mod clock;
pub mod tick;

pub use clock::{Clock, TimeOfDay};
pub use tick::{
    RebootCause, TaskTickRange, TickHandler, TickService, TimeError, MAX_TICK_HANDLERS,
    TICKS_PER_SECOND,
};

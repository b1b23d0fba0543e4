//! Tick/timer service
//!
//! A hardware timer interrupt calls [`TickService::on_tick`] at a fixed
//! rate. Every `ticks_per_second / 100` ticks the clock advances by one
//! hundredth. Registered [`TickHandler`]s run on every tick, inside the
//! interrupt, in registration order.
//!
//! The clock is the one value shared between the interrupt and the main
//! loop, so every read and write goes through a critical-section mutex.

use core::cell::{Cell, RefCell};

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use heapless::Vec;
use tankwatch_hal::TickTimer;

use super::clock::Clock;

/// Tick interrupt rate. 4800 Hz gives a 480 Hz backlight PWM cycle at
/// 10 sub-ticks per cycle.
pub const TICKS_PER_SECOND: u32 = 4800;

/// Maximum number of tick handlers
pub const MAX_TICK_HANDLERS: usize = 2;

/// Seconds added to the shutdown timestamp to cover the watchdog reset
const SHUTDOWN_ALLOWANCE_SECONDS: u32 = 8;

/// Callback run from the tick interrupt
///
/// Implementations must be short and must not block: every cycle they
/// spend is stolen from the main loop.
pub trait TickHandler: Sync {
    fn on_tick(&self);
}

/// Errors from the tick service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeError {
    /// All handler slots are taken
    HandlerCapacityExceeded,
}

/// What caused the most recent start-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RebootCause {
    /// Power-on or reset pin; no shutdown time was persisted
    Hardware,
    /// Orderly restart that persisted its shutdown time
    Software,
}

/// Smallest and largest number of ticks seen between two calls to
/// [`TickService::task`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TaskTickRange {
    pub min: u8,
    pub max: u8,
}

impl TaskTickRange {
    const EMPTY: TaskTickRange = TaskTickRange { min: u8::MAX, max: 0 };
}

#[derive(Clone, Copy)]
struct ClockState {
    now: Clock,
    sub_ticks: u32,
    uptime_seconds: u32,
    task_ticks: u8,
    adjustment: i32,
    task_range: TaskTickRange,
    reboot: RebootCause,
}

/// Interrupt-driven hundredths clock with per-tick callbacks
pub struct TickService {
    ticks_per_second: u32,
    state: Mutex<CriticalSectionRawMutex, Cell<ClockState>>,
    handlers: Mutex<CriticalSectionRawMutex, RefCell<Vec<&'static dyn TickHandler, MAX_TICK_HANDLERS>>>,
}

impl TickService {
    /// Create a stopped service running at `ticks_per_second`
    ///
    /// The rate must be a non-zero multiple of 100.
    pub const fn new(ticks_per_second: u32) -> Self {
        assert!(ticks_per_second >= 100 && ticks_per_second % 100 == 0);
        Self {
            ticks_per_second,
            state: Mutex::new(Cell::new(ClockState {
                now: Clock::ZERO,
                sub_ticks: 0,
                uptime_seconds: 0,
                task_ticks: 0,
                adjustment: 0,
                task_range: TaskTickRange::EMPTY,
                reboot: RebootCause::Hardware,
            })),
            handlers: Mutex::new(RefCell::new(Vec::new())),
        }
    }

    /// Tick rate this service was built for
    pub const fn ticks_per_second(&self) -> u32 {
        self.ticks_per_second
    }

    /// Reset the clock and start the tick interrupt
    ///
    /// `last_shutdown_seconds` is the time persisted by the previous
    /// orderly shutdown, if any. The clock resumes from it; otherwise it
    /// starts at zero.
    pub fn initialize(
        &self,
        timer: &mut impl TickTimer,
        last_shutdown_seconds: Option<u32>,
    ) -> RebootCause {
        let seconds = last_shutdown_seconds.unwrap_or(0);
        let reboot = if seconds > 1 {
            RebootCause::Software
        } else {
            RebootCause::Hardware
        };

        self.state.lock(|state| {
            state.set(ClockState {
                now: Clock::from_seconds(seconds),
                sub_ticks: 0,
                uptime_seconds: 0,
                task_ticks: 0,
                adjustment: 0,
                task_range: TaskTickRange::EMPTY,
                reboot,
            })
        });

        timer.start(self.ticks_per_second);

        #[cfg(feature = "defmt")]
        defmt::info!(
            "Clock started at {}s, {} ticks/s, reboot by {:?}",
            seconds,
            self.ticks_per_second,
            reboot
        );

        reboot
    }

    /// Register a handler to run on every tick
    pub fn register(&self, handler: &'static dyn TickHandler) -> Result<(), TimeError> {
        let result = self.handlers.lock(|handlers| {
            handlers
                .borrow_mut()
                .push(handler)
                .map_err(|_| TimeError::HandlerCapacityExceeded)
        });

        #[cfg(feature = "defmt")]
        if result.is_err() {
            defmt::warn!("Tick handler rejected, {} slots in use", MAX_TICK_HANDLERS);
        }

        result
    }

    /// Tick interrupt entry point
    pub fn on_tick(&self) {
        let ticks_per_hundredth = self.ticks_per_second / 100;
        self.state.lock(|state| {
            let mut s = state.get();
            s.task_ticks = s.task_ticks.saturating_add(1);
            s.sub_ticks += 1;
            if s.sub_ticks >= ticks_per_hundredth {
                s.sub_ticks = 0;
                if s.now.advance_hundredth() {
                    s.uptime_seconds = s.uptime_seconds.wrapping_add(1);
                }
            }
            state.set(s);
        });

        let handlers = self.handlers.lock(|handlers| handlers.borrow().clone());
        for handler in handlers.iter() {
            handler.on_tick();
        }
    }

    /// Current time
    pub fn now(&self) -> Clock {
        self.state.lock(|state| state.get().now)
    }

    /// Deadline `delta_hundredths` from now
    pub fn future(&self, delta_hundredths: u32) -> Clock {
        self.now().plus_hundredths(delta_hundredths)
    }

    /// True once the clock has reached `deadline`
    pub fn has_arrived(&self, deadline: Clock) -> bool {
        self.now() >= deadline
    }

    /// Seconds since start-up
    pub fn uptime(&self) -> u32 {
        self.state.lock(|state| state.get().uptime_seconds)
    }

    /// Cause of the most recent start-up
    pub fn last_reboot(&self) -> RebootCause {
        self.state.lock(|state| state.get().reboot)
    }

    /// Record the real time supplied by the network
    ///
    /// The correction is held until [`TickService::apply_pending_adjustment`]
    /// so that running timeouts are not disturbed mid-measurement.
    pub fn set_adjustment(&self, epoch_seconds: u32) {
        let adjustment = self.state.lock(|state| {
            let mut s = state.get();
            s.adjustment = epoch_seconds.wrapping_sub(s.now.seconds()) as i32;
            state.set(s);
            s.adjustment
        });

        #[cfg(feature = "defmt")]
        defmt::info!("Clock adjustment pending: {}s", adjustment);
        #[cfg(not(feature = "defmt"))]
        let _ = adjustment;
    }

    /// Correction recorded but not yet applied
    pub fn pending_adjustment(&self) -> i32 {
        self.state.lock(|state| state.get().adjustment)
    }

    /// Fold the pending correction into the clock
    ///
    /// Deadlines computed before this call are measured against the old
    /// clock; callers must not have timeouts in flight.
    pub fn apply_pending_adjustment(&self) {
        self.state.lock(|state| {
            let mut s = state.get();
            s.now = s.now.adjusted(s.adjustment);
            s.adjustment = 0;
            state.set(s);
        });
    }

    /// Time to persist before an orderly restart: now, corrected, plus the
    /// watchdog allowance
    pub fn shutdown_timestamp(&self) -> u32 {
        self.state.lock(|state| {
            let s = state.get();
            s.now
                .seconds()
                .wrapping_add_signed(s.adjustment)
                .wrapping_add(SHUTDOWN_ALLOWANCE_SECONDS)
        })
    }

    /// Main loop bookkeeping
    ///
    /// Records how many ticks passed since the previous call.
    pub fn task(&self) {
        self.state.lock(|state| {
            let mut s = state.get();
            let ticks = s.task_ticks;
            s.task_ticks = 0;
            s.task_range.max = s.task_range.max.max(ticks);
            s.task_range.min = s.task_range.min.min(ticks);
            state.set(s);
        });
    }

    /// Loop cadence seen by [`TickService::task`]
    pub fn task_tick_range(&self) -> TaskTickRange {
        self.state.lock(|state| state.get().task_range)
    }

    /// Forget the recorded loop cadence
    pub fn reset_task_tick_range(&self) {
        self.state.lock(|state| {
            let mut s = state.get();
            s.task_range = TaskTickRange::EMPTY;
            state.set(s);
        });
    }
}

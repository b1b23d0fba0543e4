//! Mains and pump power monitoring
//!
//! Mains presence is a plain input fed from the supply rail through a
//! divider. The pump is watched through an AC opto-isolator whose output
//! pulses low with the mains cycle while the pump runs, so it is sampled
//! every main-loop pass and judged once per sample window.

use tankwatch_hal::InputPin;

use crate::time::{Clock, TickService};

/// Sample window length in hundredths
pub const SAMPLE_WINDOW_HUNDREDTHS: u32 = 5;

/// Fewest samples a window needs before it is trusted
const MIN_SAMPLES: u16 = 8;

/// Asserted samples in a window that mean the pump is running
const MIN_ASSERTED: u16 = 2;

/// Mains and pump state tracker
pub struct PowerMonitor<M, P> {
    mains: M,
    pump: P,
    window_end: Clock,
    samples: u16,
    asserted: u16,
    pump_on: bool,
}

impl<M: InputPin, P: InputPin> PowerMonitor<M, P> {
    /// Create a monitor and open its first sample window
    pub fn new(mains: M, pump: P, clock: &TickService) -> Self {
        Self {
            mains,
            pump,
            window_end: clock.future(SAMPLE_WINDOW_HUNDREDTHS),
            samples: 0,
            asserted: 0,
            pump_on: false,
        }
    }

    /// True while mains power is present
    pub fn mains_on(&self) -> bool {
        self.mains.is_high()
    }

    /// Pump state from the last trusted window
    pub fn pump_on(&self) -> bool {
        self.pump_on
    }

    /// Discard the current window and open a fresh one
    ///
    /// Needed after the clock has been stepped, since the open window's
    /// deadline was measured against the old time.
    pub fn resync(&mut self, clock: &TickService) {
        self.window_end = clock.future(SAMPLE_WINDOW_HUNDREDTHS);
        self.samples = 0;
        self.asserted = 0;
    }

    /// Take one sample, or close the window when it has elapsed
    ///
    /// Returns true when the pump state changed.
    pub fn task(&mut self, clock: &TickService) -> bool {
        if clock.has_arrived(self.window_end) {
            self.window_end = clock.future(SAMPLE_WINDOW_HUNDREDTHS);

            let was_on = self.pump_on;
            if self.samples >= MIN_SAMPLES {
                self.pump_on = self.asserted >= MIN_ASSERTED;
            }
            self.samples = 0;
            self.asserted = 0;

            if was_on != self.pump_on {
                #[cfg(feature = "defmt")]
                defmt::info!("Pump {}", if self.pump_on { "on" } else { "off" });
                return true;
            }
        } else {
            self.samples = self.samples.saturating_add(1);
            // Opto-isolator output is active low
            if self.pump.is_low() {
                self.asserted = self.asserted.saturating_add(1);
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    use crate::time::TICKS_PER_SECOND;

    struct MockPin<'a> {
        level: &'a Cell<bool>,
    }

    impl InputPin for MockPin<'_> {
        fn is_high(&self) -> bool {
            self.level.get()
        }
    }

    fn advance(clock: &TickService, hundredths: u32) {
        for _ in 0..hundredths * (TICKS_PER_SECOND / 100) {
            clock.on_tick();
        }
    }

    #[test]
    fn test_mains_follows_pin() {
        let clock = TickService::new(TICKS_PER_SECOND);
        let mains = Cell::new(true);
        let pump = Cell::new(true);
        let monitor = PowerMonitor::new(MockPin { level: &mains }, MockPin { level: &pump }, &clock);

        assert!(monitor.mains_on());
        mains.set(false);
        assert!(!monitor.mains_on());
    }

    #[test]
    fn test_pump_detected_after_window() {
        let clock = TickService::new(TICKS_PER_SECOND);
        let mains = Cell::new(true);
        let pump = Cell::new(true);
        let mut monitor =
            PowerMonitor::new(MockPin { level: &mains }, MockPin { level: &pump }, &clock);

        // Ten samples, two of them asserted
        for i in 0..10 {
            pump.set(!(i == 3 || i == 7));
            assert!(!monitor.task(&clock));
        }
        advance(&clock, SAMPLE_WINDOW_HUNDREDTHS);
        assert!(monitor.task(&clock));
        assert!(monitor.pump_on());
    }

    #[test]
    fn test_sparse_window_keeps_previous_state() {
        let clock = TickService::new(TICKS_PER_SECOND);
        let mains = Cell::new(true);
        let pump = Cell::new(false);
        let mut monitor =
            PowerMonitor::new(MockPin { level: &mains }, MockPin { level: &pump }, &clock);

        // Only five samples, all asserted: not enough to judge
        for _ in 0..5 {
            monitor.task(&clock);
        }
        advance(&clock, SAMPLE_WINDOW_HUNDREDTHS);
        assert!(!monitor.task(&clock));
        assert!(!monitor.pump_on());
    }

    #[test]
    fn test_resync_after_clock_stepped_back() {
        let clock = TickService::new(TICKS_PER_SECOND);
        let mains = Cell::new(true);
        let pump = Cell::new(false);
        advance(&clock, 1000);
        let mut monitor =
            PowerMonitor::new(MockPin { level: &mains }, MockPin { level: &pump }, &clock);

        // Step the clock back five seconds
        clock.set_adjustment(clock.now().seconds() - 5);
        clock.apply_pending_adjustment();
        monitor.resync(&clock);

        for _ in 0..8 {
            monitor.task(&clock);
        }
        advance(&clock, SAMPLE_WINDOW_HUNDREDTHS);
        assert!(monitor.task(&clock));
        assert!(monitor.pump_on());
    }

    #[test]
    fn test_pump_turns_off() {
        let clock = TickService::new(TICKS_PER_SECOND);
        let mains = Cell::new(true);
        let pump = Cell::new(false);
        let mut monitor =
            PowerMonitor::new(MockPin { level: &mains }, MockPin { level: &pump }, &clock);

        for _ in 0..8 {
            monitor.task(&clock);
        }
        advance(&clock, SAMPLE_WINDOW_HUNDREDTHS);
        monitor.task(&clock);
        assert!(monitor.pump_on());

        pump.set(true);
        for _ in 0..8 {
            monitor.task(&clock);
        }
        advance(&clock, SAMPLE_WINDOW_HUNDREDTHS);
        assert!(monitor.task(&clock));
        assert!(!monitor.pump_on());
    }
}

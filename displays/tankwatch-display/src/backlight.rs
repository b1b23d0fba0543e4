//! Backlight software PWM
//!
//! The backlight pin is switched from the tick interrupt. Each PWM cycle
//! is [`PWM_STEPS`] ticks long; the pin is on for the first `level` ticks
//! of the cycle and off for the rest. At 4800 ticks per second this gives
//! a 480 Hz cycle. The pin is only written when its state changes, so
//! levels 0 and 10 never toggle.
//!
//! A new level is latched at the start of the next cycle.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use tankwatch_core::time::TickHandler;
use tankwatch_hal::OutputPin;

/// Ticks per PWM cycle, and the number of brightness steps
pub const PWM_STEPS: u8 = 10;

/// Backlight brightness, 0 (off) to 10 (fully on)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BacklightLevel(u8);

impl BacklightLevel {
    pub const OFF: BacklightLevel = BacklightLevel(0);
    pub const FULL: BacklightLevel = BacklightLevel(PWM_STEPS);

    /// Create a level, clamping values above 10
    pub const fn new(level: u8) -> Self {
        if level > PWM_STEPS {
            Self::FULL
        } else {
            BacklightLevel(level)
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Brightness setter used by the screen layer
pub trait BacklightControl {
    /// Request a new brightness; takes effect at the next PWM cycle
    fn set_brightness(&self, level: BacklightLevel);

    /// Most recently requested brightness
    fn brightness(&self) -> BacklightLevel;
}

struct PwmState<P> {
    pin: P,
    /// Level in force for the current cycle
    level: u8,
    /// Level to latch at the next cycle start
    pending: u8,
    step: u8,
    /// Last state written to the pin, None before the first write
    lit: Option<bool>,
}

/// Tick-driven PWM backlight
pub struct Backlight<P> {
    state: Mutex<CriticalSectionRawMutex, RefCell<PwmState<P>>>,
}

impl<P: OutputPin> Backlight<P> {
    /// Create a backlight that starts at `level` on its first tick
    pub const fn new(pin: P, level: BacklightLevel) -> Self {
        Self {
            state: Mutex::new(RefCell::new(PwmState {
                pin,
                level: level.0,
                pending: level.0,
                step: 0,
                lit: None,
            })),
        }
    }

    /// Advance the PWM by one tick
    pub fn tick(&self) {
        self.state.lock(|state| {
            let mut s = state.borrow_mut();
            if s.step == 0 {
                s.level = s.pending;
            }

            let on = s.step < s.level;
            if s.lit != Some(on) {
                s.pin.set_state(on);
                s.lit = Some(on);
            }

            s.step = (s.step + 1) % PWM_STEPS;
        });
    }
}

impl<P: OutputPin> BacklightControl for Backlight<P> {
    fn set_brightness(&self, level: BacklightLevel) {
        self.state.lock(|state| state.borrow_mut().pending = level.0);
    }

    fn brightness(&self) -> BacklightLevel {
        BacklightLevel(self.state.lock(|state| state.borrow().pending))
    }
}

impl<P: OutputPin + Send> TickHandler for Backlight<P> {
    fn on_tick(&self) {
        self.tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// Pin that counts writes and ticks spent high
    struct MockPin<'a> {
        high: &'a Cell<bool>,
        writes: &'a Cell<u32>,
    }

    impl OutputPin for MockPin<'_> {
        fn set_high(&mut self) {
            self.high.set(true);
            self.writes.set(self.writes.get() + 1);
        }

        fn set_low(&mut self) {
            self.high.set(false);
            self.writes.set(self.writes.get() + 1);
        }

        fn is_set_high(&self) -> bool {
            self.high.get()
        }
    }

    fn high_ticks_per_cycle<P: OutputPin>(backlight: &Backlight<P>, high: &Cell<bool>) -> u8 {
        let mut count = 0;
        for _ in 0..PWM_STEPS {
            backlight.tick();
            if high.get() {
                count += 1;
            }
        }
        count
    }

    #[test]
    fn test_level_clamps() {
        assert_eq!(BacklightLevel::new(42), BacklightLevel::FULL);
        assert_eq!(BacklightLevel::new(4).value(), 4);
    }

    #[test]
    fn test_full_brightness_never_toggles() {
        let high = Cell::new(false);
        let writes = Cell::new(0);
        let backlight = Backlight::new(MockPin { high: &high, writes: &writes }, BacklightLevel::FULL);

        for _ in 0..100 {
            backlight.tick();
            assert!(high.get());
        }
        assert_eq!(writes.get(), 1);
    }

    #[test]
    fn test_off_never_toggles() {
        let high = Cell::new(true);
        let writes = Cell::new(0);
        let backlight = Backlight::new(MockPin { high: &high, writes: &writes }, BacklightLevel::OFF);

        for _ in 0..100 {
            backlight.tick();
            assert!(!high.get());
        }
        assert_eq!(writes.get(), 1);
    }

    #[test]
    fn test_duty_cycle_matches_level() {
        let high = Cell::new(false);
        let writes = Cell::new(0);
        let backlight = Backlight::new(MockPin { high: &high, writes: &writes }, BacklightLevel::new(3));

        assert_eq!(high_ticks_per_cycle(&backlight, &high), 3);
        assert_eq!(high_ticks_per_cycle(&backlight, &high), 3);
    }

    #[test]
    fn test_new_level_waits_for_cycle_start() {
        let high = Cell::new(false);
        let writes = Cell::new(0);
        let backlight = Backlight::new(MockPin { high: &high, writes: &writes }, BacklightLevel::new(2));

        // Mid-cycle change does not alter the running cycle
        for _ in 0..5 {
            backlight.tick();
        }
        backlight.set_brightness(BacklightLevel::new(8));
        assert_eq!(backlight.brightness(), BacklightLevel::new(8));
        for _ in 5..PWM_STEPS {
            backlight.tick();
            assert!(!high.get());
        }

        assert_eq!(high_ticks_per_cycle(&backlight, &high), 8);
    }
}

//! Discrete pins around the panel
//!
//! The driver owns the panel's reset and data/command lines, the
//! backlight owns its PWM pin, and the power monitor samples the mains and
//! pump opto-isolators. Each of these only needs a single level.

/// A line the firmware drives
pub trait OutputPin {
    /// Drive the line to 1
    fn set_high(&mut self);

    /// Drive the line to 0
    fn set_low(&mut self);

    /// Drive the line to `high`, the form the PWM step uses
    fn set_state(&mut self, high: bool) {
        match high {
            true => self.set_high(),
            false => self.set_low(),
        }
    }

    /// Level most recently driven
    fn is_set_high(&self) -> bool;
}

/// A line the firmware samples
pub trait InputPin {
    /// Sampled level is 1
    fn is_high(&self) -> bool;

    /// Sampled level is 0. Both opto inputs are active low.
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

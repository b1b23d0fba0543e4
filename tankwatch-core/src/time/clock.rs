//! Clock values
//!
//! A [`Clock`] is a point in time with hundredth-of-a-second resolution:
//! whole seconds since the epoch (or since boot, before the network has
//! supplied the real time) plus hundredths within the current second.
//! Deadlines are plain [`Clock`] values.

use core::fmt;

/// Seconds in a day
const SECONDS_PER_DAY: u32 = 86_400;

/// Three-letter day names, indexed by [`Clock::day_of_week`]
const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Point in time with hundredth-of-a-second resolution
///
/// Ordering compares seconds first and hundredths second, so a deadline
/// has arrived once `now >= deadline`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clock {
    seconds: u32,
    hundredths: u8,
}

impl Clock {
    /// The zero time
    pub const ZERO: Clock = Clock {
        seconds: 0,
        hundredths: 0,
    };

    /// Create a clock value. Hundredths of 100 or more carry into seconds.
    pub const fn new(seconds: u32, hundredths: u8) -> Self {
        Self {
            seconds: seconds.wrapping_add((hundredths / 100) as u32),
            hundredths: hundredths % 100,
        }
    }

    /// Create a clock value on a whole second
    pub const fn from_seconds(seconds: u32) -> Self {
        Self {
            seconds,
            hundredths: 0,
        }
    }

    /// Whole seconds
    pub const fn seconds(&self) -> u32 {
        self.seconds
    }

    /// Hundredths within the current second (0-99)
    pub const fn hundredths(&self) -> u8 {
        self.hundredths
    }

    /// This time plus `delta` hundredths of a second
    pub const fn plus_hundredths(self, delta: u32) -> Self {
        let mut hundredths = self.hundredths as u32 + delta % 100;
        let mut seconds = self.seconds.wrapping_add(delta / 100);
        if hundredths >= 100 {
            hundredths -= 100;
            seconds = seconds.wrapping_add(1);
        }
        Self {
            seconds,
            hundredths: hundredths as u8,
        }
    }

    /// Advance by one hundredth. Returns true when the seconds rolled over.
    pub fn advance_hundredth(&mut self) -> bool {
        self.hundredths += 1;
        if self.hundredths >= 100 {
            self.hundredths = 0;
            self.seconds = self.seconds.wrapping_add(1);
            true
        } else {
            false
        }
    }

    /// Shift the seconds by a signed correction, keeping the hundredths
    pub const fn adjusted(self, correction: i32) -> Self {
        Self {
            seconds: self.seconds.wrapping_add_signed(correction),
            hundredths: self.hundredths,
        }
    }

    /// Day of the week, 0 = Sunday
    pub const fn day_of_week(&self) -> u8 {
        ((self.seconds / SECONDS_PER_DAY) % 7) as u8
    }

    /// Hour of the day (0-23)
    pub const fn hours(&self) -> u8 {
        ((self.seconds / 3600) % 24) as u8
    }

    /// Minute of the hour (0-59)
    pub const fn minutes(&self) -> u8 {
        ((self.seconds / 60) % 60) as u8
    }

    /// Second of the minute (0-59)
    pub const fn second_of_minute(&self) -> u8 {
        (self.seconds % 60) as u8
    }

    /// Display adapter rendering `Ddd HH:MM:SS`
    pub const fn time_of_day(self) -> TimeOfDay {
        TimeOfDay(self)
    }
}

/// Formats a [`Clock`] as weekday and time of day, e.g. `Tue 07:05:09`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay(pub Clock);

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clock = &self.0;
        write!(
            f,
            "{} {:02}:{:02}:{:02}",
            DAY_NAMES[clock.day_of_week() as usize],
            clock.hours(),
            clock.minutes(),
            clock.second_of_minute()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;
    use heapless::String;

    #[test]
    fn test_new_carries_hundredths() {
        let clock = Clock::new(10, 250);
        assert_eq!(clock.seconds(), 12);
        assert_eq!(clock.hundredths(), 50);
    }

    #[test]
    fn test_plus_hundredths_carry() {
        let clock = Clock::new(5, 80).plus_hundredths(30);
        assert_eq!(clock, Clock::new(6, 10));

        let clock = Clock::new(5, 99).plus_hundredths(1);
        assert_eq!(clock, Clock::new(6, 0));

        let clock = Clock::new(5, 0).plus_hundredths(250);
        assert_eq!(clock, Clock::new(7, 50));
    }

    #[test]
    fn test_ordering_seconds_then_hundredths() {
        assert!(Clock::new(3, 0) > Clock::new(2, 99));
        assert!(Clock::new(3, 10) > Clock::new(3, 9));
        assert!(Clock::new(3, 10) >= Clock::new(3, 10));
    }

    #[test]
    fn test_advance_hundredth_rolls_seconds() {
        let mut clock = Clock::new(0, 98);
        assert!(!clock.advance_hundredth());
        assert!(clock.advance_hundredth());
        assert_eq!(clock, Clock::from_seconds(1));
    }

    #[test]
    fn test_adjusted_both_directions() {
        let clock = Clock::new(1000, 42);
        assert_eq!(clock.adjusted(500), Clock::new(1500, 42));
        assert_eq!(clock.adjusted(-400), Clock::new(600, 42));
    }

    #[test]
    fn test_time_of_day_fields() {
        // Three days, 7h 5m 9s
        let clock = Clock::from_seconds(3 * 86_400 + 7 * 3600 + 5 * 60 + 9);
        assert_eq!(clock.day_of_week(), 3);
        assert_eq!(clock.hours(), 7);
        assert_eq!(clock.minutes(), 5);
        assert_eq!(clock.second_of_minute(), 9);

        let mut text: String<16> = String::new();
        write!(text, "{}", clock.time_of_day()).unwrap();
        assert_eq!(text.as_str(), "Wed 07:05:09");
    }
}

//! Asynchronous SPI byte transport
//!
//! The transport moves one byte at a time and never blocks: a transfer is
//! started with [`SpiTransport::send_byte`] or [`SpiTransport::request_byte`]
//! and the caller polls [`SpiTransport::operation_completed`] until the
//! peripheral is done. There is no timeout or error signalling at this
//! layer; callers bound their own polling.

/// Byte-at-a-time SPI link with device-select control
pub trait SpiTransport {
    /// Configure the peripheral. Leaves the device-select line deasserted.
    fn configure(&mut self, options: SpiOptions);

    /// Drive the device-select line active (low).
    ///
    /// The peripheral needs a short settling time after this before the
    /// first byte is clocked out; the caller is responsible for waiting.
    fn assert_select(&mut self);

    /// Release the device-select line (idle high)
    fn deassert_select(&mut self);

    /// Start transmitting one byte and return immediately
    fn send_byte(&mut self, byte: u8);

    /// Start a dummy transmission whose only purpose is to clock in a
    /// byte from the peer
    fn request_byte(&mut self);

    /// True once the most recent send or request has finished.
    /// Cleared automatically when the next transfer starts.
    fn operation_completed(&mut self) -> bool;

    /// Byte received by the last [`SpiTransport::request_byte`].
    ///
    /// Only meaningful once [`SpiTransport::operation_completed`] has
    /// returned true.
    fn get_byte(&mut self) -> u8;
}

/// Transport configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiOptions {
    /// Master or slave operation
    pub role: Role,
    /// Serial clock as a division of the peripheral clock
    pub clock_divider: ClockDivider,
    /// Clock polarity
    pub polarity: Polarity,
    /// Clock phase
    pub phase: Phase,
    /// Order in which bits are shifted out
    pub bit_order: BitOrder,
}

impl SpiOptions {
    /// Options with polarity and phase taken from an SPI mode
    pub fn with_mode(role: Role, clock_divider: ClockDivider, mode: Mode, bit_order: BitOrder) -> Self {
        let (polarity, phase) = mode.into();
        Self {
            role,
            clock_divider,
            polarity,
            phase,
            bit_order,
        }
    }
}

impl Default for SpiOptions {
    fn default() -> Self {
        Self::with_mode(Role::Master, ClockDivider::Div4, Mode::Mode0, BitOrder::MsbFirst)
    }
}

/// Which side of the link drives the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Role {
    /// This device generates the clock
    Master,
    /// The peer generates the clock
    Slave,
}

/// Serial clock divider relative to the peripheral clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockDivider {
    Div2,
    Div4,
    Div8,
    Div16,
    Div32,
    Div64,
    Div128,
}

impl ClockDivider {
    /// The numeric divisor
    pub const fn divisor(self) -> u32 {
        match self {
            ClockDivider::Div2 => 2,
            ClockDivider::Div4 => 4,
            ClockDivider::Div8 => 8,
            ClockDivider::Div16 => 16,
            ClockDivider::Div32 => 32,
            ClockDivider::Div64 => 64,
            ClockDivider::Div128 => 128,
        }
    }

    /// Serial clock frequency obtained from `source_hz`
    pub const fn frequency(self, source_hz: u32) -> u32 {
        source_hz / self.divisor()
    }
}

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// Bit order on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    MsbFirst,
    LsbFirst,
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl From<Mode> for (Polarity, Phase) {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Mode0 => (Polarity::IdleLow, Phase::CaptureOnFirstTransition),
            Mode::Mode1 => (Polarity::IdleLow, Phase::CaptureOnSecondTransition),
            Mode::Mode2 => (Polarity::IdleHigh, Phase::CaptureOnFirstTransition),
            Mode::Mode3 => (Polarity::IdleHigh, Phase::CaptureOnSecondTransition),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_are_master_mode0_msb() {
        let options = SpiOptions::default();
        assert_eq!(options.role, Role::Master);
        assert_eq!(options.clock_divider, ClockDivider::Div4);
        assert_eq!(options.polarity, Polarity::IdleLow);
        assert_eq!(options.phase, Phase::CaptureOnFirstTransition);
        assert_eq!(options.bit_order, BitOrder::MsbFirst);
    }

    #[test]
    fn test_mode3_maps_to_idle_high_second_edge() {
        let (polarity, phase) = Mode::Mode3.into();
        assert_eq!(polarity, Polarity::IdleHigh);
        assert_eq!(phase, Phase::CaptureOnSecondTransition);
    }

    #[test]
    fn test_divider_frequency() {
        assert_eq!(ClockDivider::Div4.frequency(16_000_000), 4_000_000);
        assert_eq!(ClockDivider::Div128.frequency(125_000_000), 976_562);
    }
}

//! Status snapshot
//!
//! The latest values published by the sensor, cellular and power
//! subsystems. The display layer only ever reads a copy of this.

use crate::time::Clock;

/// Highest level percentage
pub const FULL_PERCENT: u8 = 100;

/// Tank water level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaterLevel {
    /// Percent full, 0-100
    Known(u8),
    /// No valid reading yet, or the sensor reported a fault
    #[default]
    Unknown,
}

impl WaterLevel {
    /// Level from a raw sensor value: negative means unknown, values
    /// above 100 are clamped
    pub fn from_raw(raw: i8) -> Self {
        if raw < 0 {
            WaterLevel::Unknown
        } else {
            WaterLevel::Known((raw as u8).min(FULL_PERCENT))
        }
    }
}

/// Everything the status screen shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusReport {
    /// Latest tank level
    pub water_level: WaterLevel,
    /// When the level was measured
    pub level_timestamp: Option<Clock>,
    /// Enclosure temperature in degrees Celsius
    pub temperature_c: Option<i16>,
    /// Battery charge
    pub battery_percent: Option<u8>,
    /// Cellular signal quality (0-31)
    pub signal_quality: Option<u8>,
    /// Mains power present
    pub mains_on: bool,
    /// Pump running
    pub pump_on: bool,
}

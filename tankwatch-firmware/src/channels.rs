//! Inputs published to the display loop
//!
//! The sensor and cellular subsystems run elsewhere and hand their
//! results over through these signals. The display loop only ever takes
//! the latest value.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use tankwatch_core::status::StatusReport;

/// Latest cellular snapshot: temperature, battery and signal quality.
/// The level, mains and pump fields are ignored; the display loop owns
/// those.
pub static STATUS_UPDATE: Signal<CriticalSectionRawMutex, StatusReport> = Signal::new();

/// Raw level sensor reading in percent, negative when the sensor faulted
pub static LEVEL_READING: Signal<CriticalSectionRawMutex, i8> = Signal::new();

/// Epoch seconds received from network time
pub static NETWORK_TIME: Signal<CriticalSectionRawMutex, u32> = Signal::new();

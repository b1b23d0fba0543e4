//! RP2040-specific HAL for the water tank monitor firmware
//!
//! This crate provides RP2040 implementations of the shared
//! `tankwatch-hal` traits:
//!
//! - GPIO wrappers (implement `OutputPin` / `InputPin`)
//! - Byte-at-a-time SPI transport on the PL022 registers, with a software
//!   select line
//! - SysTick tick timer
//! - Flash storage driver (implements `tankwatch_hal::FlashStorage`)

#![no_std]

pub mod flash;
pub mod gpio;
pub mod spi;
pub mod timer;

pub use flash::Rp2040FlashStorage;
pub use gpio::{RpInput, RpOutput};
pub use spi::{Rp2040SpiTransport, SpiRegisters};
pub use timer::SysTickTimer;

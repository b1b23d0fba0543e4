//! Tankwatch Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the monitor's
//! board-agnostic crates are written against. Chip-specific crates
//! (currently only RP2040) implement them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tankwatch-core / tankwatch-display     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tankwatch-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ tankwatch-hal-│
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`spi::SpiTransport`] - Byte-at-a-time, poll-for-completion SPI
//! - [`timer::TickTimer`] - Periodic tick interrupt source
//! - [`flash::FlashStorage`] - Persistent storage

#![no_std]
#![deny(unsafe_code)]

pub mod flash;
pub mod gpio;
pub mod spi;
pub mod timer;

// Re-export key traits at crate root for convenience
pub use flash::{FlashError, FlashStorage, StorageKey};
pub use gpio::{InputPin, OutputPin};
pub use spi::{SpiOptions, SpiTransport};
pub use timer::TickTimer;

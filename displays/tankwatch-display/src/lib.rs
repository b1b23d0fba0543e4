//! TFT rendering pipeline for the water tank monitor
//!
//! This crate provides:
//! - [`hxd8357d::Hxd8357d`], a cooperative driver for the HXD8357D panel
//!   controller that brings the panel up and streams primitives to it a
//!   bounded chunk per call
//! - [`primitives`], the rectangle/text primitives and the
//!   [`PrimitiveSource`] pull protocol the driver draws from
//! - [`font`], a read-only bitmap font store
//! - [`backlight::Backlight`], a tick-driven software PWM
//! - [`screen::WaterLevelScreen`], the status screen that supplies
//!   primitives
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐  next_rectangle()  ┌──────────────────────┐
//! │  WaterLevelScreen    │◄───────────────────│  Hxd8357d driver     │
//! │  (PrimitiveSource)   │  next_text()       │  task() per loop     │
//! └──────────────────────┘                    └──────────────────────┘
//!                                                        │
//!                                                        ▼
//!                                             ┌──────────────────────┐
//!                                             │ SpiTransport (bytes) │
//!                                             └──────────────────────┘
//! ```
//!
//! The main loop calls the driver's `task` once per pass. Nothing in this
//! crate blocks beyond a single byte transfer.

#![no_std]
#![deny(unsafe_code)]

pub mod backlight;
pub mod font;
pub mod hxd8357d;
pub mod primitives;
pub mod screen;

// Re-export key types
pub use backlight::{Backlight, BacklightControl, BacklightLevel};
pub use embedded_graphics::pixelcolor::Rgb565;
pub use hxd8357d::{DriverConfig, DriverFault, DriverState, Hxd8357d};
pub use primitives::{PrimitiveSource, Rectangle, Text};
pub use screen::WaterLevelScreen;

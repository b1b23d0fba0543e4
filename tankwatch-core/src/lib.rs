//! Board-agnostic core logic for the water tank monitor firmware
//!
//! This crate contains the application logic that does not depend on
//! specific hardware implementations:
//!
//! - Clock values and the interrupt-driven tick/timer service
//! - Persisted device settings
//! - Mains and pump power monitoring
//! - The status snapshot published to the display

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod power;
pub mod status;
pub mod time;

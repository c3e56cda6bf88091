//! Vigil Hardware Abstraction Layer
//!
//! This crate defines hardware abstraction traits that can be implemented
//! by chip-specific adapters (RP2040 today, anything with GPIO tomorrow).
//! The drivers and the core logic only ever see these traits, so they
//! build and test on the host against simulated pins.
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`gpio::FlexPin`] - Lines whose direction switches at runtime
//! - [`delay::DelayUs`] - Busy-wait delays

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use delay::DelayUs;
pub use gpio::{FlexPin, InputPin, OutputPin};

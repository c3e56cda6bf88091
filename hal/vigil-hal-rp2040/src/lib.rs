//! RP2040-specific HAL adapters for the Vigil alarm firmware
//!
//! Thin newtypes implementing the shared `vigil-hal` traits on top of
//! embassy-rp GPIO, plus a spin-loop delay provider. Nothing in here
//! has behavior of its own; all logic lives above the trait boundary.

#![no_std]

pub mod delay;
pub mod gpio;

pub use delay::SpinDelay;
pub use gpio::{RpFlex, RpInput, RpOutput};

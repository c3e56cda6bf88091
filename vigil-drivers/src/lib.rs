//! Peripheral driver implementations
//!
//! This crate provides the hardware drivers for the alarm panel,
//! generic over the traits defined in vigil-hal:
//!
//! - HD44780 character LCD on a 4-bit parallel bus
//! - 4x3 matrix-keypad scanner with release debounce
//! - Latching siren (combined buzzer/LED) output
//!
//! Everything here is unit-tested on the host against mock pins.

#![no_std]
#![deny(unsafe_code)]

pub mod keypad;
pub mod lcd;
pub mod siren;

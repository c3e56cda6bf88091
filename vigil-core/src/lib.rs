//! Board-agnostic core logic for the Vigil alarm firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Alarm state machine (the one-way motion latch)
//! - Keypad layout table
//! - Input session controller for access-code entry

#![no_std]
#![deny(unsafe_code)]

pub mod alarm;
pub mod keypad;
pub mod session;

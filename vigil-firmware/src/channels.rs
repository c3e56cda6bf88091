//! Inter-task communication channels
//!
//! The motion task publishes alarm state transitions; the UI task
//! overlays the alarm banner. This signal is the only cross-task
//! surface - display and keypad lines belong to the UI task alone,
//! the siren line to the motion task alone.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use vigil_core::alarm::AlarmState;

/// Alarm state published by the motion task
pub static ALARM_STATE: Signal<CriticalSectionRawMutex, AlarmState> = Signal::new();

//! Spin-loop delay based on the embassy time driver
//!
//! The drivers expect plain busy-waits (the original control loop has
//! no suspension primitive), so this deliberately does not `.await`.

use embassy_time::{Duration, Instant};
use vigil_hal::DelayUs;

/// Busy-wait delay provider
///
/// Zero-sized; hand a copy to every driver that needs one.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinDelay;

impl DelayUs for SpinDelay {
    fn delay_us(&mut self, us: u32) {
        let deadline = Instant::now() + Duration::from_micros(us as u64);
        while Instant::now() < deadline {
            cortex_m::asm::nop();
        }
    }
}

//! Busy-wait delay abstraction
//!
//! The scanner and the LCD bus both pace themselves with short spins.
//! These are plain busy-waits: no yielding, no cancellation. Chip
//! adapters decide how to burn the time.

/// Microsecond-resolution busy-wait
pub trait DelayUs {
    /// Spin for at least `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Spin for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        self.delay_us(ms.saturating_mul(1_000));
    }
}

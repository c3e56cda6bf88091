//! Latching siren output
//!
//! One line drives both the buzzer and the indicator LED. On trigger
//! the driver plays a square-wave burst and then forces the line high
//! for good: there is no silencing path, silencing the alarm takes a
//! power cycle.

use vigil_hal::{DelayUs, OutputPin};

/// Square-wave burst played when the siren first trips
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SirenTone {
    /// Half period of the square wave
    pub half_period_us: u32,
    /// On/off cycles before the line latches on
    pub burst_cycles: u32,
}

impl Default for SirenTone {
    fn default() -> Self {
        // 5 ms half period (100 Hz buzz), one second of tone
        Self {
            half_period_us: 5_000,
            burst_cycles: 100,
        }
    }
}

/// Latching siren over a single output line
///
/// The line is written from exactly one place (the motion path); the
/// rest of the system only ever observes it.
pub struct Siren<P, D> {
    pin: P,
    delay: D,
    tone: SirenTone,
    latched: bool,
}

impl<P, D> Siren<P, D>
where
    P: OutputPin,
    D: DelayUs,
{
    /// Take the line and force it low (quiet)
    pub fn new(pin: P, delay: D) -> Self {
        let mut siren = Self {
            pin,
            delay,
            tone: SirenTone::default(),
            latched: false,
        };
        siren.pin.set_low();
        siren
    }

    /// Override the tone parameters
    pub fn with_tone(mut self, tone: SirenTone) -> Self {
        self.tone = tone;
        self
    }

    /// Play the tone burst, then hold the line on
    ///
    /// Re-triggering while latched is a no-op: the line is already on
    /// and stays on.
    pub fn trigger(&mut self) {
        if self.latched {
            return;
        }

        for _ in 0..self.tone.burst_cycles {
            self.pin.set_high();
            self.delay.delay_us(self.tone.half_period_us);
            self.pin.set_low();
            self.delay.delay_us(self.tone.half_period_us);
        }

        self.pin.set_high();
        self.latched = true;
    }

    /// Whether the siren has tripped and the line is held on
    pub fn is_latched(&self) -> bool {
        self.latched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock pin that counts level transitions
    struct MockPin {
        high: bool,
        transitions: u32,
    }

    impl MockPin {
        fn new() -> Self {
            Self {
                high: false,
                transitions: 0,
            }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            if !self.high {
                self.transitions += 1;
            }
            self.high = true;
        }

        fn set_low(&mut self) {
            if self.high {
                self.transitions += 1;
            }
            self.high = false;
        }

        fn toggle(&mut self) {
            self.transitions += 1;
            self.high = !self.high;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    struct NoDelay;

    impl DelayUs for NoDelay {
        fn delay_us(&mut self, _us: u32) {}
    }

    #[test]
    fn test_trigger_latches_high() {
        let pin = MockPin::new();
        let mut siren = Siren::new(pin, NoDelay).with_tone(SirenTone {
            half_period_us: 1,
            burst_cycles: 3,
        });

        assert!(!siren.is_latched());
        assert!(!siren.pin.is_set_high());

        siren.trigger();

        assert!(siren.is_latched());
        assert!(siren.pin.is_set_high());
        // 3 full cycles plus the final latch-on edge
        assert_eq!(siren.pin.transitions, 7);
    }

    #[test]
    fn test_retrigger_is_noop() {
        let pin = MockPin::new();
        let mut siren = Siren::new(pin, NoDelay).with_tone(SirenTone {
            half_period_us: 1,
            burst_cycles: 2,
        });

        siren.trigger();
        let edges = siren.pin.transitions;

        siren.trigger();

        assert!(siren.pin.is_set_high());
        assert_eq!(siren.pin.transitions, edges, "line stays held, no new edges");
    }

    #[test]
    fn test_starts_quiet() {
        let siren = Siren::new(MockPin::new(), NoDelay);
        assert!(!siren.pin.is_set_high());
        assert!(!siren.is_latched());
    }
}

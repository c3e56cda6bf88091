//! embassy-rp GPIO adapters for the `vigil-hal` pin traits

use embassy_rp::gpio::{Flex, Input, Output, Pull};
use vigil_hal::{FlexPin, InputPin, OutputPin};

/// Push-pull output line
pub struct RpOutput<'d> {
    inner: Output<'d>,
}

impl<'d> RpOutput<'d> {
    pub fn new(inner: Output<'d>) -> Self {
        Self { inner }
    }
}

impl OutputPin for RpOutput<'_> {
    fn set_high(&mut self) {
        self.inner.set_high();
    }

    fn set_low(&mut self) {
        self.inner.set_low();
    }

    fn toggle(&mut self) {
        self.inner.toggle();
    }

    fn is_set_high(&self) -> bool {
        self.inner.is_set_high()
    }
}

/// Input line; pull configuration is chosen at construction
pub struct RpInput<'d> {
    inner: Input<'d>,
}

impl<'d> RpInput<'d> {
    pub fn new(inner: Input<'d>) -> Self {
        Self { inner }
    }
}

impl InputPin for RpInput<'_> {
    fn is_high(&self) -> bool {
        self.inner.is_high()
    }
}

/// Direction-switchable line for the keypad columns
pub struct RpFlex<'d> {
    inner: Flex<'d>,
}

impl<'d> RpFlex<'d> {
    pub fn new(inner: Flex<'d>) -> Self {
        Self { inner }
    }
}

impl OutputPin for RpFlex<'_> {
    fn set_high(&mut self) {
        self.inner.set_high();
    }

    fn set_low(&mut self) {
        self.inner.set_low();
    }

    fn toggle(&mut self) {
        self.inner.toggle();
    }

    fn is_set_high(&self) -> bool {
        self.inner.is_set_high()
    }
}

impl InputPin for RpFlex<'_> {
    fn is_high(&self) -> bool {
        self.inner.is_high()
    }
}

impl FlexPin for RpFlex<'_> {
    fn set_as_output(&mut self) {
        self.inner.set_as_output();
    }

    fn set_as_input_pullup(&mut self) {
        self.inner.set_pull(Pull::Up);
        self.inner.set_as_input();
    }
}

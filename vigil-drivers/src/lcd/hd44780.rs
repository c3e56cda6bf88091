//! HD44780 character-LCD driver over a 4-bit parallel bus
//!
//! Only four data lines are wired, so every byte goes out as two
//! nibble transfers, high half first, each latched by a pulse on the
//! enable line. The controller never acknowledges anything; commands
//! sent before the previous one finished are silently dropped or
//! corrupted, which is why every command is followed by its datasheet
//! execution delay.
//!
//! The driver does not track the cursor. The cursor register is shared
//! between callers (banner code and the code-entry echo both write),
//! so position must be set before each write.

use vigil_hal::{DelayUs, OutputPin};

/// DDRAM base address per display row (two-line glass)
const ROW_BASE: [u8; 2] = [0x00, 0x40];

/// HD44780 command bytes
mod cmd {
    /// Reset nudge toward 8-bit mode, sent first regardless of prior state
    pub const MODE_8BIT_NUDGE: u8 = 0x33;
    /// Switch the interface to 4-bit mode
    pub const MODE_4BIT: u8 = 0x32;
    /// Function set: 4-bit bus, 2 lines, 5x8 font
    pub const FUNCTION_SET: u8 = 0x28;
    /// Display on, cursor on, blink on
    pub const DISPLAY_ON: u8 = 0x0F;
    /// Clear display (markedly slower than other commands)
    pub const CLEAR: u8 = 0x01;
    /// Entry mode: advance cursor left-to-right, no shift
    pub const ENTRY_LTR: u8 = 0x06;
    /// Set DDRAM address; low bits carry the address
    pub const SET_DDRAM: u8 = 0x80;
}

/// Register-select mode for a bus write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WriteMode {
    /// RS low: byte goes to the instruction register
    Command,
    /// RS high: byte goes to display RAM
    Data,
}

/// Bus and command timing, in microseconds
///
/// Defaults follow the datasheet values the controller needs at the
/// usual 270 kHz internal clock.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LcdTiming {
    /// Power-stabilization wait before the first command
    pub power_on_us: u32,
    /// Wait after the 8-bit-mode nudge
    pub mode_set_us: u32,
    /// Wait after an ordinary command
    pub command_us: u32,
    /// Wait after the clear command
    pub clear_us: u32,
    /// Enable pulse width, also the settle delay after it falls
    pub pulse_us: u32,
}

impl Default for LcdTiming {
    fn default() -> Self {
        Self {
            power_on_us: 15_000,
            mode_set_us: 5_000,
            command_us: 100,
            clear_us: 2_000,
            pulse_us: 100,
        }
    }
}

/// HD44780 driver owning the six LCD lines
///
/// All six lines are plain push-pull outputs; none may carry a pin
/// alternate function.
pub struct Lcd<RS, EN, D4, D5, D6, D7, DELAY> {
    rs: RS,
    en: EN,
    d4: D4,
    d5: D5,
    d6: D6,
    d7: D7,
    delay: DELAY,
    timing: LcdTiming,
}

impl<RS, EN, D4, D5, D6, D7, DELAY> Lcd<RS, EN, D4, D5, D6, D7, DELAY>
where
    RS: OutputPin,
    EN: OutputPin,
    D4: OutputPin,
    D5: OutputPin,
    D6: OutputPin,
    D7: OutputPin,
    DELAY: DelayUs,
{
    /// Take ownership of the LCD lines with default timing
    #[allow(clippy::too_many_arguments)]
    pub fn new(rs: RS, en: EN, d4: D4, d5: D5, d6: D6, d7: D7, delay: DELAY) -> Self {
        Self {
            rs,
            en,
            d4,
            d5,
            d6,
            d7,
            delay,
            timing: LcdTiming::default(),
        }
    }

    /// Override the bus timing
    pub fn with_timing(mut self, timing: LcdTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Bring the controller up in 4-bit mode
    ///
    /// Ordering is mandatory: 8-bit-mode nudge, 4-bit select, function
    /// set, display on, clear, entry mode, then home the cursor. Each
    /// step waits out the command's execution time.
    pub fn init(&mut self) {
        // All lines idle low before the handshake
        self.rs.set_low();
        self.en.set_low();
        self.present_nibble(0);

        self.delay.delay_us(self.timing.power_on_us);
        self.write(cmd::MODE_8BIT_NUDGE, WriteMode::Command);
        self.delay.delay_us(self.timing.mode_set_us);
        self.write(cmd::MODE_4BIT, WriteMode::Command);
        self.delay.delay_us(self.timing.command_us);
        self.write(cmd::FUNCTION_SET, WriteMode::Command);
        self.delay.delay_us(self.timing.command_us);
        self.write(cmd::DISPLAY_ON, WriteMode::Command);
        self.delay.delay_us(self.timing.command_us);
        self.write(cmd::CLEAR, WriteMode::Command);
        self.delay.delay_us(self.timing.clear_us);
        self.write(cmd::ENTRY_LTR, WriteMode::Command);
        self.delay.delay_us(self.timing.command_us);
        self.set_cursor(0, 0);
    }

    /// Write one byte as two nibble transfers, high half first
    pub fn write(&mut self, value: u8, mode: WriteMode) {
        match mode {
            WriteMode::Command => self.rs.set_low(),
            WriteMode::Data => self.rs.set_high(),
        }

        self.present_nibble(value >> 4);
        self.strobe();
        self.present_nibble(value & 0x0F);
        self.strobe();
    }

    /// Move the cursor to (row, column)
    ///
    /// `row` must be 0 or 1; anything else is a caller-contract
    /// violation. The column is not checked against the visible width.
    pub fn set_cursor(&mut self, row: u8, col: u8) {
        debug_assert!((row as usize) < ROW_BASE.len(), "two-line display");

        let base = ROW_BASE[(row & 1) as usize];
        self.write(cmd::SET_DDRAM | col.wrapping_add(base), WriteMode::Command);
        self.delay.delay_us(self.timing.command_us);
    }

    /// Print text at the current cursor, one data byte per character
    ///
    /// Characters go out in order; there is no wrapping and no clamp
    /// against the physical display width.
    pub fn print(&mut self, text: &str) {
        for &b in text.as_bytes() {
            self.write(b, WriteMode::Data);
        }
    }

    /// Present a nibble on D4..D7, least significant bit on D4
    fn present_nibble(&mut self, nibble: u8) {
        self.d4.set_state(nibble & 0x01 != 0);
        self.d5.set_state(nibble & 0x02 != 0);
        self.d6.set_state(nibble & 0x04 != 0);
        self.d7.set_state(nibble & 0x08 != 0);
    }

    /// Pulse the enable line to latch the presented nibble
    fn strobe(&mut self) {
        self.en.set_high();
        self.delay.delay_us(self.timing.pulse_us);
        self.en.set_low();
        self.delay.delay_us(self.timing.pulse_us);
    }
}

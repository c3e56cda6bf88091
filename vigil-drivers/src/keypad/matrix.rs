//! 4x3 matrix-keypad scanner
//!
//! # Theory of operation
//!
//! Columns drive, rows sense. The rows sit behind external pull-ups, so
//! an idle row reads high. One column at a time is driven low while the
//! other two float as pull-up inputs; that way no two driven columns
//! can fight each other through a pair of pressed keys. A pressed key
//! connects its row to the driven column, so the row reads low during
//! that column's window and names the key.
//!
//! Scan order is deterministic: columns outer loop, rows inner loop,
//! first match wins. Simultaneous presses resolve to whichever pair the
//! scan visits first.

use vigil_core::keypad::{key_at, COLS, ROWS};
use vigil_hal::{DelayUs, FlexPin, InputPin};

/// Scan timing and debounce policy
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanTiming {
    /// Settle time after switching column drive, before sampling rows
    pub settle_us: u32,
    /// Poll interval while waiting for a pressed key to release
    pub release_poll_us: u32,
    /// Bound on release polls; `None` waits as long as the key is held
    pub release_timeout_polls: Option<u32>,
}

impl Default for ScanTiming {
    fn default() -> Self {
        Self {
            settle_us: 500,
            release_poll_us: 100,
            release_timeout_polls: None,
        }
    }
}

/// Matrix keypad over three column lines and four row lines
pub struct MatrixKeypad<C, R, DELAY> {
    cols: [C; COLS],
    rows: [R; ROWS],
    delay: DELAY,
    timing: ScanTiming,
}

impl<C, R, DELAY> MatrixKeypad<C, R, DELAY>
where
    C: FlexPin,
    R: InputPin,
    DELAY: DelayUs,
{
    /// Take ownership of the matrix lines
    ///
    /// Parks every column driven low so a press on any column is
    /// electrically detectable between scans.
    pub fn new(cols: [C; COLS], rows: [R; ROWS], delay: DELAY) -> Self {
        let mut keypad = Self {
            cols,
            rows,
            delay,
            timing: ScanTiming::default(),
        };
        keypad.drive_all_columns_low();
        keypad
    }

    /// Override the scan timing
    pub fn with_timing(mut self, timing: ScanTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Scan for a single pressed key
    ///
    /// Returns `None` when nothing is pressed. On a hit, blocks until
    /// the key's row reads high again (release debounce), so one
    /// physical press yields exactly one logical key event.
    pub fn read_key(&mut self) -> Option<u8> {
        for c in 0..COLS {
            self.select_column(c);
            self.delay.delay_us(self.timing.settle_us);

            for r in 0..ROWS {
                if self.rows[r].is_low() {
                    self.wait_for_release(r);
                    self.drive_all_columns_low();
                    return key_at(r, c);
                }
            }
        }

        self.drive_all_columns_low();
        None
    }

    /// Drive column `active` low; float the others as pull-up inputs
    fn select_column(&mut self, active: usize) {
        for (i, col) in self.cols.iter_mut().enumerate() {
            if i == active {
                col.set_as_output();
                col.set_low();
            } else {
                col.set_as_input_pullup();
            }
        }
    }

    fn drive_all_columns_low(&mut self) {
        for col in self.cols.iter_mut() {
            col.set_as_output();
            col.set_low();
        }
    }

    /// Poll the row until the key releases
    ///
    /// With no poll bound a row stuck low blocks forever; that is the
    /// documented single-key-per-scan contract. The bound exists so
    /// tests can exercise the path without hanging.
    fn wait_for_release(&mut self, row: usize) {
        let mut polls = 0u32;
        while self.rows[row].is_low() {
            if let Some(limit) = self.timing.release_timeout_polls {
                if polls >= limit {
                    break;
                }
            }
            polls = polls.saturating_add(1);
            self.delay.delay_us(self.timing.release_poll_us);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use vigil_hal::OutputPin;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum ColMode {
        OutputLow,
        OutputHigh,
        InputPullup,
    }

    /// Simulated matrix wiring
    struct Matrix {
        cols: [ColMode; COLS],
        /// Key currently held down, if any
        pressed: Option<(usize, usize)>,
        /// Low samples of the pressed row remaining before release
        hold_samples: u32,
    }

    impl Matrix {
        fn idle() -> Self {
            Self {
                cols: [ColMode::OutputLow; COLS],
                pressed: None,
                hold_samples: 0,
            }
        }

        fn press(key_row: usize, key_col: usize, hold_samples: u32) -> Self {
            Self {
                cols: [ColMode::OutputLow; COLS],
                pressed: Some((key_row, key_col)),
                hold_samples,
            }
        }

        /// Sample a row line, advancing the release countdown
        fn sample_row(&mut self, row: usize) -> bool {
            let Some((r, c)) = self.pressed else {
                return true; // pull-up wins
            };

            // The key only pulls its row low while its column sinks
            if r != row || self.cols[c] != ColMode::OutputLow {
                return true;
            }

            if self.hold_samples == 0 {
                self.pressed = None; // key released
                return true;
            }
            self.hold_samples -= 1;
            false
        }
    }

    struct MockCol<'a> {
        matrix: &'a RefCell<Matrix>,
        index: usize,
    }

    impl OutputPin for MockCol<'_> {
        fn set_high(&mut self) {
            self.matrix.borrow_mut().cols[self.index] = ColMode::OutputHigh;
        }

        fn set_low(&mut self) {
            self.matrix.borrow_mut().cols[self.index] = ColMode::OutputLow;
        }

        fn toggle(&mut self) {
            let high = self.is_set_high();
            self.set_state(!high);
        }

        fn is_set_high(&self) -> bool {
            self.matrix.borrow().cols[self.index] == ColMode::OutputHigh
        }
    }

    impl InputPin for MockCol<'_> {
        fn is_high(&self) -> bool {
            self.matrix.borrow().cols[self.index] != ColMode::OutputLow
        }
    }

    impl FlexPin for MockCol<'_> {
        fn set_as_output(&mut self) {
            let mut m = self.matrix.borrow_mut();
            if m.cols[self.index] == ColMode::InputPullup {
                m.cols[self.index] = ColMode::OutputLow;
            }
        }

        fn set_as_input_pullup(&mut self) {
            self.matrix.borrow_mut().cols[self.index] = ColMode::InputPullup;
        }
    }

    struct MockRow<'a> {
        matrix: &'a RefCell<Matrix>,
        index: usize,
    }

    impl InputPin for MockRow<'_> {
        fn is_high(&self) -> bool {
            self.matrix.borrow_mut().sample_row(self.index)
        }
    }

    struct NoDelay;

    impl DelayUs for NoDelay {
        fn delay_us(&mut self, _us: u32) {}
    }

    fn keypad(
        matrix: &RefCell<Matrix>,
    ) -> MatrixKeypad<MockCol<'_>, MockRow<'_>, NoDelay> {
        let cols = [0, 1, 2].map(|index| MockCol { matrix, index });
        let rows = [0, 1, 2, 3].map(|index| MockRow { matrix, index });
        MatrixKeypad::new(cols, rows, NoDelay)
    }

    #[test]
    fn test_every_position_maps_to_its_key() {
        for r in 0..ROWS {
            for c in 0..COLS {
                let matrix = RefCell::new(Matrix::press(r, c, 2));
                let mut keypad = keypad(&matrix);

                assert_eq!(keypad.read_key(), key_at(r, c), "key at ({r}, {c})");
            }
        }
    }

    #[test]
    fn test_no_press_returns_none() {
        let matrix = RefCell::new(Matrix::idle());
        let mut keypad = keypad(&matrix);

        assert_eq!(keypad.read_key(), None);
    }

    #[test]
    fn test_release_wait_consumes_the_press() {
        let matrix = RefCell::new(Matrix::press(2, 1, 5));
        let mut keypad = keypad(&matrix);

        assert_eq!(keypad.read_key(), Some(b'8'));
        assert!(matrix.borrow().pressed.is_none(), "press consumed");

        // Idempotence: nothing new pressed, so the next scan is empty
        assert_eq!(keypad.read_key(), None);
    }

    #[test]
    fn test_stuck_row_respects_poll_bound() {
        let matrix = RefCell::new(Matrix::press(0, 0, u32::MAX));
        let mut keypad = keypad(&matrix).with_timing(ScanTiming {
            release_timeout_polls: Some(10),
            ..ScanTiming::default()
        });

        // The press was real; only the release wait is abandoned
        assert_eq!(keypad.read_key(), Some(b'3'));
    }

    #[test]
    fn test_columns_parked_low_after_scan() {
        let matrix = RefCell::new(Matrix::press(1, 2, 1));
        let mut keypad = keypad(&matrix);

        keypad.read_key();
        assert_eq!(matrix.borrow().cols, [ColMode::OutputLow; COLS]);

        keypad.read_key();
        assert_eq!(matrix.borrow().cols, [ColMode::OutputLow; COLS]);
    }
}

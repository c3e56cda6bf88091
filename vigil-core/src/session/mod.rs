//! Code-entry session controller
//!
//! Accumulates keypad digits into a fixed-capacity buffer and decides
//! where each keystroke should echo on the display. The buffer holds at
//! most `N - 1` digits; extra keystrokes are dropped silently. The
//! submit key ends the session and resets the length. The collected
//! digits are not compared against a stored code here; authentication
//! is a separate concern this controller deliberately knows nothing
//! about.

use heapless::Vec;

use crate::keypad::SUBMIT_KEY;

/// Display row where keystrokes echo
pub const ECHO_ROW: u8 = 1;

/// Display column of the first echoed keystroke, after the `Code: ` label
pub const ECHO_ORIGIN_COL: u8 = 8;

/// What one keystroke did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionEvent<const N: usize> {
    /// Digit stored
    Accepted,
    /// Buffer already held `N - 1` digits; keystroke dropped
    Dropped,
    /// Submit key seen; the captured code, session reset for the next entry
    Submitted(Vec<u8, N>),
}

/// Echo position and session effect of one keystroke
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyOutcome<const N: usize> {
    /// Where the pressed key should echo: (row, column)
    pub echo_at: (u8, u8),
    /// What happened to the buffer
    pub event: SessionEvent<N>,
}

/// Code-entry session over a fixed-capacity buffer
///
/// Owned exclusively by the polling loop; never touched from the
/// motion path.
#[derive(Debug, Default)]
pub struct InputSession<const N: usize> {
    buf: Vec<u8, N>,
}

impl<const N: usize> InputSession<N> {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Digits entered so far
    pub fn entered(&self) -> &[u8] {
        &self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Feed one keypad key into the session
    ///
    /// Every key echoes at the position derived from the current
    /// length, including keys dropped for lack of room.
    pub fn on_key(&mut self, key: u8) -> KeyOutcome<N> {
        let echo_at = (ECHO_ROW, ECHO_ORIGIN_COL + self.buf.len() as u8);

        let event = if key == SUBMIT_KEY {
            let code = self.buf.clone();
            self.buf.clear();
            SessionEvent::Submitted(code)
        } else if self.buf.len() + 1 < N {
            // len < N - 1 always leaves room, so the push cannot fail
            let _ = self.buf.push(key);
            SessionEvent::Accepted
        } else {
            SessionEvent::Dropped
        };

        KeyOutcome { echo_at, event }
    }
}

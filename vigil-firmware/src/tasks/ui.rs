//! Keypad polling and display task
//!
//! The cooperative main loop: bring the LCD up, print the banner, then
//! poll the keypad and echo every keystroke through the input session.
//! An alarm transition overlays a banner on the top line - drawn here,
//! in task context, never from the motion path.

use defmt::*;
use embassy_time::Timer;

use vigil_core::session::{InputSession, SessionEvent};
use vigil_drivers::keypad::MatrixKeypad;
use vigil_drivers::lcd::{Lcd, WriteMode};
use vigil_hal_rp2040::delay::SpinDelay;
use vigil_hal_rp2040::gpio::{RpFlex, RpInput, RpOutput};

use crate::channels::ALARM_STATE;

/// Entry buffer capacity; holds up to `CODE_CAPACITY - 1` digits
const CODE_CAPACITY: usize = 8;

/// Pause between keypad scans, keeping the executor cooperative
const POLL_INTERVAL_MS: u64 = 10;

type UiLcd = Lcd<
    RpOutput<'static>,
    RpOutput<'static>,
    RpOutput<'static>,
    RpOutput<'static>,
    RpOutput<'static>,
    RpOutput<'static>,
    SpinDelay,
>;

type UiKeypad = MatrixKeypad<RpFlex<'static>, RpInput<'static>, SpinDelay>;

/// UI task - banner, keypad polling, keystroke echo
#[embassy_executor::task]
pub async fn ui_task(mut lcd: UiLcd, mut keypad: UiKeypad) {
    info!("UI task started");

    lcd.init();
    lcd.set_cursor(0, 0);
    lcd.print("Home Security");
    lcd.set_cursor(1, 2);
    lcd.print("Code: ");
    info!("Banner displayed");

    let mut session: InputSession<CODE_CAPACITY> = InputSession::new();
    let mut alarm_shown = false;

    loop {
        if !alarm_shown {
            if let Some(state) = ALARM_STATE.try_take() {
                if state.is_sounding() {
                    lcd.set_cursor(0, 0);
                    lcd.print("!! ALARM !!     ");
                    alarm_shown = true;
                }
            }
        }

        if let Some(key) = keypad.read_key() {
            let outcome = session.on_key(key);

            let (row, col) = outcome.echo_at;
            lcd.set_cursor(row, col);
            lcd.write(key, WriteMode::Data);

            match outcome.event {
                SessionEvent::Submitted(code) => {
                    // The digits themselves stay out of the log
                    info!("Code entry finished: {} digits", code.len());
                }
                SessionEvent::Dropped => debug!("Entry buffer full, key dropped"),
                SessionEvent::Accepted => debug!("Digit accepted"),
            }
        }

        Timer::after_millis(POLL_INTERVAL_MS).await;
    }
}

//! Motion-sensor watch task
//!
//! Waits for a falling edge on the PIR line, steps the alarm state
//! machine and fires the siren. Re-arming the edge wait also clears
//! the pending-edge latch, so a second physical trigger while the
//! siren is already sounding is absorbed as a no-op.
//!
//! Runs on the interrupt-mode executor, above the thread-mode UI
//! task, so the siren fires even while the UI loop is blocked in a
//! keypad release wait. The tone burst inside `Siren::trigger` spins
//! at that priority, exactly as long as `SirenTone` dictates, and the
//! UI resumes where it was preempted.
//!
//! This task is the only writer of the siren line and never touches
//! display or keypad pins; the UI task owns those. Keep it that way -
//! the absence of any locking around the peripherals depends on it.

use defmt::*;
use embassy_rp::gpio::Input;

use vigil_core::alarm::{AlarmState, Event};
use vigil_drivers::siren::Siren;
use vigil_hal_rp2040::delay::SpinDelay;
use vigil_hal_rp2040::gpio::RpOutput;

use crate::channels::ALARM_STATE;

/// Motion task - edge-triggered alarm latch
#[embassy_executor::task]
pub async fn motion_task(
    mut pir: Input<'static>,
    mut siren: Siren<RpOutput<'static>, SpinDelay>,
) {
    info!("Motion task started");

    let mut state = AlarmState::Idle;

    loop {
        pir.wait_for_falling_edge().await;

        let next = state.transition(Event::MotionDetected);
        if next != state {
            warn!("Motion detected, sounding alarm");
            state = next;
            ALARM_STATE.signal(state);
            siren.trigger();
        } else {
            // Already latched; observable effect of a re-trigger is nil
            debug!("Motion edge while already sounding");
        }
    }
}

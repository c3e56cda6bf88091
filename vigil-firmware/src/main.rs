//! Vigil - Home Security Alarm Firmware
//!
//! Main firmware binary for RP2040-based alarm panels: a 16x2
//! character LCD, a 4x3 matrix keypad for access-code entry, and a PIR
//! motion sensor that latches the siren on.
//!
//! Two tasks share nothing but a signal: the UI task owns the display
//! and keypad lines and runs the cooperative polling loop; the motion
//! task owns the siren line and waits on the sensor edge.
//!
//! The motion task runs on an interrupt-mode executor at a higher
//! priority than the thread-mode executor, so a sensor edge sounds
//! the siren even while the UI task is blocked inside a keypad scan
//! waiting for a held key to release.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::gpio::{Flex, Input, Level, Output, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use {defmt_rtt as _, panic_probe as _};

use vigil_drivers::keypad::MatrixKeypad;
use vigil_drivers::lcd::Lcd;
use vigil_drivers::siren::Siren;
use vigil_hal_rp2040::delay::SpinDelay;
use vigil_hal_rp2040::gpio::{RpFlex, RpInput, RpOutput};

mod channels;
mod tasks;

/// High-priority executor for the motion path, driven by a software
/// interrupt so its tasks preempt the thread-mode UI loop.
static MOTION_EXECUTOR: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_0() {
    MOTION_EXECUTOR.on_interrupt()
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Vigil firmware starting...");

    // The RP2040 watchdog is stopped out of reset and nothing here
    // arms it, so bring-up cannot be reset mid-sequence.
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // LCD output group: register select, enable, four data lines
    let lcd = Lcd::new(
        RpOutput::new(Output::new(p.PIN_2, Level::Low)), // RS
        RpOutput::new(Output::new(p.PIN_3, Level::Low)), // EN
        RpOutput::new(Output::new(p.PIN_4, Level::Low)), // D4
        RpOutput::new(Output::new(p.PIN_5, Level::Low)), // D5
        RpOutput::new(Output::new(p.PIN_6, Level::Low)), // D6
        RpOutput::new(Output::new(p.PIN_7, Level::Low)), // D7
        SpinDelay,
    );
    info!("LCD lines configured");

    // Keypad: three direction-switched columns, four pulled-up rows
    let cols = [
        RpFlex::new(Flex::new(p.PIN_10)),
        RpFlex::new(Flex::new(p.PIN_11)),
        RpFlex::new(Flex::new(p.PIN_12)),
    ];
    let rows = [
        RpInput::new(Input::new(p.PIN_14, Pull::Up)),
        RpInput::new(Input::new(p.PIN_15, Pull::Up)),
        RpInput::new(Input::new(p.PIN_16, Pull::Up)),
        RpInput::new(Input::new(p.PIN_17, Pull::Up)),
    ];
    let keypad = MatrixKeypad::new(cols, rows, SpinDelay);
    info!("Keypad matrix configured");

    // Combined buzzer/LED line, quiet until the alarm trips
    let siren = Siren::new(RpOutput::new(Output::new(p.PIN_20, Level::Low)), SpinDelay);

    // PIR motion sensor; the task arms the falling-edge wait
    let pir = Input::new(p.PIN_22, Pull::Up);
    info!("Siren and motion sensor configured");

    // Motion path gets its own executor above thread priority; the UI
    // scan may busy-wait on a held key and must not delay the siren.
    interrupt::SWI_IRQ_0.set_priority(Priority::P2);
    let motion_spawner = MOTION_EXECUTOR.start(interrupt::SWI_IRQ_0);
    motion_spawner.spawn(tasks::motion_task(pir, siren)).unwrap();

    spawner.spawn(tasks::ui_task(lcd, keypad)).unwrap();

    info!("All tasks spawned, firmware running");

    // All work happens in the spawned tasks
    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}

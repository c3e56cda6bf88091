//! Character LCD driver

pub mod hd44780;

pub use hd44780::{Lcd, LcdTiming, WriteMode};

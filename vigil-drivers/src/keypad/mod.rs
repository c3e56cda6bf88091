//! Matrix keypad scanning

pub mod matrix;

pub use matrix::{MatrixKeypad, ScanTiming};

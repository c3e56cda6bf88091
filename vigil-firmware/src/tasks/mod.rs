//! Embassy async tasks
//!
//! Each task runs independently; the only shared state is the alarm
//! signal in `channels`.

pub mod motion;
pub mod ui;

pub use motion::motion_task;
pub use ui::ui_task;

//! Events that trigger alarm state transitions

/// Events observed by the alarm controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Falling edge seen on the motion-sensor line
    MotionDetected,
}

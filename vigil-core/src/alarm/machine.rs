//! Alarm state machine definition
//!
//! The alarm is a one-way latch: once motion has been seen, the siren
//! stays on until power is cycled. An intrusion alarm fails safe toward
//! "stay alarmed", so there is no silencing transition.

use super::events::Event;

/// Machine states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmState {
    /// Armed and quiet
    #[default]
    Idle,
    /// Siren latched on; terminal
    Sounding,
}

impl AlarmState {
    /// Check if the siren should be on
    pub fn is_sounding(&self) -> bool {
        matches!(self, AlarmState::Sounding)
    }

    /// Check if this state has no outgoing transitions
    pub fn is_terminal(&self) -> bool {
        matches!(self, AlarmState::Sounding)
    }

    /// Process an event and return the next state
    ///
    /// This is the core state transition logic.
    pub fn transition(self, event: Event) -> Self {
        use AlarmState::*;
        use Event::*;

        match (self, event) {
            (Idle, MotionDetected) => Sounding,

            // Sounding absorbs everything; a second motion edge is a no-op
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_to_sounding() {
        let state = AlarmState::Idle;
        let next = state.transition(Event::MotionDetected);
        assert_eq!(next, AlarmState::Sounding);
    }

    #[test]
    fn test_retrigger_is_noop() {
        let state = AlarmState::Sounding;
        let next = state.transition(Event::MotionDetected);
        assert_eq!(next, AlarmState::Sounding);
    }

    #[test]
    fn test_no_path_back_to_idle() {
        // Every event applied to Sounding must leave it Sounding
        let events = [Event::MotionDetected];

        for event in events {
            let next = AlarmState::Sounding.transition(event);
            assert!(next.is_sounding());
        }
    }

    #[test]
    fn test_predicates() {
        assert!(!AlarmState::Idle.is_sounding());
        assert!(!AlarmState::Idle.is_terminal());
        assert!(AlarmState::Sounding.is_sounding());
        assert!(AlarmState::Sounding.is_terminal());
    }

    #[test]
    fn test_default_is_idle() {
        assert_eq!(AlarmState::default(), AlarmState::Idle);
    }
}

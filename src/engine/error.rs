//! Errors returned by [`Fsm::trigger`](super::Fsm::trigger).

use std::error::Error as StdError;
use thiserror::Error;

/// Errors that can occur when triggering an event
#[derive(Debug, Error)]
pub enum TriggerError {
    #[error("Event not found: '{event}'")]
    EventNotFound { event: String },

    #[error("No transition for event '{event}' from current state '{state}'")]
    NoTransitionForState { event: String, state: String },

    #[error("Another transition is in progress, event '{event}' rejected")]
    TransitionInProgress { event: String },

    /// The callback ran and reported failure. State changes it made, and
    /// the auto-advance that followed, are kept.
    #[error("Callback for event '{event}' failed: {source}")]
    CallbackFailed {
        event: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl TriggerError {
    /// The event the failed trigger was fired with.
    pub fn event(&self) -> &str {
        match self {
            Self::EventNotFound { event }
            | Self::NoTransitionForState { event, .. }
            | Self::TransitionInProgress { event }
            | Self::CallbackFailed { event, .. } => event,
        }
    }

    /// True when the machine was never touched: the event was rejected
    /// before any callback ran.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::CallbackFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_event_and_state() {
        let err = TriggerError::NoTransitionForState {
            event: "on".to_string(),
            state: "stopped".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("'on'"));
        assert!(message.contains("'stopped'"));
    }

    #[test]
    fn callback_failure_exposes_source() {
        let err = TriggerError::CallbackFailed {
            event: "open".to_string(),
            source: "jammed".into(),
        };

        assert_eq!(err.source().map(|s| s.to_string()), Some("jammed".to_string()));
        assert!(!err.is_rejection());
        assert_eq!(err.event(), "open");
    }

    #[test]
    fn lookup_failures_are_rejections() {
        let err = TriggerError::EventNotFound {
            event: "nope".to_string(),
        };
        assert!(err.is_rejection());
        assert_eq!(err.event(), "nope");
    }
}

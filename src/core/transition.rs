//! Transition descriptors.

use super::state::State;
use serde::{Deserialize, Serialize};

/// One permitted edge of the machine: firing `event` while in `from`
/// moves the machine to `to`.
///
/// Transitions are plain data. The callback attached to an edge lives in
/// the [`Table`](super::Table), not here, so transitions can be loaded
/// from JSON and compared freely.
///
/// # Example
///
/// ```rust
/// use switchyard::core::Transition;
///
/// let t = Transition::new("on", "idle".to_string(), "running".to_string());
/// assert_eq!(t.event, "on");
/// assert_eq!(t.from, "idle");
/// assert_eq!(t.to, "running");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State> {
    /// The event that fires this edge
    pub event: String,
    /// The state the machine must be in
    pub from: S,
    /// The state the machine moves to
    pub to: S,
}

impl<S: State> Transition<S> {
    pub fn new(event: impl Into<String>, from: S, to: S) -> Self {
        Self {
            event: event.into(),
            from,
            to,
        }
    }
}

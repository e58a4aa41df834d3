//! Core State trait for state machine states.
//!
//! All state machine states must implement this trait, which provides
//! pure methods for inspecting state properties without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// States are used as lookup keys in the transition graph and are compared
/// after a callback runs to decide whether the machine auto-advances.
///
/// # Required Traits
///
/// - `Clone`: the engine snapshots the current state before running callbacks
/// - `Eq` + `Hash`: states key the per-event edge maps
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: transition definitions can be loaded from JSON
///
/// # Example
///
/// ```rust
/// use switchyard::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Closed,
///     Open,
///     Locked,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///             Self::Locked => "Locked",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Locked.name(), "Locked");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Plain string states, for tables assembled at runtime.
impl State for String {
    fn name(&self) -> &str {
        self
    }
}

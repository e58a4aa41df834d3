//! State machine that fires events against a transition graph.

use crate::core::{State, Table, Transition, TransitionGraph};
use crate::engine::error::TriggerError;
use crate::engine::guard::TriggerGuard;
use parking_lot::Mutex;

/// A table-driven finite state machine.
///
/// The graph is fixed at construction. The current state is the only
/// mutable field and is changed by [`Fsm::trigger`], or directly by a
/// callback through [`Fsm::set_state`].
///
/// A guarded machine serializes whole `trigger` calls through a
/// single-slot guard that never waits: a call made while another is in
/// flight fails with [`TriggerError::TransitionInProgress`], including a
/// nested call made from a callback on the same machine. An unguarded
/// machine performs no coordination between concurrent callers.
///
/// # Example
///
/// ```rust
/// use switchyard::core::Table;
/// use switchyard::engine::Fsm;
///
/// let table: Table<String> = Table::new()
///     .with("on", "idle".to_string(), "running".to_string())
///     .with("off", "running".to_string(), "idle".to_string());
///
/// let fsm = Fsm::new(false, "idle".to_string(), &table);
///
/// fsm.trigger("on").unwrap();
/// assert_eq!(fsm.state(), "running");
///
/// assert!(fsm.trigger("on").is_err());
/// assert_eq!(fsm.state(), "running");
/// ```
pub struct Fsm<S: State> {
    guard: Option<TriggerGuard>,
    state: Mutex<S>,
    graph: TransitionGraph<S>,
}

impl<S: State> Fsm<S> {
    /// Create a machine in `initial`, building its graph from `table`.
    ///
    /// Never fails and does not modify the table. Colliding
    /// `(event, from)` entries keep the first declaration; use
    /// [`FsmBuilder::strict`](crate::builder::FsmBuilder::strict) to
    /// reject them instead.
    pub fn new(guarded: bool, initial: S, table: &Table<S>) -> Self {
        Self::from_graph(guarded, initial, TransitionGraph::build(table))
    }

    pub(crate) fn from_graph(guarded: bool, initial: S, graph: TransitionGraph<S>) -> Self {
        Self {
            guard: guarded.then(TriggerGuard::new),
            state: Mutex::new(initial),
            graph,
        }
    }

    /// Current state.
    pub fn state(&self) -> S {
        self.state.lock().clone()
    }

    /// Replace the current state without consulting the graph.
    ///
    /// Called from a callback, this overrides the destination of the
    /// transition that is firing.
    pub fn set_state(&self, state: S) {
        *self.state.lock() = state;
    }

    pub fn is_guarded(&self) -> bool {
        self.guard.is_some()
    }

    /// Check if machine is in a final state
    pub fn is_final(&self) -> bool {
        self.state.lock().is_final()
    }

    /// Whether `event` has an edge from the current state.
    pub fn can_trigger(&self, event: &str) -> bool {
        let state = self.state.lock();
        self.graph.edge(event, &state).is_some()
    }

    pub fn graph(&self) -> &TransitionGraph<S> {
        &self.graph
    }

    /// Fire `event` from the current state.
    ///
    /// On a match the edge's callback (if any) runs with this machine and
    /// the matched transition. Afterwards the machine moves to the edge's
    /// destination, unless the state no longer equals the state observed
    /// before the callback ran; in that case whatever the callback left
    /// in place is kept. The advance also happens when the callback
    /// returns an error or panics.
    ///
    /// # Errors
    ///
    /// - [`TriggerError::TransitionInProgress`] if the machine is guarded
    ///   and another `trigger` call holds the guard
    /// - [`TriggerError::EventNotFound`] if no edge uses `event`
    /// - [`TriggerError::NoTransitionForState`] if `event` has no edge
    ///   from the current state
    /// - [`TriggerError::CallbackFailed`] if the callback returned an error
    pub fn trigger(&self, event: &str) -> Result<(), TriggerError> {
        // Declared first so the slot is released after the advance below.
        let _permit = match &self.guard {
            Some(guard) => match guard.try_acquire() {
                Some(permit) => Some(permit),
                None => {
                    tracing::debug!(event, "trigger rejected, transition in progress");
                    return Err(TriggerError::TransitionInProgress {
                        event: event.to_string(),
                    });
                }
            },
            None => None,
        };

        let Some(edges) = self.graph.edges_for(event) else {
            tracing::debug!(event, "trigger rejected, unknown event");
            return Err(TriggerError::EventNotFound {
                event: event.to_string(),
            });
        };

        let starting = self.state();
        let Some(edge) = edges.get(&starting) else {
            tracing::debug!(
                event,
                state = starting.name(),
                "trigger rejected, no transition from current state"
            );
            return Err(TriggerError::NoTransitionForState {
                event: event.to_string(),
                state: starting.name().to_string(),
            });
        };

        let advance = AutoAdvance {
            fsm: self,
            transition: edge.transition(),
            starting,
        };

        let outcome = match edge.callback() {
            Some(callback) => callback(self, edge.transition()),
            None => Ok(()),
        };

        drop(advance);

        outcome.map_err(|source| TriggerError::CallbackFailed {
            event: event.to_string(),
            source,
        })
    }
}

/// Moves the machine to the transition's destination when dropped, unless
/// the state changed since `starting` was observed.
struct AutoAdvance<'a, S: State> {
    fsm: &'a Fsm<S>,
    transition: &'a Transition<S>,
    starting: S,
}

impl<S: State> Drop for AutoAdvance<'_, S> {
    fn drop(&mut self) {
        let mut state = self.fsm.state.lock();
        if *state == self.starting {
            *state = self.transition.to.clone();
            tracing::debug!(
                event = %self.transition.event,
                from = self.starting.name(),
                to = self.transition.to.name(),
                "transition applied"
            );
        } else {
            tracing::debug!(
                event = %self.transition.event,
                from = self.starting.name(),
                to = self.transition.to.name(),
                actual = state.name(),
                "callback changed state, destination not applied"
            );
        }
    }
}

impl<S: State> std::fmt::Debug for Fsm<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fsm")
            .field("state", &*self.state.lock())
            .field("guarded", &self.is_guarded())
            .field("graph", &self.graph)
            .finish()
    }
}

//! Immutable lookup structure derived from a transition table.

use super::state::State;
use super::table::{Callback, Table, TableEntry};
use super::transition::Transition;
use crate::builder::BuildError;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

/// The single edge selected for an `(event, from)` pair.
#[derive(Clone)]
pub struct Edge<S: State> {
    transition: Transition<S>,
    callback: Option<Callback<S>>,
}

impl<S: State> Edge<S> {
    pub fn transition(&self) -> &Transition<S> {
        &self.transition
    }

    pub fn callback(&self) -> Option<&Callback<S>> {
        self.callback.as_ref()
    }

    /// Destination declared by the table.
    pub fn to(&self) -> &S {
        &self.transition.to
    }
}

impl<S: State> fmt::Debug for Edge<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Edge")
            .field("transition", &self.transition)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

/// `event -> from-state -> edge`, built once and never mutated.
///
/// When a table declares more than one entry for the same `(event, from)`
/// pair, [`TransitionGraph::build`] keeps the first one in declaration
/// order and logs the rest; [`TransitionGraph::try_build`] rejects the
/// table instead.
///
/// # Example
///
/// ```rust
/// use switchyard::core::{Table, TransitionGraph};
///
/// let table: Table<String> = Table::new()
///     .with("on", "idle".to_string(), "running".to_string())
///     .with("on", "idle".to_string(), "crashed".to_string());
///
/// let graph = TransitionGraph::build(&table);
/// let edge = graph.edge("on", &"idle".to_string()).unwrap();
/// assert_eq!(edge.to(), "running");
///
/// assert!(TransitionGraph::try_build(&table).is_err());
/// ```
pub struct TransitionGraph<S: State> {
    edges: HashMap<String, HashMap<S, Edge<S>>>,
}

impl<S: State> TransitionGraph<S> {
    /// Build the graph, keeping the first entry for each `(event, from)`.
    ///
    /// Never fails; an empty table yields a graph that knows no events.
    pub fn build(table: &Table<S>) -> Self {
        let mut graph = Self {
            edges: HashMap::new(),
        };
        for entry in table.iter() {
            if !graph.insert(entry) {
                tracing::warn!(
                    event = %entry.transition.event,
                    from = entry.transition.from.name(),
                    to = entry.transition.to.name(),
                    "duplicate transition ignored, keeping first declaration"
                );
            }
        }
        graph
    }

    /// Build the graph, rejecting tables with colliding `(event, from)` pairs.
    pub fn try_build(table: &Table<S>) -> Result<Self, BuildError> {
        let mut graph = Self {
            edges: HashMap::new(),
        };
        for entry in table.iter() {
            if !graph.insert(entry) {
                return Err(BuildError::DuplicateTransition {
                    event: entry.transition.event.clone(),
                    from: entry.transition.from.name().to_string(),
                });
            }
        }
        Ok(graph)
    }

    /// Returns `false` if the slot was already taken.
    fn insert(&mut self, entry: &TableEntry<S>) -> bool {
        let from_map = self
            .edges
            .entry(entry.transition.event.clone())
            .or_default();

        match from_map.entry(entry.transition.from.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Edge {
                    transition: entry.transition.clone(),
                    callback: entry.callback.clone(),
                });
                true
            }
        }
    }

    /// All edges for an event, keyed by source state.
    pub fn edges_for(&self, event: &str) -> Option<&HashMap<S, Edge<S>>> {
        self.edges.get(event)
    }

    pub fn edge(&self, event: &str, from: &S) -> Option<&Edge<S>> {
        self.edges.get(event).and_then(|from_map| from_map.get(from))
    }

    pub fn contains_event(&self, event: &str) -> bool {
        self.edges.contains_key(event)
    }

    /// Known event names, in no particular order.
    pub fn events(&self) -> impl Iterator<Item = &str> {
        self.edges.keys().map(String::as_str)
    }

    /// Number of edges.
    pub fn len(&self) -> usize {
        self.edges.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl<S: State> fmt::Debug for TransitionGraph<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionGraph")
            .field("edges", &self.edges)
            .finish()
    }
}

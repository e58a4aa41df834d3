//! Transition tables: the caller-supplied definition of a machine.

use super::state::State;
use super::transition::Transition;
use crate::builder::BuildError;
use crate::engine::Fsm;
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Outcome of a transition callback.
///
/// Any error type can be returned with `?`, including a [`TriggerError`]
/// from a nested trigger on the same machine.
///
/// [`TriggerError`]: crate::engine::TriggerError
pub type CallbackResult = Result<(), Box<dyn Error + Send + Sync>>;

/// Side effect run while a transition fires.
///
/// Receives the machine the transition belongs to and the matched
/// transition. Callbacks may read or replace the machine's state, or
/// trigger further events on it.
pub type Callback<S> = Arc<dyn Fn(&Fsm<S>, &Transition<S>) -> CallbackResult + Send + Sync>;

/// A transition paired with its optional callback.
#[derive(Clone)]
pub struct TableEntry<S: State> {
    pub transition: Transition<S>,
    pub callback: Option<Callback<S>>,
}

impl<S: State> fmt::Debug for TableEntry<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableEntry")
            .field("transition", &self.transition)
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

/// Ordered set of transitions and their callbacks.
///
/// Entries keep their declaration order and are never deduplicated here;
/// collisions on `(event, from)` are resolved when the
/// [`TransitionGraph`](super::TransitionGraph) is built.
///
/// # Example
///
/// ```rust
/// use switchyard::core::Table;
///
/// let table: Table<String> = Table::new()
///     .with("on", "idle".to_string(), "running".to_string())
///     .with_callback("off", "running".to_string(), "idle".to_string(), |_fsm, t| {
///         println!("stopping via {}", t.event);
///         Ok(())
///     });
///
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Table<S: State> {
    entries: Vec<TableEntry<S>>,
}

impl<S: State> Default for Table<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> Table<S> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Build a table of callback-free entries.
    pub fn from_transitions<I>(transitions: I) -> Self
    where
        I: IntoIterator<Item = Transition<S>>,
    {
        Self {
            entries: transitions
                .into_iter()
                .map(|transition| TableEntry {
                    transition,
                    callback: None,
                })
                .collect(),
        }
    }

    /// Load callback-free entries from a JSON array of
    /// `{ "event", "from", "to" }` objects.
    ///
    /// Callbacks can be bound afterwards with [`Table::attach`].
    ///
    /// ```rust
    /// use switchyard::core::Table;
    ///
    /// let table: Table<String> = Table::from_json(
    ///     r#"[
    ///         { "event": "coin", "from": "locked", "to": "unlocked" },
    ///         { "event": "push", "from": "unlocked", "to": "locked" }
    ///     ]"#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        let transitions: Vec<Transition<S>> = serde_json::from_str(json)?;
        Ok(Self::from_transitions(transitions))
    }

    /// Append an entry without a callback.
    pub fn with(mut self, event: impl Into<String>, from: S, to: S) -> Self {
        self.insert(Transition::new(event, from, to), None);
        self
    }

    /// Append an entry.
    pub fn insert(&mut self, transition: Transition<S>, callback: Option<Callback<S>>) {
        self.entries.push(TableEntry {
            transition,
            callback,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &TableEntry<S>> {
        self.entries.iter()
    }
}

impl<S: State + 'static> Table<S> {
    /// Append an entry with a callback.
    pub fn with_callback<F>(mut self, event: impl Into<String>, from: S, to: S, callback: F) -> Self
    where
        F: Fn(&Fsm<S>, &Transition<S>) -> CallbackResult + Send + Sync + 'static,
    {
        self.insert(Transition::new(event, from, to), Some(Arc::new(callback)));
        self
    }

    /// Bind a callback to the first entry declared for `(event, from)`.
    ///
    /// Returns `false` if no such entry exists. An existing callback on
    /// that entry is replaced.
    pub fn attach<F>(&mut self, event: &str, from: &S, callback: F) -> bool
    where
        F: Fn(&Fsm<S>, &Transition<S>) -> CallbackResult + Send + Sync + 'static,
    {
        match self
            .entries
            .iter_mut()
            .find(|e| e.transition.event == event && e.transition.from == *from)
        {
            Some(entry) => {
                entry.callback = Some(Arc::new(callback));
                true
            }
            None => false,
        }
    }
}

impl<S: State> Extend<TableEntry<S>> for Table<S> {
    fn extend<I: IntoIterator<Item = TableEntry<S>>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(name: &str) -> String {
        name.to_string()
    }

    #[test]
    fn entries_keep_declaration_order() {
        let table: Table<String> = Table::new()
            .with("a", s("x"), s("y"))
            .with("b", s("y"), s("z"))
            .with("a", s("x"), s("z"));

        let events: Vec<&str> = table.iter().map(|e| e.transition.event.as_str()).collect();
        assert_eq!(events, vec!["a", "b", "a"]);
    }

    #[test]
    fn duplicates_are_not_collapsed() {
        let table: Table<String> = Table::new()
            .with("go", s("a"), s("b"))
            .with("go", s("a"), s("c"));

        assert_eq!(table.len(), 2);
    }

    #[test]
    fn with_callback_stores_callback() {
        let table: Table<String> =
            Table::new().with_callback("go", s("a"), s("b"), |_fsm, _t| Ok(()));

        let entry = table.iter().next().unwrap();
        assert!(entry.callback.is_some());
    }

    #[test]
    fn from_json_loads_transitions() {
        let table: Table<String> = Table::from_json(
            r#"[{ "event": "on", "from": "idle", "to": "running" }]"#,
        )
        .unwrap();

        let entry = table.iter().next().unwrap();
        assert_eq!(entry.transition, Transition::new("on", s("idle"), s("running")));
        assert!(entry.callback.is_none());
    }

    #[test]
    fn from_json_rejects_malformed_definitions() {
        let result = Table::<String>::from_json(r#"[{ "event": "on", "from": "idle" }]"#);
        assert!(matches!(result, Err(BuildError::InvalidDefinition(_))));
    }

    #[test]
    fn attach_binds_first_matching_entry() {
        let mut table: Table<String> = Table::new()
            .with("go", s("a"), s("b"))
            .with("go", s("a"), s("c"));

        assert!(table.attach("go", &s("a"), |_fsm, _t| Ok(())));

        let callbacks: Vec<bool> = table.iter().map(|e| e.callback.is_some()).collect();
        assert_eq!(callbacks, vec![true, false]);
    }

    #[test]
    fn attach_reports_missing_entry() {
        let mut table: Table<String> = Table::new().with("go", s("a"), s("b"));

        assert!(!table.attach("go", &s("b"), |_fsm, _t| Ok(())));
        assert!(!table.attach("stop", &s("a"), |_fsm, _t| Ok(())));
    }

    #[test]
    fn debug_output_hides_callback_body() {
        let table: Table<String> =
            Table::new().with_callback("go", s("a"), s("b"), |_fsm, _t| Ok(()));

        let rendered = format!("{:?}", table);
        assert!(rendered.contains("has_callback: true"));
    }
}

//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{CallbackResult, State, Table, Transition, TransitionGraph};
use crate::engine::Fsm;

/// Builder for constructing state machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use switchyard::builder::FsmBuilder;
///
/// let fsm = FsmBuilder::new()
///     .initial("locked".to_string())
///     .guarded(true)
///     .strict(true)
///     .transition("coin", "locked".to_string(), "unlocked".to_string())
///     .on("push", "unlocked".to_string(), "locked".to_string(), |_fsm, _t| {
///         println!("click");
///         Ok(())
///     })
///     .build()
///     .unwrap();
///
/// fsm.trigger("coin").unwrap();
/// assert_eq!(fsm.state(), "unlocked");
/// ```
pub struct FsmBuilder<S: State> {
    initial: Option<S>,
    guarded: bool,
    strict: bool,
    table: Table<S>,
}

impl<S: State + 'static> FsmBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            guarded: false,
            strict: false,
            table: Table::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Reject overlapping triggers with a single-slot guard.
    pub fn guarded(mut self, guarded: bool) -> Self {
        self.guarded = guarded;
        self
    }

    /// Fail the build when two entries share an `(event, from)` pair,
    /// instead of keeping the first.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Add a transition without a callback.
    pub fn transition(mut self, event: impl Into<String>, from: S, to: S) -> Self {
        self.table.insert(Transition::new(event, from, to), None);
        self
    }

    /// Add a transition with a callback.
    pub fn on<F>(mut self, event: impl Into<String>, from: S, to: S, callback: F) -> Self
    where
        F: Fn(&Fsm<S>, &Transition<S>) -> CallbackResult + Send + Sync + 'static,
    {
        self.table = self.table.with_callback(event, from, to, callback);
        self
    }

    /// Append every entry of an existing table.
    pub fn table(mut self, table: Table<S>) -> Self {
        self.table.extend(table.iter().cloned());
        self
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing or, in strict
    /// mode, if the table declares an `(event, from)` pair twice.
    pub fn build(self) -> Result<Fsm<S>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let graph = if self.strict {
            TransitionGraph::try_build(&self.table)?
        } else {
            TransitionGraph::build(&self.table)
        };

        Ok(Fsm::from_graph(self.guarded, initial, graph))
    }
}

impl<S: State + 'static> Default for FsmBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Idle,
        Running,
        Done,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Running => "Running",
                Self::Done => "Done",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Done)
        }
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = FsmBuilder::<TestState>::new().build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_allows_empty_table() {
        let fsm = FsmBuilder::new().initial(TestState::Idle).build().unwrap();

        assert!(fsm.graph().is_empty());
        assert_eq!(fsm.state(), TestState::Idle);
    }

    #[test]
    fn fluent_api_builds_machine() {
        let fsm = FsmBuilder::new()
            .initial(TestState::Idle)
            .transition("start", TestState::Idle, TestState::Running)
            .transition("finish", TestState::Running, TestState::Done)
            .build()
            .unwrap();

        assert!(!fsm.is_guarded());
        fsm.trigger("start").unwrap();
        fsm.trigger("finish").unwrap();
        assert!(fsm.is_final());
    }

    #[test]
    fn guarded_flag_is_applied() {
        let fsm = FsmBuilder::new()
            .initial(TestState::Idle)
            .guarded(true)
            .build()
            .unwrap();

        assert!(fsm.is_guarded());
    }

    #[test]
    fn strict_mode_rejects_duplicates() {
        let result = FsmBuilder::new()
            .initial(TestState::Idle)
            .strict(true)
            .transition("start", TestState::Idle, TestState::Running)
            .transition("start", TestState::Idle, TestState::Done)
            .build();

        assert!(matches!(
            result,
            Err(BuildError::DuplicateTransition { ref event, ref from })
                if event == "start" && from == "Idle"
        ));
    }

    #[test]
    fn lenient_mode_keeps_first_duplicate() {
        let fsm = FsmBuilder::new()
            .initial(TestState::Idle)
            .transition("start", TestState::Idle, TestState::Running)
            .transition("start", TestState::Idle, TestState::Done)
            .build()
            .unwrap();

        fsm.trigger("start").unwrap();
        assert_eq!(fsm.state(), TestState::Running);
    }

    #[test]
    fn on_attaches_callback() {
        let fsm = FsmBuilder::new()
            .initial(TestState::Idle)
            .on("start", TestState::Idle, TestState::Running, |fsm, _t| {
                fsm.set_state(TestState::Done);
                Ok(())
            })
            .build()
            .unwrap();

        fsm.trigger("start").unwrap();
        assert_eq!(fsm.state(), TestState::Done);
    }

    #[test]
    fn table_entries_are_appended() {
        let table = Table::new()
            .with("start", TestState::Idle, TestState::Running)
            .with("finish", TestState::Running, TestState::Done);

        let fsm = FsmBuilder::new()
            .initial(TestState::Idle)
            .table(table)
            .build()
            .unwrap();

        assert_eq!(fsm.graph().len(), 2);
    }
}

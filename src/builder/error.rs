//! Build errors for state machines and transition tables.

use thiserror::Error;

/// Errors that can occur when building state machines and tables.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Transition for event '{event}' from state '{from}' is declared more than once")]
    DuplicateTransition { event: String, from: String },

    #[error("Invalid transition definition: {0}")]
    InvalidDefinition(#[from] serde_json::Error),
}

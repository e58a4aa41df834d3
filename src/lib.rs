//! Switchyard: a minimal table-driven finite state machine
//!
//! A machine is built once from a table of permitted transitions, each
//! keyed by an event name and a source state, optionally carrying a
//! callback. Firing an event validates it against the current state, runs
//! the callback and advances the machine.
//!
//! # Core Concepts
//!
//! - **State**: Type-safe state representation via the `State` trait
//! - **Table**: Ordered declaration of transitions and their callbacks
//! - **Graph**: Immutable `event -> from -> edge` lookup built from a table
//! - **Fsm**: Holds the current state and fires events; optionally guarded
//!   against overlapping triggers
//!
//! # Example
//!
//! ```rust
//! use switchyard::{Fsm, Table, TriggerError};
//!
//! let table: Table<String> = Table::new()
//!     .with("on", "idle".to_string(), "running".to_string())
//!     .with_callback("pause", "running".to_string(), "paused".to_string(), |fsm, _t| {
//!         // Callbacks may redirect the transition.
//!         fsm.set_state("interrupted".to_string());
//!         Ok(())
//!     });
//!
//! let fsm = Fsm::new(true, "idle".to_string(), &table);
//!
//! fsm.trigger("on").unwrap();
//! fsm.trigger("pause").unwrap();
//! assert_eq!(fsm.state(), "interrupted");
//!
//! assert!(matches!(
//!     fsm.trigger("resume"),
//!     Err(TriggerError::EventNotFound { .. })
//! ));
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::builder::{BuildError, FsmBuilder};
pub use crate::core::{Callback, CallbackResult, State, Table, Transition, TransitionGraph};
pub use crate::engine::{Fsm, TriggerError};

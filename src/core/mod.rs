//! Core state machine types.
//!
//! This module contains the data side of the machine:
//! - State definitions via the `State` trait
//! - Transition descriptors and the caller-supplied `Table`
//! - The immutable `TransitionGraph` derived from a table
//!
//! Nothing in here mutates after construction; the only moving part of a
//! machine is the current state held by [`Fsm`](crate::engine::Fsm).

mod graph;
mod state;
mod table;
mod transition;

pub use graph::{Edge, TransitionGraph};
pub use state::State;
pub use table::{Callback, CallbackResult, Table, TableEntry};
pub use transition::Transition;

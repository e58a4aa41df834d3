//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and a macro for creating state
//! machines with minimal boilerplate. Unlike [`Fsm::new`], the builder can
//! validate its input and refuse ambiguous tables.
//!
//! [`Fsm::new`]: crate::engine::Fsm::new

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::FsmBuilder;

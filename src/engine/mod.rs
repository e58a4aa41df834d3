//! The engine that fires events against a transition graph.
//!
//! # Key Concepts
//!
//! - **Trigger**: look up `(event, current state)`, run the edge's callback,
//!   then advance to the declared destination unless the callback already
//!   moved the machine
//! - **Guarded mode**: a single-slot guard that rejects overlapping
//!   triggers instead of queueing them
//!
//! Every operation is synchronous and runs on the caller's thread.

mod error;
mod guard;
mod machine;

pub use error::TriggerError;
pub use guard::{GuardPermit, TriggerGuard};
pub use machine::Fsm;

//! Coin-operated Turnstile
//!
//! This example demonstrates a guarded machine with callbacks.
//!
//! Key concepts:
//! - Enum states generated with the `state_enum!` macro
//! - Callbacks that observe a transition
//! - A callback that redirects a transition by setting the state itself
//! - Errors returned for events the current state does not accept
//!
//! Run with: cargo run --example turnstile

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use switchyard::builder::FsmBuilder;
use switchyard::state_enum;

state_enum! {
    enum Turnstile {
        Locked,
        Unlocked,
        Jammed,
    }
    final: [Jammed]
}

fn main() {
    println!("=== Turnstile Example ===\n");

    let passages = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&passages);

    let fsm = FsmBuilder::new()
        .initial(Turnstile::Locked)
        .guarded(true)
        .strict(true)
        .on("coin", Turnstile::Locked, Turnstile::Unlocked, |_fsm, t| {
            println!("  coin accepted ({:?} -> {:?})", t.from, t.to);
            Ok(())
        })
        .on("push", Turnstile::Unlocked, Turnstile::Locked, move |fsm, _t| {
            let count = counter.fetch_add(1, Ordering::SeqCst) + 1;
            println!("  passage #{}", count);
            if count == 3 {
                println!("  arm stuck, jamming");
                fsm.set_state(Turnstile::Jammed);
            }
            Ok(())
        })
        .build()
        .expect("turnstile table is valid");

    for event in ["push", "coin", "push", "coin", "push", "coin", "push", "coin"] {
        match fsm.trigger(event) {
            Ok(()) => println!("{:<5} -> {:?}", event, fsm.state()),
            Err(err) => println!("{:<5} !! {}", event, err),
        }
    }

    println!("\nPassages: {}", passages.load(Ordering::SeqCst));
    println!("Is in final state: {}", fsm.is_final());

    println!("\n=== Example Complete ===");
}

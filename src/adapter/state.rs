//! `adapter/state.rs` — mutable state carried across invocations
//!
//! Replaces the captured-variable idiom of the reference scripts with an
//! explicit struct handed to every handler. State lives as long as the
//! adapter stays registered and resets only when the adapter is rebuilt.

use serde::{Deserialize, Serialize};

use crate::value::Atom;

/// Per-adapter mutable state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdapterState {
    /// Process-wide invocation tally, incremented by handlers that count.
    pub counter: u64,
    /// Script-local copy of the declared outlet count, seeded at load.
    ///
    /// Mutating this value never touches the host's routing table. The
    /// declared count and this copy are decoupled after declaration, so a
    /// handler can decrement it freely while the host keeps routing every
    /// declared outlet.
    pub live_outlets: i64,
    /// Creation-time arguments, enumerable from any handler.
    pub instance_args: Vec<Atom>,
}

impl AdapterState {
    pub fn new(instance_args: Vec<Atom>) -> Self {
        Self {
            counter: 0,
            live_outlets: 0,
            instance_args,
        }
    }

    /// Called when the adapter loads.
    pub(crate) fn seed_live_outlets(&mut self, declared: usize) {
        self.live_outlets = declared as i64;
    }
}

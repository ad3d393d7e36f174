//! `host/event.rs` — events the host delivers to adapters
//!
//! Each event resolves to a conventional handler name. Subsystems construct
//! a `HostEvent`, the engine turns it into an [`Invocation`] and runs the
//! matching handler.

use serde::{Deserialize, Serialize};

use crate::adapter::invocation::Invocation;
use crate::value::Atom;

/// Handler name fired when an adapter finishes loading.
pub const LOAD: &str = "load";
/// Handler name for the generic trigger.
pub const BANG: &str = "bang";
/// Handler name for integer messages.
pub const INT: &str = "int";
/// Handler name for float messages.
pub const FLOAT: &str = "float";

/// One callback delivery from the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    /// Fired once after the adapter is registered, before anything else.
    Load,
    /// Generic trigger. The host may attach a variable argument list.
    Bang { args: Vec<Atom> },
    /// An integer arrived at a declared inlet.
    Int { inlet: usize, value: i64 },
    /// A float arrived at a declared inlet.
    Float { inlet: usize, value: f64 },
    /// Externally requested call of a named handler.
    Message {
        name: String,
        inlet: usize,
        args: Vec<Atom>,
    },
}

impl HostEvent {
    pub fn bang() -> Self {
        HostEvent::Bang { args: Vec::new() }
    }

    pub fn message(name: impl Into<String>, args: Vec<Atom>) -> Self {
        HostEvent::Message {
            name: name.into(),
            inlet: 0,
            args,
        }
    }

    /// The conventional handler name this event resolves to.
    pub fn handler_name(&self) -> &str {
        match self {
            HostEvent::Load => LOAD,
            HostEvent::Bang { .. } => BANG,
            HostEvent::Int { .. } => INT,
            HostEvent::Float { .. } => FLOAT,
            HostEvent::Message { name, .. } => name,
        }
    }

    /// The inlet this event targets. Lifecycle and generic triggers come in
    /// through inlet 0.
    pub fn inlet(&self) -> usize {
        match self {
            HostEvent::Load | HostEvent::Bang { .. } => 0,
            HostEvent::Int { inlet, .. } | HostEvent::Float { inlet, .. } => *inlet,
            HostEvent::Message { inlet, .. } => *inlet,
        }
    }

    pub fn to_invocation(&self) -> Invocation {
        let args = match self {
            HostEvent::Load => Vec::new(),
            HostEvent::Bang { args } => args.clone(),
            HostEvent::Int { value, .. } => vec![Atom::Int(*value)],
            HostEvent::Float { value, .. } => vec![Atom::Float(*value)],
            HostEvent::Message { args, .. } => args.clone(),
        };
        Invocation::new(self.handler_name(), self.inlet(), args)
    }
}

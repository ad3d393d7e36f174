//! `error.rs` — failure taxonomy for adapters and the host engine
//!
//! Nothing in here terminates the process. Every variant is either logged
//! and continued (emission problems, handler failures) or refused up front
//! (registration problems, dispatch to an adapter that cannot accept it).

use thiserror::Error;

use crate::value::AtomKind;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScriptError {
    /// Port counts re-declared after the adapter loaded. The adapter keeps
    /// its last-valid declaration.
    #[error("port declaration rejected: {0}")]
    Declaration(String),

    /// Emission targeted a channel the adapter never declared.
    #[error("outlet {outlet} out of range (adapter declares {declared})")]
    OutOfRangeOutlet { outlet: usize, declared: usize },

    /// The outlet sink refused a value kind. The value is dropped, the
    /// remaining values in the same call still emit.
    #[error("value kind {kind:?} not supported by the outlet sink")]
    UnsupportedKind { kind: AtomKind },

    /// Two handlers registered under the same name.
    #[error("duplicate handler '{0}'")]
    DuplicateHandler(String),

    /// A handler name the adapter requires (or an event names) is absent
    /// from the registration table.
    #[error("no handler named '{0}'")]
    MissingHandler(String),

    /// A handler body failed. Surfaced to the log channel, never retried.
    #[error("handler '{name}' failed: {message}")]
    Handler { name: String, message: String },

    #[error("no adapter with id {0}")]
    UnknownAdapter(i64),

    #[error("adapter {0} is not loaded")]
    NotLoaded(i64),

    #[error("adapter {0} is already loaded")]
    AlreadyLoaded(i64),
}

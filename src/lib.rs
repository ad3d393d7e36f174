//! patchscript — message-passing script adapters for patcher-style hosts.
//!
//! An adapter declares a fixed number of inlets and outlets, registers
//! handlers under conventional names (`load`, `bang`, `int`, `float`, plus
//! any custom message selectors), and emits typed values back to the host
//! through numbered outlets. The [`host::ScriptHost`] engine delivers one
//! event at a time, captures log output per adapter, and records
//! emissions; handler errors are logged and never crash the host.

pub mod adapter;
pub mod demos;
pub mod error;
pub mod host;
pub mod value;

pub use adapter::{AdapterBuilder, AdapterInfo, AdapterState, Invocation, PortConfig, ScriptAdapter};
pub use error::ScriptError;
pub use host::{Emission, HostContext, HostEvent, LogEntry, OutletSink, RecordingSink, RunResult, ScriptHost};
pub use value::{Atom, AtomKind};

//! `host/` — the embedding side of the contract
//!
//! The engine registers adapters, delivers one event at a time, captures
//! per-adapter log output, and records emissions. Dispatch is synchronous
//! and cooperative: a handler runs to completion before the next event is
//! accepted, so no locking discipline exists anywhere in this module.

pub mod context;
pub mod engine;
pub mod event;
pub mod log;
pub mod outlet;

pub use context::HostContext;
pub use engine::{RunResult, ScriptHost};
pub use event::HostEvent;
pub use log::LogEntry;
pub use outlet::{Emission, OutletSink, RecordingSink};

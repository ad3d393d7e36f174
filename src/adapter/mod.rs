//! `adapter/` — the script dispatch adapter
//!
//! An adapter declares its ports, registers handlers under conventional
//! names, and carries its own mutable state across invocations. Handler
//! errors are caught by the host engine and logged — they never crash the
//! host.

pub mod handlers;
pub mod invocation;
pub mod ports;
pub mod script;
pub mod state;

pub use handlers::{Handler, HandlerTable};
pub use invocation::Invocation;
pub use ports::PortConfig;
pub use script::{AdapterBuilder, AdapterInfo, ScriptAdapter};
pub use state::AdapterState;

//! `demos/` — the demonstration adapters
//!
//! Two ready-made adapters exercising the full dispatch contract: `emitter`
//! covers every emission composition pattern, `probe` covers startup
//! logging, instance arguments, the invocation counter, and multi-channel
//! emission from one call.

pub mod emitter;
pub mod probe;

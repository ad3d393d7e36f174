//! `host/context.rs` — the surface handlers call back into
//!
//! One `HostContext` exists per invocation. It knows the target inlet, the
//! declared outlet count, and the sink emissions go to. Emission failures
//! are logged and skipped — a handler can keep running after an out-of-range
//! or unsupported-kind rejection.

use crate::error::ScriptError;
use crate::host::log::LogEntry;
use crate::host::outlet::OutletSink;
use crate::value::Atom;

pub struct HostContext<'a> {
    inlet: usize,
    outlets: usize,
    sink: &'a mut dyn OutletSink,
    entries: Vec<LogEntry>,
}

impl<'a> HostContext<'a> {
    pub fn new(inlet: usize, outlets: usize, sink: &'a mut dyn OutletSink) -> Self {
        Self {
            inlet,
            outlets,
            sink,
            entries: Vec::new(),
        }
    }

    /// The inlet index that produced the current invocation.
    pub fn inlet(&self) -> usize {
        self.inlet
    }

    /// Declared outlet count — the host's routing table, not the adapter's
    /// script-local copy.
    pub fn outlets(&self) -> usize {
        self.outlets
    }

    pub fn post(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::info!("[script] {message}");
        self.entries.push(LogEntry::info(message));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::error!("[script] {message}");
        self.entries.push(LogEntry::error(message));
    }

    /// Emit an ordered value list on one channel.
    ///
    /// Out-of-range channels reject the whole call; values the sink does
    /// not support are dropped one by one while the rest still emit. A call
    /// whose values were all dropped produces no emission record.
    pub fn outlet(&mut self, index: usize, values: Vec<Atom>) {
        if index >= self.outlets {
            let err = ScriptError::OutOfRangeOutlet {
                outlet: index,
                declared: self.outlets,
            };
            self.error(err.to_string());
            return;
        }
        let mut kept = Vec::with_capacity(values.len());
        for value in values {
            if self.sink.supports(value.kind()) {
                kept.push(value);
            } else {
                let err = ScriptError::UnsupportedKind { kind: value.kind() };
                self.error(err.to_string());
            }
        }
        if kept.is_empty() {
            return;
        }
        self.sink.emit(index, kept);
    }

    pub(crate) fn into_entries(self) -> Vec<LogEntry> {
        self.entries
    }
}

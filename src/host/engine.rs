//! `host/engine.rs` — adapter registry and synchronous dispatch
//!
//! `ScriptHost` owns every registered adapter and delivers one event at a
//! time: a handler runs to completion before the next invocation is
//! accepted. Output from `post`/`error` is captured and stored per adapter
//! for the UI. Handler failures are recorded, never retried, and never
//! crash the host.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::adapter::script::ScriptAdapter;
use crate::error::ScriptError;
use crate::host::context::HostContext;
use crate::host::event::{HostEvent, LOAD};
use crate::host::log::LogEntry;
use crate::host::outlet::{Emission, OutletSink, RecordingSink};

/// Last N log entries kept per adapter.
const LOG_CAP: usize = 200;

// ── Run result ────────────────────────────────────────────────────────────────

/// Outcome of delivering one event to one adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResult {
    pub success: bool,
    /// Captured log lines, `[level] message` per entry.
    pub output: Vec<String>,
    pub error: Option<String>,
    /// Recorded emissions. Empty when the caller routed them to an
    /// external sink via [`ScriptHost::deliver_with`].
    pub emissions: Vec<Emission>,
}

impl RunResult {
    fn failure(error: String) -> Self {
        Self {
            success: false,
            output: Vec::new(),
            error: Some(error),
            emissions: Vec::new(),
        }
    }
}

// ── ScriptHost ────────────────────────────────────────────────────────────────

/// The embedding host: adapter registry, per-adapter logs, event dispatch.
#[derive(Debug, Default)]
pub struct ScriptHost {
    adapters: HashMap<i64, ScriptAdapter>,
    logs: HashMap<i64, Vec<LogEntry>>,
}

impl ScriptHost {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Adapter registry ──────────────────────────────────────────────────

    /// Register an adapter. Returns the assigned id.
    pub fn register(&mut self, mut adapter: ScriptAdapter) -> i64 {
        let id = if adapter.info().id == 0 {
            self.adapters.keys().max().copied().unwrap_or(0) + 1
        } else {
            adapter.info().id
        };
        adapter.set_id(id);
        self.adapters.insert(id, adapter);
        self.logs.entry(id).or_default();
        id
    }

    pub fn remove(&mut self, id: i64) {
        self.adapters.remove(&id);
        self.logs.remove(&id);
    }

    pub fn adapter(&self, id: i64) -> Option<&ScriptAdapter> {
        self.adapters.get(&id)
    }

    /// All registered adapters, ordered by id.
    pub fn adapters(&self) -> Vec<&ScriptAdapter> {
        let mut all: Vec<&ScriptAdapter> = self.adapters.values().collect();
        all.sort_by_key(|a| a.info().id);
        all
    }

    pub fn set_enabled(&mut self, id: i64, enabled: bool) -> Result<(), ScriptError> {
        let adapter = self
            .adapters
            .get_mut(&id)
            .ok_or(ScriptError::UnknownAdapter(id))?;
        adapter.info_mut().enabled = enabled;
        Ok(())
    }

    /// Re-declare an adapter's port counts. Once loaded the counts are
    /// fixed: the violation is logged and the last-valid declaration stays.
    pub fn declare_ports(
        &mut self,
        id: i64,
        inlets: usize,
        outlets: usize,
    ) -> Result<(), ScriptError> {
        let adapter = self
            .adapters
            .get_mut(&id)
            .ok_or(ScriptError::UnknownAdapter(id))?;
        match adapter.redeclare_ports(inlets, outlets) {
            Ok(()) => Ok(()),
            Err(err) => {
                log::error!("[script] {err}");
                self.push_entries(id, vec![LogEntry::error(err.to_string())]);
                Err(err)
            }
        }
    }

    // ── Event dispatch ────────────────────────────────────────────────────

    /// Fire the `load` event: transitions the adapter to loaded and runs
    /// its `load` handler if one is registered.
    pub fn load(&mut self, id: i64) -> RunResult {
        self.deliver(id, &HostEvent::Load)
    }

    /// Deliver one event, recording emissions into the result.
    pub fn deliver(&mut self, id: i64, event: &HostEvent) -> RunResult {
        let mut sink = RecordingSink::new();
        let mut result = self.deliver_with(id, event, &mut sink);
        result.emissions = sink.into_emissions();
        result
    }

    /// Deliver one event, routing emissions to an external sink.
    pub fn deliver_with(
        &mut self,
        id: i64,
        event: &HostEvent,
        sink: &mut dyn OutletSink,
    ) -> RunResult {
        let Some(adapter) = self.adapters.get_mut(&id) else {
            let err = ScriptError::UnknownAdapter(id);
            log::warn!("[script] {err}");
            return RunResult::failure(err.to_string());
        };

        let is_load = matches!(event, HostEvent::Load);
        if is_load && adapter.is_loaded() {
            return self.refuse(id, ScriptError::AlreadyLoaded(id));
        }
        if !is_load && !adapter.is_loaded() {
            return self.refuse(id, ScriptError::NotLoaded(id));
        }
        if is_load {
            adapter.mark_loaded();
        }

        let invocation = event.to_invocation();
        let mut ctx = HostContext::new(invocation.inlet(), adapter.ports().outlets(), sink);
        // Loading without a load handler is not an error.
        let outcome = if is_load && !adapter.has_handler(LOAD) {
            Ok(())
        } else {
            adapter.dispatch(&invocation, &mut ctx)
        };

        let mut entries = ctx.into_entries();
        let error = match outcome {
            Ok(()) => None,
            Err(err) => {
                // Missing-handler complaints already went through ctx.error.
                if !matches!(err, ScriptError::MissingHandler(_)) {
                    log::error!("[script] {err}");
                    entries.push(LogEntry::error(err.to_string()));
                }
                Some(err.to_string())
            }
        };

        let output: Vec<String> = entries
            .iter()
            .map(|e| format!("[{}] {}", e.level, e.message))
            .collect();
        self.push_entries(id, entries);
        self.stamp(id, error.clone());

        RunResult {
            success: error.is_none(),
            output,
            error,
            emissions: Vec::new(),
        }
    }

    /// Deliver one event to every enabled, loaded adapter, in id order.
    pub fn fire_all(&mut self, event: &HostEvent) -> Vec<(i64, RunResult)> {
        let mut ids: Vec<i64> = self
            .adapters
            .iter()
            .filter(|(_, a)| a.info().enabled && a.is_loaded())
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();
        ids.into_iter()
            .map(|id| {
                let result = self.deliver(id, event);
                (id, result)
            })
            .collect()
    }

    // ── Logs ──────────────────────────────────────────────────────────────

    /// Last `limit` log entries for an adapter.
    pub fn log(&self, id: i64, limit: usize) -> Vec<LogEntry> {
        let entries = self.logs.get(&id).cloned().unwrap_or_default();
        let skip = entries.len().saturating_sub(limit);
        entries[skip..].to_vec()
    }

    /// Last `limit` log entries as JSON rows for the host UI.
    pub fn log_json(&self, id: i64, limit: usize) -> Vec<serde_json::Value> {
        self.log(id, limit)
            .into_iter()
            .map(|e| {
                serde_json::json!({
                    "level": e.level,
                    "message": e.message,
                    "timestamp": e.timestamp,
                })
            })
            .collect()
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn refuse(&mut self, id: i64, err: ScriptError) -> RunResult {
        log::warn!("[script] {err}");
        let entry = LogEntry::error(err.to_string());
        let output = vec![format!("[{}] {}", entry.level, entry.message)];
        self.push_entries(id, vec![entry]);
        self.stamp(id, Some(err.to_string()));
        RunResult {
            success: false,
            output,
            error: Some(err.to_string()),
            emissions: Vec::new(),
        }
    }

    fn push_entries(&mut self, id: i64, entries: Vec<LogEntry>) {
        let buf = self.logs.entry(id).or_default();
        buf.extend(entries);
        if buf.len() > LOG_CAP {
            let skip = buf.len() - LOG_CAP;
            buf.drain(..skip);
        }
    }

    fn stamp(&mut self, id: i64, error: Option<String>) {
        if let Some(adapter) = self.adapters.get_mut(&id) {
            let info = adapter.info_mut();
            info.last_run_at = Some(chrono::Utc::now().timestamp());
            info.last_error = error;
        }
    }
}

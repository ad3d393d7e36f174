//! `adapter/script.rs` — adapter assembly and lifecycle
//!
//! `AdapterBuilder` collects ports, instance arguments, and handlers, then
//! validates the registration table. The built `ScriptAdapter` starts
//! unloaded; the host engine transitions it to loaded exactly once by
//! delivering the `load` event. Every other event is refused until then.

use serde::{Deserialize, Serialize};

use crate::adapter::handlers::HandlerTable;
use crate::adapter::invocation::Invocation;
use crate::adapter::ports::PortConfig;
use crate::adapter::state::AdapterState;
use crate::error::ScriptError;
use crate::host::context::HostContext;
use crate::value::Atom;

// ── Adapter record ────────────────────────────────────────────────────────────

/// Metadata the host tracks per registered adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdapterInfo {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub enabled: bool,
    pub last_run_at: Option<i64>,
    pub last_error: Option<String>,
}

// ── ScriptAdapter ─────────────────────────────────────────────────────────────

/// One registered script: metadata, ports, handlers, and mutable state.
#[derive(Debug)]
pub struct ScriptAdapter {
    info: AdapterInfo,
    ports: PortConfig,
    handlers: HandlerTable,
    state: AdapterState,
    loaded: bool,
}

impl ScriptAdapter {
    pub fn info(&self) -> &AdapterInfo {
        &self.info
    }

    pub fn ports(&self) -> &PortConfig {
        &self.ports
    }

    pub fn state(&self) -> &AdapterState {
        &self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn has_handler(&self, name: &str) -> bool {
        self.handlers.contains(name)
    }

    pub(crate) fn info_mut(&mut self) -> &mut AdapterInfo {
        &mut self.info
    }

    pub(crate) fn set_id(&mut self, id: i64) {
        self.info.id = id;
    }

    /// Transition `Unloaded → Loaded` and seed the script-local outlet copy.
    pub(crate) fn mark_loaded(&mut self) {
        self.loaded = true;
        self.state.seed_live_outlets(self.ports.outlets());
    }

    /// Re-declaration after load is a contract violation; the caller keeps
    /// the last-valid counts. Before load it simply replaces the counts.
    pub(crate) fn redeclare_ports(&mut self, inlets: usize, outlets: usize) -> Result<(), ScriptError> {
        if self.loaded {
            return Err(ScriptError::Declaration(format!(
                "ports are fixed once loaded (declared {}/{}, rejected {}/{})",
                self.ports.inlets(),
                self.ports.outlets(),
                inlets,
                outlets
            )));
        }
        self.ports.redeclare(inlets, outlets);
        Ok(())
    }

    /// Run the handler an invocation names. The borrow is split so the
    /// handler gets mutable state while the table stays shared.
    pub(crate) fn dispatch(
        &mut self,
        invocation: &Invocation,
        ctx: &mut HostContext<'_>,
    ) -> Result<(), ScriptError> {
        let Self {
            handlers, state, ..
        } = self;
        match handlers.get(invocation.handler()) {
            Some(handler) => handler(state, invocation, ctx),
            None => {
                let err = ScriptError::MissingHandler(invocation.handler().to_string());
                ctx.error(err.to_string());
                Err(err)
            }
        }
    }
}

// ── AdapterBuilder ────────────────────────────────────────────────────────────

/// Collects the pieces of an adapter and validates them at `build`.
#[derive(Debug)]
pub struct AdapterBuilder {
    name: String,
    description: Option<String>,
    ports: PortConfig,
    instance_args: Vec<Atom>,
    handlers: HandlerTable,
    required: Vec<String>,
}

impl AdapterBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            // Patcher convention: one inlet, one outlet unless declared.
            ports: PortConfig::new(1, 1),
            instance_args: Vec::new(),
            handlers: HandlerTable::new(),
            required: Vec::new(),
        }
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn ports(mut self, inlets: usize, outlets: usize) -> Self {
        self.ports = PortConfig::new(inlets, outlets);
        self
    }

    pub fn inlet_assist(mut self, index: usize, text: impl Into<String>) -> Self {
        self.ports.set_inlet_assist(index, text);
        self
    }

    pub fn outlet_assist(mut self, index: usize, text: impl Into<String>) -> Self {
        self.ports.set_outlet_assist(index, text);
        self
    }

    /// Creation-time arguments, enumerable from any handler via
    /// [`AdapterState::instance_args`].
    pub fn instance_args(mut self, args: Vec<Atom>) -> Self {
        self.instance_args = args;
        self
    }

    /// Register a handler under `name`. Duplicate names fail immediately.
    pub fn handler<F>(mut self, name: impl Into<String>, handler: F) -> Result<Self, ScriptError>
    where
        F: Fn(&mut AdapterState, &Invocation, &mut HostContext<'_>) -> Result<(), ScriptError>
            + Send
            + 'static,
    {
        self.handlers.register(name, handler)?;
        Ok(self)
    }

    /// Handler names that must be present for `build` to succeed.
    pub fn require(mut self, names: &[&str]) -> Self {
        self.required
            .extend(names.iter().map(|n| n.to_string()));
        self
    }

    pub fn build(self) -> Result<ScriptAdapter, ScriptError> {
        self.handlers.validate_required(&self.required)?;
        Ok(ScriptAdapter {
            info: AdapterInfo {
                id: 0,
                name: self.name,
                description: self.description,
                enabled: true,
                last_run_at: None,
                last_error: None,
            },
            ports: self.ports,
            state: AdapterState::new(self.instance_args),
            handlers: self.handlers,
            loaded: false,
        })
    }
}

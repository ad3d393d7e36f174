//! `adapter/ports.rs` — port declaration and assist labels
//!
//! Inlet and outlet counts are fixed when the adapter is built and read by
//! the host to size its routing tables. Assist labels are write-only
//! descriptions the host UI shows per port index.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Declared ports of one adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortConfig {
    inlets: usize,
    outlets: usize,
    inlet_assist: HashMap<usize, String>,
    outlet_assist: HashMap<usize, String>,
}

impl PortConfig {
    pub fn new(inlets: usize, outlets: usize) -> Self {
        Self {
            inlets,
            outlets,
            inlet_assist: HashMap::new(),
            outlet_assist: HashMap::new(),
        }
    }

    pub fn inlets(&self) -> usize {
        self.inlets
    }

    pub fn outlets(&self) -> usize {
        self.outlets
    }

    /// Out-of-range indices are ignored with a warning — the host renders
    /// a default caption for unlabeled ports either way.
    pub fn set_inlet_assist(&mut self, index: usize, text: impl Into<String>) {
        if index >= self.inlets {
            log::warn!("[script] inlet assist index {index} out of range ({} inlets)", self.inlets);
            return;
        }
        self.inlet_assist.insert(index, text.into());
    }

    pub fn set_outlet_assist(&mut self, index: usize, text: impl Into<String>) {
        if index >= self.outlets {
            log::warn!("[script] outlet assist index {index} out of range ({} outlets)", self.outlets);
            return;
        }
        self.outlet_assist.insert(index, text.into());
    }

    pub fn inlet_assist(&self, index: usize) -> Option<&str> {
        self.inlet_assist.get(&index).map(String::as_str)
    }

    pub fn outlet_assist(&self, index: usize) -> Option<&str> {
        self.outlet_assist.get(&index).map(String::as_str)
    }

    /// Replace the declared counts. Labels that fall out of range are
    /// dropped so queries stay consistent with the new declaration.
    pub(crate) fn redeclare(&mut self, inlets: usize, outlets: usize) {
        self.inlets = inlets;
        self.outlets = outlets;
        self.inlet_assist.retain(|&i, _| i < inlets);
        self.outlet_assist.retain(|&i, _| i < outlets);
    }
}

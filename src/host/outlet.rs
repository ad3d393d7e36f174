//! `host/outlet.rs` — the emission boundary
//!
//! Adapters emit through an `OutletSink`. The engine validates channel
//! range and value kinds before anything reaches the sink, so a sink only
//! ever sees emissions it declared support for.

use serde::{Deserialize, Serialize};

use crate::value::{Atom, AtomKind};

/// One outbound delivery: channel index plus an ordered value list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emission {
    pub outlet: usize,
    pub values: Vec<Atom>,
}

/// Where validated emissions go. Per-channel ordering follows the order of
/// `emit` calls; ordering across channels is unspecified.
pub trait OutletSink {
    fn emit(&mut self, outlet: usize, values: Vec<Atom>);

    /// Whether this sink accepts a value kind. Unsupported values are
    /// dropped upstream with a logged error; the rest of the call emits.
    fn supports(&self, _kind: AtomKind) -> bool {
        true
    }
}

/// Sink that records every emission, for tests and for `RunResult`.
#[derive(Debug, Default)]
pub struct RecordingSink {
    emissions: Vec<Emission>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emissions(&self) -> &[Emission] {
        &self.emissions
    }

    pub fn into_emissions(self) -> Vec<Emission> {
        self.emissions
    }
}

impl OutletSink for RecordingSink {
    fn emit(&mut self, outlet: usize, values: Vec<Atom>) {
        self.emissions.push(Emission { outlet, values });
    }
}

//! `adapter/handlers.rs` — the registration table
//!
//! The host looks up behavior by a conventional name at runtime. Instead of
//! scanning a dynamic namespace, every adapter builds an explicit table of
//! name → closure at construction time and validates it (no duplicates,
//! required names present) before reporting itself ready.

use std::collections::HashMap;
use std::fmt;

use crate::adapter::invocation::Invocation;
use crate::adapter::state::AdapterState;
use crate::error::ScriptError;
use crate::host::context::HostContext;

/// One registered handler. State is passed explicitly — handlers do not
/// capture mutable variables.
pub type Handler = Box<
    dyn Fn(&mut AdapterState, &Invocation, &mut HostContext<'_>) -> Result<(), ScriptError>
        + Send,
>;

/// Name → handler table with duplicate and required-name validation.
#[derive(Default)]
pub struct HandlerTable {
    table: HashMap<String, Handler>,
}

impl HandlerTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, name: impl Into<String>, handler: F) -> Result<(), ScriptError>
    where
        F: Fn(&mut AdapterState, &Invocation, &mut HostContext<'_>) -> Result<(), ScriptError>
            + Send
            + 'static,
    {
        let name = name.into();
        if self.table.contains_key(&name) {
            return Err(ScriptError::DuplicateHandler(name));
        }
        self.table.insert(name, Box::new(handler));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Handler> {
        self.table.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Sorted handler names, for logs and debugging.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.table.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn validate_required(&self, required: &[String]) -> Result<(), ScriptError> {
        for name in required {
            if !self.table.contains_key(name) {
                return Err(ScriptError::MissingHandler(name.clone()));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for HandlerTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerTable")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(
        _state: &mut AdapterState,
        _inv: &Invocation,
        _ctx: &mut HostContext<'_>,
    ) -> Result<(), ScriptError> {
        Ok(())
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut table = HandlerTable::new();
        table.register("bang", noop).unwrap();
        let err = table.register("bang", noop).unwrap_err();
        assert_eq!(err, ScriptError::DuplicateHandler("bang".into()));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn required_names_are_checked() {
        let mut table = HandlerTable::new();
        table.register("bang", noop).unwrap();
        assert!(table.validate_required(&["bang".into()]).is_ok());
        let err = table
            .validate_required(&["bang".into(), "float".into()])
            .unwrap_err();
        assert_eq!(err, ScriptError::MissingHandler("float".into()));
    }

    #[test]
    fn names_are_sorted() {
        let mut table = HandlerTable::new();
        table.register("float", noop).unwrap();
        table.register("bang", noop).unwrap();
        assert_eq!(table.names(), vec!["bang", "float"]);
    }
}

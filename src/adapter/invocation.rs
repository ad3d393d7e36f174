//! `adapter/invocation.rs` — one callback delivery from host to adapter
//!
//! Handlers never bind formal parameters. Every handler sees the full
//! ordered argument list through accessors, so a handler that nominally
//! cares about one value can still enumerate every extra the host supplied.

use crate::value::Atom;

/// The resolved form of a host event: handler name, target inlet, and the
/// complete argument list.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    handler: String,
    inlet: usize,
    args: Vec<Atom>,
}

impl Invocation {
    pub fn new(handler: impl Into<String>, inlet: usize, args: Vec<Atom>) -> Self {
        Self {
            handler: handler.into(),
            inlet,
            args,
        }
    }

    pub fn handler(&self) -> &str {
        &self.handler
    }

    /// Index of the inlet that produced this call.
    pub fn inlet(&self) -> usize {
        self.inlet
    }

    pub fn args(&self) -> &[Atom] {
        &self.args
    }

    pub fn arg(&self, index: usize) -> Option<&Atom> {
        self.args.get(index)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn int(&self, index: usize) -> Option<i64> {
        self.arg(index).and_then(Atom::as_int)
    }

    pub fn float(&self, index: usize) -> Option<f64> {
        self.arg(index).and_then(Atom::as_float)
    }

    pub fn symbol(&self, index: usize) -> Option<&str> {
        self.arg(index).and_then(Atom::as_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_see_every_argument() {
        let inv = Invocation::new(
            "anything",
            2,
            vec![Atom::Int(1), Atom::Symbol("two".into()), Atom::Float(3.0)],
        );
        assert_eq!(inv.len(), 3);
        assert_eq!(inv.int(0), Some(1));
        assert_eq!(inv.symbol(1), Some("two"));
        assert_eq!(inv.float(2), Some(3.0));
        assert_eq!(inv.arg(3), None);
        assert_eq!(inv.inlet(), 2);
    }

    #[test]
    fn typed_accessors_refuse_mismatched_kinds() {
        let inv = Invocation::new("x", 0, vec![Atom::Symbol("42".into())]);
        assert_eq!(inv.int(0), None);
        assert_eq!(inv.float(0), None);
        assert_eq!(inv.symbol(0), Some("42"));
    }
}

//! `value.rs` — tagged atom values crossing the host boundary
//!
//! Every argument a handler receives and every value an adapter emits is an
//! `Atom`. The set of kinds is closed: integer, float, symbol, null,
//! undefined, and nested lists of unbounded depth. `null` and `undefined`
//! are distinct kinds — emitting either is observable at the host boundary
//! and different from emitting nothing.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single value in an invocation argument list or an emission payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Atom {
    Int(i64),
    Float(f64),
    Symbol(String),
    Null,
    Undefined,
    /// Nested sequence — elements may themselves be lists.
    List(Vec<Atom>),
}

/// Discriminant-only mirror of [`Atom`], used for sink capability checks
/// and error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtomKind {
    Int,
    Float,
    Symbol,
    Null,
    Undefined,
    List,
}

impl Atom {
    pub fn kind(&self) -> AtomKind {
        match self {
            Atom::Int(_) => AtomKind::Int,
            Atom::Float(_) => AtomKind::Float,
            Atom::Symbol(_) => AtomKind::Symbol,
            Atom::Null => AtomKind::Null,
            Atom::Undefined => AtomKind::Undefined,
            Atom::List(_) => AtomKind::List,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Atom::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric read — integers widen to float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Atom::Float(v) => Some(*v),
            Atom::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Atom::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Atom]> {
        match self {
            Atom::List(items) => Some(items),
            _ => None,
        }
    }

    /// String-comparison ordering on the stringified forms.
    ///
    /// Mixed lists sort the way the reference scripts sort them: `0.8`
    /// before `42` before any word, because the comparison is on text,
    /// never on numeric value.
    pub fn lexical_cmp(&self, other: &Atom) -> Ordering {
        self.to_string().cmp(&other.to_string())
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Int(v) => write!(f, "{v}"),
            Atom::Float(v) => write!(f, "{v}"),
            Atom::Symbol(s) => write!(f, "{s}"),
            Atom::Null => write!(f, "null"),
            Atom::Undefined => write!(f, "undefined"),
            Atom::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
        }
    }
}

impl From<i64> for Atom {
    fn from(v: i64) -> Self {
        Atom::Int(v)
    }
}

impl From<f64> for Atom {
    fn from(v: f64) -> Self {
        Atom::Float(v)
    }
}

impl From<&str> for Atom {
    fn from(v: &str) -> Self {
        Atom::Symbol(v.to_string())
    }
}

impl From<String> for Atom {
    fn from(v: String) -> Self {
        Atom::Symbol(v)
    }
}

impl From<Vec<Atom>> for Atom {
    fn from(v: Vec<Atom>) -> Self {
        Atom::List(v)
    }
}

//! Human-readable rendering for test diagnostics.

use std::fmt;

use crate::{Key, Value};

/// Compact, JSON-ish rendering. Non-JSON shapes use a readable inline form:
/// `Symbol(label)`, `/source/flags`, `Date(ms)`, `Map { k => v }`,
/// `Set { v }`.
///
/// Rendering follows the structure recursively; do not render cyclic values.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Undefined => write!(f, "undefined"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) if n.is_nan() => write!(f, "NaN"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Symbol(s) => write!(f, "{s:?}"),
            Value::Date(d) => write!(f, "Date({})", d.millis()),
            Value::RegExp(r) => write!(f, "/{}/{}", r.source(), r.flags()),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Object(obj) => {
                write!(f, "{{")?;
                let named = obj.named_entries();
                let symbols = obj.symbol_entries();
                let mut first = true;
                for (name, value) in &named {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "{name}: {value}")?;
                }
                for (sym, value) in &symbols {
                    if !first {
                        write!(f, ", ")?;
                    }
                    first = false;
                    write!(f, "{sym:?}: {value}")?;
                }
                write!(f, "}}")
            }
            Value::Map(entries) => {
                write!(f, "Map {{")?;
                for (i, (k, v)) in entries.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, " {k} => {v}")?;
                }
                write!(f, " }}")
            }
            Value::Set(members) => {
                write!(f, "Set {{")?;
                for (i, m) in members.borrow().iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, " {m}")?;
                }
                write!(f, " }}")
            }
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Name(n) => write!(f, "{n}"),
            Key::Symbol(s) => write!(f, "{s:?}"),
        }
    }
}

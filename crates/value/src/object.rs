//! Record composites with insertion-ordered members.

use std::cell::RefCell;

use crate::{Symbol, Value};

/// A member key: a name or an identity-compared symbol token.
#[derive(Debug, Clone, PartialEq)]
pub enum Key {
    Name(String),
    Symbol(Symbol),
}

/// A record composite addressed by named and symbol-keyed members.
///
/// Members keep insertion order; overwriting an existing key keeps its
/// original position. Objects are shared behind `Rc` (see
/// [`Value::Object`]), and the interior `RefCell` lets a member point back
/// at its enclosing object.
#[derive(Debug, Default)]
pub struct Object {
    entries: RefCell<Vec<(Key, Value)>>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a named member.
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.put(Key::Name(name.into()), value);
    }

    /// Set a symbol-keyed member.
    pub fn set_symbol(&self, symbol: Symbol, value: Value) {
        self.put(Key::Symbol(symbol), value);
    }

    fn put(&self, key: Key, value: Value) {
        let mut entries = self.entries.borrow_mut();
        match entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => entries.push((key, value)),
        }
    }

    /// Look up a named member.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.entries.borrow().iter().find_map(|(k, v)| match k {
            Key::Name(n) if n == name => Some(v.clone()),
            _ => None,
        })
    }

    /// Look up a symbol-keyed member by token identity.
    pub fn get_symbol(&self, symbol: &Symbol) -> Option<Value> {
        self.entries.borrow().iter().find_map(|(k, v)| match k {
            Key::Symbol(s) if s.same(symbol) => Some(v.clone()),
            _ => None,
        })
    }

    /// Total member count, named and symbol-keyed.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Named members in insertion order.
    pub fn named_entries(&self) -> Vec<(String, Value)> {
        self.entries
            .borrow()
            .iter()
            .filter_map(|(k, v)| match k {
                Key::Name(n) => Some((n.clone(), v.clone())),
                Key::Symbol(_) => None,
            })
            .collect()
    }

    /// Symbol-keyed members in insertion order.
    pub fn symbol_entries(&self) -> Vec<(Symbol, Value)> {
        self.entries
            .borrow()
            .iter()
            .filter_map(|(k, v)| match k {
                Key::Symbol(s) => Some((s.clone(), v.clone())),
                Key::Name(_) => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let obj = Object::new();
        obj.set("name", Value::from("John"));
        obj.set("age", Value::from(30));
        assert_eq!(obj.len(), 2);
        assert!(matches!(obj.get("name"), Some(Value::String(s)) if s == "John"));
        assert!(obj.get("city").is_none());
    }

    #[test]
    fn overwrite_keeps_position() {
        let obj = Object::new();
        obj.set("a", Value::from(1));
        obj.set("b", Value::from(2));
        obj.set("a", Value::from(3));
        let names: Vec<String> = obj.named_entries().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(matches!(obj.get("a"), Some(Value::Number(n)) if n == 3.0));
    }

    #[test]
    fn symbol_members_are_separate() {
        let sym = Symbol::new("tag");
        let obj = Object::new();
        obj.set("tag", Value::from(1));
        obj.set_symbol(sym.clone(), Value::from(2));
        assert_eq!(obj.len(), 2);
        assert_eq!(obj.named_entries().len(), 1);
        assert_eq!(obj.symbol_entries().len(), 1);
        assert!(matches!(obj.get_symbol(&sym), Some(Value::Number(n)) if n == 2.0));
    }

    #[test]
    fn symbol_lookup_is_identity_based() {
        let obj = Object::new();
        obj.set_symbol(Symbol::new("tag"), Value::from(1));
        // A different token with the same label does not match.
        assert!(obj.get_symbol(&Symbol::new("tag")).is_none());
    }
}

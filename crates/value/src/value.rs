//! The [`Value`] union and its shallow equality predicates.

use std::cell::RefCell;
use std::rc::Rc;

use crate::{Date, Object, RegExp, Symbol};

/// A dynamically typed value.
///
/// Scalar variants hold their data inline. Composite variants (`Array`,
/// `Object`, `Map`, `Set`) are shared handles: cloning a `Value` clones the
/// handle, not the contents, so reference identity is preserved and a
/// composite can contain itself.
#[derive(Debug, Clone)]
pub enum Value {
    /// The explicit no-value state.
    Null,
    /// The missing-value state, distinct from [`Value::Null`].
    Undefined,
    Bool(bool),
    /// IEEE-754 double. NaN and signed zero flow through untouched.
    Number(f64),
    String(String),
    /// Identity token; see [`Symbol`].
    Symbol(Symbol),
    /// Millisecond-precision instant.
    Date(Date),
    /// Pattern literal with modifier flags.
    RegExp(RegExp),
    /// Ordered sequence.
    Array(Rc<RefCell<Vec<Value>>>),
    /// Record composite with named and symbol-keyed members.
    Object(Rc<Object>),
    /// Key-value collection; keys are themselves values.
    Map(Rc<RefCell<Vec<(Value, Value)>>>),
    /// Collection of distinct values.
    Set(Rc<RefCell<Vec<Value>>>),
}

/// Runtime tag classes over which the equality rules are defined.
///
/// Scalars each report their own class; every composite shape, `Null`
/// included, reports [`Kind::Composite`]. Mixed composite pairings are
/// sorted out by the comparison rules themselves, not by the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Undefined,
    Bool,
    Number,
    String,
    Symbol,
    Composite,
}

impl Value {
    /// Wrap items in a fresh array handle.
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Rc::new(RefCell::new(items)))
    }

    /// Build an object from named members, in order.
    pub fn object<K: Into<String>>(pairs: Vec<(K, Value)>) -> Self {
        let obj = Object::new();
        for (k, v) in pairs {
            obj.set(k, v);
        }
        Value::Object(Rc::new(obj))
    }

    /// Build a map from key-value pairs, in order. Keys collide by
    /// [`same_value_zero`]; a later pair overwrites the earlier value while
    /// keeping the key's original position.
    pub fn map(pairs: Vec<(Value, Value)>) -> Self {
        let mut entries: Vec<(Value, Value)> = Vec::with_capacity(pairs.len());
        for (key, value) in pairs {
            match entries.iter_mut().find(|(k, _)| same_value_zero(k, &key)) {
                Some(slot) => slot.1 = value,
                None => entries.push((key, value)),
            }
        }
        Value::Map(Rc::new(RefCell::new(entries)))
    }

    /// Build a set from members, in order, dropping [`same_value_zero`]
    /// duplicates.
    pub fn set(items: Vec<Value>) -> Self {
        let mut members: Vec<Value> = Vec::with_capacity(items.len());
        for item in items {
            if !members.iter().any(|m| same_value_zero(m, &item)) {
                members.push(item);
            }
        }
        Value::Set(Rc::new(RefCell::new(members)))
    }

    /// The runtime tag class of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::Undefined,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Symbol(_) => Kind::Symbol,
            Value::Null
            | Value::Date(_)
            | Value::RegExp(_)
            | Value::Array(_)
            | Value::Object(_)
            | Value::Map(_)
            | Value::Set(_) => Kind::Composite,
        }
    }

    /// True for non-composite values.
    pub fn is_scalar(&self) -> bool {
        self.kind() != Kind::Composite
    }
}

/// Strict equality: value equality for scalars, handle identity for shared
/// composites.
///
/// `NaN` never equals `NaN`, `+0` equals `-0`, and symbols match only by
/// token identity. `Date` and `RegExp` are immutable here, so value equality
/// and identity coincide for them.
pub fn strict_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Undefined, Value::Undefined) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Symbol(x), Value::Symbol(y)) => x.same(y),
        (Value::Date(x), Value::Date(y)) => x == y,
        (Value::RegExp(x), Value::RegExp(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => Rc::ptr_eq(x, y),
        (Value::Object(x), Value::Object(y)) => Rc::ptr_eq(x, y),
        (Value::Map(x), Value::Map(y)) => Rc::ptr_eq(x, y),
        (Value::Set(x), Value::Set(y)) => Rc::ptr_eq(x, y),
        _ => false,
    }
}

/// [`strict_equal`], except `NaN` equals `NaN`.
///
/// This is the collision predicate for [`Value::map`] and [`Value::set`]
/// keys; structural comparison never uses it.
pub fn same_value_zero(a: &Value, b: &Value) -> bool {
    if let (Value::Number(x), Value::Number(y)) = (a, b) {
        return x == y || (x.is_nan() && y.is_nan());
    }
    strict_equal(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_classes() {
        assert_eq!(Value::Undefined.kind(), Kind::Undefined);
        assert_eq!(Value::from(1).kind(), Kind::Number);
        assert_eq!(Value::from("x").kind(), Kind::String);
        assert_eq!(Value::Symbol(Symbol::new("s")).kind(), Kind::Symbol);
        assert_eq!(Value::Null.kind(), Kind::Composite);
        assert_eq!(Value::array(vec![]).kind(), Kind::Composite);
        assert_eq!(Value::Date(Date::from_millis(0)).kind(), Kind::Composite);
    }

    #[test]
    fn strict_equal_scalars() {
        assert!(strict_equal(&Value::from(5), &Value::from(5)));
        assert!(strict_equal(&Value::from(0.0), &Value::from(-0.0)));
        assert!(!strict_equal(&Value::from(f64::NAN), &Value::from(f64::NAN)));
        assert!(!strict_equal(&Value::from(5), &Value::from("5")));
    }

    #[test]
    fn strict_equal_composites_by_identity() {
        let arr = Value::array(vec![Value::from(1)]);
        assert!(strict_equal(&arr, &arr.clone()));
        assert!(!strict_equal(&arr, &Value::array(vec![Value::from(1)])));
    }

    #[test]
    fn same_value_zero_nan_collides() {
        assert!(same_value_zero(&Value::from(f64::NAN), &Value::from(f64::NAN)));
        assert!(same_value_zero(&Value::from(0.0), &Value::from(-0.0)));
        assert!(!same_value_zero(&Value::from(1), &Value::from(2)));
    }

    #[test]
    fn map_constructor_dedups_keys() {
        let m = Value::map(vec![
            (Value::from("k"), Value::from(1)),
            (Value::from(f64::NAN), Value::from(2)),
            (Value::from("k"), Value::from(3)),
            (Value::from(f64::NAN), Value::from(4)),
        ]);
        let Value::Map(entries) = &m else { panic!("not a map") };
        let entries = entries.borrow();
        assert_eq!(entries.len(), 2);
        assert!(matches!(entries[0].1, Value::Number(n) if n == 3.0));
        assert!(matches!(entries[1].1, Value::Number(n) if n == 4.0));
    }

    #[test]
    fn set_constructor_dedups_members() {
        let s = Value::set(vec![
            Value::from(1),
            Value::from(2),
            Value::from(1),
            Value::from(f64::NAN),
            Value::from(f64::NAN),
        ]);
        let Value::Set(members) = &s else { panic!("not a set") };
        assert_eq!(members.borrow().len(), 3);
    }

    #[test]
    fn set_keeps_distinct_composites() {
        // Two structurally identical arrays are distinct handles.
        let s = Value::set(vec![
            Value::array(vec![Value::from(1)]),
            Value::array(vec![Value::from(1)]),
        ]);
        let Value::Set(members) = &s else { panic!("not a set") };
        assert_eq!(members.borrow().len(), 2);
    }
}

//! The equivalence evaluator.

use std::rc::Rc;

use deep_equal_value::{strict_equal, Symbol, Value};

/// Performs a deep equality check between two dynamic values.
///
/// The decision rules, first match wins:
///
/// 1. Strict equality: value equality for scalars, handle identity for
///    composites. `NaN` fails here and everywhere below; `+0` equals `-0`.
/// 2. A `Null` or `Undefined` on either side is unequal to everything else.
/// 3. Different runtime tag classes are unequal (a number never equals a
///    string). All composite shapes share one class and are sorted out by
///    the remaining rules.
/// 4. Dates compare by instant, regexps by source and flag text (flag order
///    matters).
/// 5. Maps compare their key list and value list positionally, each in its
///    own insertion order; sets compare their member lists the same way.
///    Two maps or sets holding the same content inserted in a different
///    order are therefore unequal.
/// 6. Arrays compare elementwise; an array never equals a non-array.
/// 7. Everything else compares as a record: same named-key count, same key
///    set (order-independent), deep-equal member values; then the same for
///    symbol-keyed members, with keys matched by token identity.
///
/// Cyclic structures terminate: a pair of composites already being compared
/// further up the stack counts as equal on re-entry, which covers direct
/// self-references as well as multi-hop cycles.
///
/// Total and pure: never panics, never mutates its inputs.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    let mut in_progress = Vec::new();
    eq(a, b, &mut in_progress)
}

fn eq(a: &Value, b: &Value, in_progress: &mut Vec<(usize, usize)>) -> bool {
    // Identity / strict-value shortcut.
    if strict_equal(a, b) {
        return true;
    }

    // A missing value only equals itself, which the shortcut already covered.
    if matches!(a, Value::Null | Value::Undefined) || matches!(b, Value::Null | Value::Undefined) {
        return false;
    }

    if a.kind() != b.kind() {
        return false;
    }

    match (a, b) {
        (Value::Date(x), Value::Date(y)) => return x.millis() == y.millis(),
        (Value::RegExp(x), Value::RegExp(y)) => {
            return x.source() == y.source() && x.flags() == y.flags();
        }
        _ => {}
    }

    // Scalars that were not strictly equal stay unequal.
    if a.is_scalar() {
        return false;
    }

    // Re-entering a pair that is already being compared further up the
    // stack collapses to equal. This is what bounds recursion on cyclic
    // inputs. Dates and regexps carry no handle and cannot cycle.
    let pair = match (handle_addr(a), handle_addr(b)) {
        (Some(x), Some(y)) => Some((x, y)),
        _ => None,
    };
    if let Some(pair) = pair {
        if in_progress.contains(&pair) {
            return true;
        }
        in_progress.push(pair);
    }
    let result = eq_composite(a, b, in_progress);
    if pair.is_some() {
        in_progress.pop();
    }
    result
}

fn eq_composite(a: &Value, b: &Value, in_progress: &mut Vec<(usize, usize)>) -> bool {
    // Maps: the key list and the value list must each match positionally,
    // taken in per-map insertion order.
    if let (Value::Map(ma), Value::Map(mb)) = (a, b) {
        let ea = ma.borrow();
        let eb = mb.borrow();
        if ea.len() != eb.len() {
            return false;
        }
        for ((ka, _), (kb, _)) in ea.iter().zip(eb.iter()) {
            if !eq(ka, kb, in_progress) {
                return false;
            }
        }
        for ((_, va), (_, vb)) in ea.iter().zip(eb.iter()) {
            if !eq(va, vb, in_progress) {
                return false;
            }
        }
        return true;
    }

    // Sets: member lists in per-set insertion order.
    if let (Value::Set(sa), Value::Set(sb)) = (a, b) {
        let ma = sa.borrow();
        let mb = sb.borrow();
        if ma.len() != mb.len() {
            return false;
        }
        for (x, y) in ma.iter().zip(mb.iter()) {
            if !eq(x, y, in_progress) {
                return false;
            }
        }
        return true;
    }

    match (a, b) {
        (Value::Array(xa), Value::Array(xb)) => {
            let ia = xa.borrow();
            let ib = xb.borrow();
            if ia.len() != ib.len() {
                return false;
            }
            for (x, y) in ia.iter().zip(ib.iter()) {
                if !eq(x, y, in_progress) {
                    return false;
                }
            }
            return true;
        }
        // An array never equals a non-array composite.
        (Value::Array(_), _) | (_, Value::Array(_)) => return false,
        _ => {}
    }

    // Record fallback. Any remaining composite pairing compares by its named
    // entries; shapes without named entries contribute an empty record.
    let ea = named_entries(a);
    let eb = named_entries(b);
    if ea.len() != eb.len() {
        return false;
    }
    for (name, _) in &ea {
        if !eb.iter().any(|(n, _)| n == name) {
            return false;
        }
    }
    for (name, va) in &ea {
        match eb.iter().find(|(n, _)| n == name) {
            Some((_, vb)) => {
                if !eq(va, vb, in_progress) {
                    return false;
                }
            }
            None => return false,
        }
    }

    // Symbol-keyed members, matched by token identity.
    let sa = symbol_entries(a);
    let sb = symbol_entries(b);
    if sa.len() != sb.len() {
        return false;
    }
    for (sym, _) in &sa {
        if !sb.iter().any(|(s, _)| s.same(sym)) {
            return false;
        }
    }
    for (sym, va) in &sa {
        match sb.iter().find(|(s, _)| s.same(sym)) {
            Some((_, vb)) => {
                if !eq(va, vb, in_progress) {
                    return false;
                }
            }
            None => return false,
        }
    }

    true
}

/// Address of the shared handle behind a composite, if it has one.
fn handle_addr(v: &Value) -> Option<usize> {
    match v {
        Value::Array(h) => Some(Rc::as_ptr(h) as usize),
        Value::Object(h) => Some(Rc::as_ptr(h) as usize),
        Value::Map(h) => Some(Rc::as_ptr(h) as usize),
        Value::Set(h) => Some(Rc::as_ptr(h) as usize),
        _ => None,
    }
}

fn named_entries(v: &Value) -> Vec<(String, Value)> {
    match v {
        Value::Object(obj) => obj.named_entries(),
        _ => Vec::new(),
    }
}

fn symbol_entries(v: &Value) -> Vec<(Symbol, Value)> {
    match v {
        Value::Object(obj) => obj.symbol_entries(),
        _ => Vec::new(),
    }
}

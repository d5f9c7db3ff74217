//! Identity-compared key tokens.

use std::fmt;
use std::rc::Rc;

/// An opaque identity token, usable as a value or as an object member key.
///
/// Cloning a `Symbol` yields the same token. Two independently created
/// symbols are never equal, even when their description labels match.
#[derive(Clone)]
pub struct Symbol {
    inner: Rc<SymbolInner>,
}

struct SymbolInner {
    description: Option<String>,
}

impl Symbol {
    /// Create a fresh token carrying a description label.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(SymbolInner {
                description: Some(description.into()),
            }),
        }
    }

    /// Create a fresh token without a description.
    pub fn anonymous() -> Self {
        Self {
            inner: Rc::new(SymbolInner { description: None }),
        }
    }

    /// The description label, if one was given.
    pub fn description(&self) -> Option<&str> {
        self.inner.description.as_deref()
    }

    /// Identity comparison: `true` only for clones of the same token.
    pub fn same(&self, other: &Symbol) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl Eq for Symbol {}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.description() {
            Some(d) => write!(f, "Symbol({d})"),
            None => write!(f, "Symbol()"),
        }
    }
}

//! deep-equal - Structural equivalence for dynamic values.
//!
//! Provides [`deep_equal`] for recursively comparing two
//! [`Value`](deep_equal_value::Value) instances, independent of reference
//! identity and of member insertion order for record objects.

mod deep_equal;

pub use deep_equal::deep_equal;

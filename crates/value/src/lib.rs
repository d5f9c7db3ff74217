//! deep-equal-value - Dynamic value model for deep structural equality.
//!
//! [`Value`] is a tagged union over every comparable shape: scalars, instants,
//! pattern literals, arrays, record objects, maps, and sets. Composite
//! variants are shared handles (`Rc`), so reference identity is observable
//! and a value can contain itself.
//!
//! The companion `deep-equal` crate provides the structural comparison; this
//! crate only defines the model plus the two shallow equality predicates it
//! is built on, [`strict_equal`] and [`same_value_zero`].

mod convert;
mod date;
mod display;
mod object;
mod regexp;
mod symbol;
mod value;

pub use date::Date;
pub use object::{Key, Object};
pub use regexp::{RegExp, RegExpError};
pub use symbol::Symbol;
pub use value::{same_value_zero, strict_equal, Kind, Value};

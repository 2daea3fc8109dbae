//! Attribute values and bags.
//!
//! Analysis objects are configured from open-ended sets of named settings
//! (per-observable YAML blocks, subconfiguration overrides). This module
//! gives those settings an explicit shape: [`AttrValue`] is a closed tagged
//! union of the supported value kinds, and [`AttrBag`] is a named dictionary
//! of them with auto-naming through the [`crate::naming`] registry.
//!
//! Kind checks are exact: a tuple is never a list, an integer is never a
//! float. Code that needs to branch on a value's shape matches on
//! [`AttrKind`] rather than coercing.

mod bag;
mod value;

pub use bag::{AttrBag, AttrBagBuilder, Configurable, NAME_ATTR};
pub use value::{AttrKind, AttrValue};

//! Named attribute bags with registry-backed auto-naming.

use std::collections::BTreeMap;
use std::fmt;

use crate::naming::{self, NameRegistry};

use super::AttrValue;

/// Attribute key every bag carries.
pub const NAME_ATTR: &str = "name";

/// Capability of being configured from an open-ended set of named values.
///
/// Types embedding an [`AttrBag`] get unconditional and set-if-absent
/// attribute assignment for free; the latter is the hook for layering
/// defaults before caller-supplied settings land on top.
pub trait Configurable {
    fn attrs(&self) -> &AttrBag;
    fn attrs_mut(&mut self) -> &mut AttrBag;

    /// Set `key` unconditionally.
    fn attr(&mut self, key: &str, value: impl Into<AttrValue>)
    where
        Self: Sized,
    {
        self.attrs_mut().set(key, value);
    }

    /// Set `key` only if it is absent. Returns true when the default was
    /// applied.
    fn default_attr(&mut self, key: &str, value: impl Into<AttrValue>) -> bool
    where
        Self: Sized,
    {
        self.attrs_mut().set_default(key, value)
    }
}

/// A named dictionary of attribute values.
///
/// Every bag carries a `name` attribute. When the builder is not given one,
/// a collision-free name is claimed from the naming registry with the bag's
/// label as the base, so two untitled bags never share a name.
#[derive(Debug, Clone, PartialEq)]
pub struct AttrBag {
    label: String,
    attrs: BTreeMap<String, AttrValue>,
}

impl AttrBag {
    /// Start building a bag. `label` prefixes the debug listing and seeds
    /// auto-naming.
    pub fn builder(label: impl Into<String>) -> AttrBagBuilder<'static> {
        AttrBagBuilder {
            label: label.into(),
            attrs: BTreeMap::new(),
            registry: None,
        }
    }

    /// An empty bag with an auto-assigned name.
    pub fn new(label: impl Into<String>) -> Self {
        Self::builder(label).build()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// The bag's name. Empty only if a caller replaced the name attribute
    /// with a non-string value.
    pub fn name(&self) -> &str {
        match self.attrs.get(NAME_ATTR) {
            Some(AttrValue::Str(s)) => s,
            _ => "",
        }
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Insert `key` only if absent. Returns true when the value was
    /// inserted.
    pub fn set_default(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> bool {
        let mut inserted = false;
        self.attrs.entry(key.into()).or_insert_with(|| {
            inserted = true;
            value.into()
        });
        inserted
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.attrs.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    /// Number of attributes, the `name` attribute included.
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Configurable for AttrBag {
    fn attrs(&self) -> &AttrBag {
        self
    }

    fn attrs_mut(&mut self) -> &mut AttrBag {
        self
    }
}

impl fmt::Display for AttrBag {
    /// Debug listing: the label, then one `key = value` line per attribute
    /// in the map's sorted order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[i] {} with", self.label)?;
        for (key, value) in &self.attrs {
            write!(f, "\n .  {key} = {value}")?;
        }
        Ok(())
    }
}

pub struct AttrBagBuilder<'r> {
    label: String,
    attrs: BTreeMap<String, AttrValue>,
    registry: Option<&'r NameRegistry>,
}

impl<'r> AttrBagBuilder<'r> {
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Claim auto-assigned names from `registry` instead of the process-wide
    /// one.
    pub fn with_registry(self, registry: &NameRegistry) -> AttrBagBuilder<'_> {
        AttrBagBuilder {
            label: self.label,
            attrs: self.attrs,
            registry: Some(registry),
        }
    }

    pub fn build(mut self) -> AttrBag {
        if !self.attrs.contains_key(NAME_ATTR) {
            let name = match self.registry {
                Some(registry) => registry.claim(Some(&self.label)),
                None => naming::unique_name(Some(&self.label)),
            };
            self.attrs.insert(NAME_ATTR.to_string(), AttrValue::Str(name));
        }
        AttrBag {
            label: self.label,
            attrs: self.attrs,
        }
    }
}

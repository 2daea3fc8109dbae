//! Tagged attribute values and exact-kind checks.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::JetkitError;

/// The kind of value an attribute holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    Float,
    Int,
    Str,
    Bool,
    List,
    Tuple,
    Map,
}

impl AttrKind {
    pub fn name(self) -> &'static str {
        match self {
            AttrKind::Float => "float",
            AttrKind::Int => "int",
            AttrKind::Str => "str",
            AttrKind::Bool => "bool",
            AttrKind::List => "list",
            AttrKind::Tuple => "tuple",
            AttrKind::Map => "map",
        }
    }
}

/// Runtime representation of an attribute value.
///
/// Lists and tuples carry the same element storage but are distinct kinds;
/// a fixed-shape setting (a pt range, say) is a `Tuple` while an open-ended
/// collection is a `List`.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Float(f64),
    Int(i64),
    Str(String),
    Bool(bool),
    List(Vec<AttrValue>),
    Tuple(Vec<AttrValue>),
    Map(BTreeMap<String, AttrValue>),
}

impl AttrValue {
    pub fn kind(&self) -> AttrKind {
        match self {
            AttrValue::Float(_) => AttrKind::Float,
            AttrValue::Int(_) => AttrKind::Int,
            AttrValue::Str(_) => AttrKind::Str,
            AttrValue::Bool(_) => AttrKind::Bool,
            AttrValue::List(_) => AttrKind::List,
            AttrValue::Tuple(_) => AttrKind::Tuple,
            AttrValue::Map(_) => AttrKind::Map,
        }
    }

    /// Build a tuple value. `Vec<AttrValue>` converts to a list, so tuples
    /// get an explicit constructor.
    pub fn tuple(items: impl Into<Vec<AttrValue>>) -> Self {
        AttrValue::Tuple(items.into())
    }

    pub fn is_float(&self) -> bool {
        self.kind() == AttrKind::Float
    }

    pub fn is_int(&self) -> bool {
        self.kind() == AttrKind::Int
    }

    pub fn is_str(&self) -> bool {
        self.kind() == AttrKind::Str
    }

    pub fn is_bool(&self) -> bool {
        self.kind() == AttrKind::Bool
    }

    pub fn is_list(&self) -> bool {
        self.kind() == AttrKind::List
    }

    pub fn is_tuple(&self) -> bool {
        self.kind() == AttrKind::Tuple
    }

    pub fn is_map(&self) -> bool {
        self.kind() == AttrKind::Map
    }

    /// Get the float if this is a `Float`. No coercion: an `Int` is not a
    /// float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttrValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttrValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[AttrValue]> {
        match self {
            AttrValue::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_tuple(&self) -> Option<&[AttrValue]> {
        match self {
            AttrValue::Tuple(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&BTreeMap<String, AttrValue>> {
        match self {
            AttrValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        AttrValue::Float(v)
    }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self {
        AttrValue::Int(v)
    }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self {
        AttrValue::Str(v.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self {
        AttrValue::Str(v)
    }
}

impl From<bool> for AttrValue {
    fn from(v: bool) -> Self {
        AttrValue::Bool(v)
    }
}

impl From<Vec<AttrValue>> for AttrValue {
    fn from(v: Vec<AttrValue>) -> Self {
        AttrValue::List(v)
    }
}

impl From<BTreeMap<String, AttrValue>> for AttrValue {
    fn from(v: BTreeMap<String, AttrValue>) -> Self {
        AttrValue::Map(v)
    }
}

/// YAML values map straight onto attribute values: sequences become lists
/// (YAML has no tuple syntax), mappings become maps. Nulls, tagged values
/// and non-string mapping keys have no attribute representation and are
/// conversion errors.
impl TryFrom<serde_yaml::Value> for AttrValue {
    type Error = JetkitError;

    fn try_from(value: serde_yaml::Value) -> Result<Self, Self::Error> {
        use serde_yaml::Value;
        match value {
            Value::Bool(v) => Ok(AttrValue::Bool(v)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(AttrValue::Int(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(AttrValue::Float(f))
                } else {
                    Err(JetkitError::Attr(format!("unrepresentable number {n}")))
                }
            }
            Value::String(s) => Ok(AttrValue::Str(s)),
            Value::Sequence(items) => Ok(AttrValue::List(
                items
                    .into_iter()
                    .map(AttrValue::try_from)
                    .collect::<Result<Vec<_>, _>>()?,
            )),
            Value::Mapping(map) => {
                let mut out = BTreeMap::new();
                for (key, value) in map {
                    let key = key
                        .as_str()
                        .ok_or_else(|| {
                            JetkitError::Attr("mapping keys must be strings".to_string())
                        })?
                        .to_string();
                    out.insert(key, AttrValue::try_from(value)?);
                }
                Ok(AttrValue::Map(out))
            }
            Value::Null => Err(JetkitError::Attr(
                "YAML null has no attribute representation".to_string(),
            )),
            Value::Tagged(tag) => Err(JetkitError::Attr(format!(
                "unsupported YAML tag {}",
                tag.tag
            ))),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Float(v) => write!(f, "{v}"),
            AttrValue::Int(v) => write!(f, "{v}"),
            AttrValue::Str(s) => write!(f, "{s}"),
            AttrValue::Bool(v) => write!(f, "{v}"),
            AttrValue::List(items) => {
                write!(f, "[")?;
                write_joined(f, items)?;
                write!(f, "]")
            }
            AttrValue::Tuple(items) => {
                write!(f, "(")?;
                write_joined(f, items)?;
                write!(f, ")")
            }
            AttrValue::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[AttrValue]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_checks_are_exact() {
        let list = AttrValue::List(vec![AttrValue::Int(1), AttrValue::Int(2)]);
        let tuple = AttrValue::tuple(vec![AttrValue::Int(1), AttrValue::Int(2)]);

        assert!(list.is_list());
        assert!(!list.is_tuple());
        assert!(tuple.is_tuple());
        assert!(!tuple.is_list());

        // An empty list is still a list.
        assert!(AttrValue::List(vec![]).is_list());
    }

    #[test]
    fn numbers_do_not_coerce() {
        assert!(AttrValue::Int(1).is_int());
        assert!(!AttrValue::Int(1).is_float());
        assert_eq!(AttrValue::Int(1).as_float(), None);
        assert_eq!(AttrValue::Float(1.0).as_int(), None);
    }

    #[test]
    fn accessors_extract_exact_variants() {
        assert_eq!(AttrValue::Float(0.5).as_float(), Some(0.5));
        assert_eq!(AttrValue::Int(3).as_int(), Some(3));
        assert_eq!(AttrValue::from("jet").as_str(), Some("jet"));
        assert_eq!(AttrValue::Bool(true).as_bool(), Some(true));
        assert!(AttrValue::Bool(true).as_str().is_none());
    }

    #[test]
    fn yaml_sequences_become_lists() {
        let value: serde_yaml::Value = serde_yaml::from_str("[1, 2, 3]").unwrap();
        let attr = AttrValue::try_from(value).unwrap();
        assert!(attr.is_list());
        assert_eq!(attr.as_list().unwrap().len(), 3);
        assert!(attr.as_list().unwrap()[0].is_int());
    }

    #[test]
    fn yaml_mapping_becomes_map() {
        let value: serde_yaml::Value =
            serde_yaml::from_str("beta: 1.5\nlabel: SD").unwrap();
        let attr = AttrValue::try_from(value).unwrap();
        let map = attr.as_map().unwrap();
        assert_eq!(map["beta"], AttrValue::Float(1.5));
        assert_eq!(map["label"], AttrValue::Str("SD".to_string()));
    }

    #[test]
    fn yaml_null_is_rejected() {
        let value: serde_yaml::Value = serde_yaml::from_str("~").unwrap();
        assert!(AttrValue::try_from(value).is_err());
    }

    #[test]
    fn yaml_non_string_keys_are_rejected() {
        let value: serde_yaml::Value = serde_yaml::from_str("1: x").unwrap();
        assert!(AttrValue::try_from(value).is_err());
    }

    #[test]
    fn display_renders_each_kind() {
        assert_eq!(AttrValue::Int(7).to_string(), "7");
        assert_eq!(AttrValue::from("R0.2").to_string(), "R0.2");
        assert_eq!(
            AttrValue::List(vec![AttrValue::Int(1), AttrValue::Int(2)]).to_string(),
            "[1, 2]"
        );
        assert_eq!(
            AttrValue::tuple(vec![AttrValue::Int(20), AttrValue::Int(40)]).to_string(),
            "(20, 40)"
        );
        let mut map = BTreeMap::new();
        map.insert("beta".to_string(), AttrValue::Int(1));
        assert_eq!(AttrValue::Map(map).to_string(), "{beta: 1}");
    }
}

use super::{Flavor, Formatter, ToSql};

use crate::stmt::{Type, Value};

use indexmap::IndexMap;

/// Sink for the parameters bound by a serialized statement.
///
/// `push` is called once per bound placeholder, in placeholder order.
pub trait Params {
    fn push(&mut self, name: &str, value: &Value, ty: Option<Type>);
}

/// A placeholder at a given position (1-based) in the statement.
pub(super) struct Placeholder<'a> {
    pub(super) name: &'a str,
    pub(super) position: usize,
}

/// A parameter value with the declared type of its source field.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedValue {
    pub value: Value,
    pub ty: Option<Type>,
}

/// Named parameters of a generated statement.
///
/// Keys are placeholder names without the flavor prefix (`first_name`, not
/// `@first_name`). Iteration follows placeholder order, so positional
/// drivers can bind `values()` directly.
///
/// Names are unique, so a statement that binds the same placeholder name
/// twice cannot be represented: the later value would replace the earlier
/// one and a positional statement would bind fewer values than it has
/// placeholders. `Mapper` rejects such statements before serializing; as a
/// [`Params`] sink the bag asserts in debug builds that every pushed name is
/// new.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ParamBag {
    entries: IndexMap<String, Value>,
}

impl ParamBag {
    pub fn new() -> ParamBag {
        ParamBag::default()
    }

    /// Inserts a parameter. A repeated name keeps its original position and
    /// takes the new value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.keys().map(|key| &key[..])
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = &Value> + '_ {
        self.entries.values()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> + '_ {
        self.entries.iter().map(|(key, value)| (&key[..], value))
    }

    /// Consumes the bag, returning values in placeholder order.
    pub fn into_values(self) -> Vec<Value> {
        self.entries.into_values().collect()
    }
}

impl Params for ParamBag {
    fn push(&mut self, name: &str, value: &Value, _ty: Option<Type>) {
        debug_assert!(
            !self.contains_key(name),
            "parameter `{name}` bound more than once"
        );
        self.insert(name, value.clone());
    }
}

impl Params for Vec<Value> {
    fn push(&mut self, _name: &str, value: &Value, _ty: Option<Type>) {
        self.push(value.clone());
    }
}

impl Params for Vec<TypedValue> {
    fn push(&mut self, _name: &str, value: &Value, ty: Option<Type>) {
        self.push(TypedValue {
            value: value.clone(),
            ty: ty.or_else(|| value.ty()),
        });
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ParamBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> ParamBag {
        ParamBag {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ParamBag {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ParamBag {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl ToSql for Placeholder<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use std::fmt::Write;

        // Writing to a `String` cannot fail.
        let _ = match f.serializer.flavor {
            Flavor::Named => write!(f.dst, "@{}", self.name),
            Flavor::Postgresql => write!(f.dst, "${}", self.position),
            Flavor::Sqlite => write!(f.dst, "?{}", self.position),
            Flavor::Mysql => write!(f.dst, "?"),
        };
    }
}

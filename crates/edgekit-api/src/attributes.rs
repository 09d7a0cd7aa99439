use edgekit_core::{
    copy::DeepCopy,
    hydrate::{FieldError, PathSegment},
    model::FieldKind,
    traits::FieldType,
    value::{Value, ValueKind, ValueMap},
};
use serde::{Deserialize, Serialize};

// Module: attributes
// Responsibility: the name/value metadata bag every catalogue entity
// carries, and its wire normalization. The service emits attributes either
// as a bare list of `{name, value}` objects or wrapped in an object under
// an `attribute` key; both decode to the same collection.

///
/// Attribute
///

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    fn from_entry(value: Value) -> Result<Self, FieldError> {
        let found = value.kind();
        let Value::Map(mut map) = value else {
            return Err(FieldError::mismatch(FieldKind::Record("attribute"), found));
        };

        let name = match map.take("name") {
            Some(Value::Text(name)) => name,
            Some(other) => {
                return Err(FieldError::mismatch(FieldKind::Text, other.kind())
                    .nested(PathSegment::Field("name")));
            }
            None => {
                return Err(FieldError::mismatch(FieldKind::Text, ValueKind::Null)
                    .nested(PathSegment::Field("name")));
            }
        };

        // values arrive as strings, but the service is loose with scalars
        let value = match map.take("value") {
            Some(Value::Text(value)) => value,
            Some(scalar @ (Value::Bool(_) | Value::Int(_) | Value::Uint(_) | Value::Float(_))) => {
                scalar.to_string()
            }
            Some(Value::Null) | None => String::new(),
            Some(other) => {
                return Err(FieldError::mismatch(FieldKind::Text, other.kind())
                    .nested(PathSegment::Field("value")));
            }
        };

        Ok(Self { name, value })
    }

    fn to_entry(&self) -> Value {
        let mut map = ValueMap::new();
        map.insert("name", Value::from(self.name.as_str()));
        map.insert("value", Value::from(self.value.as_str()));

        Value::Map(map)
    }
}

///
/// Attributes
///
/// Ordered collection keyed by attribute name. `add` upserts in place so a
/// renamed value keeps its position, mirroring how the service echoes the
/// list back.
///

#[derive(
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    derive_more::Deref,
    derive_more::DerefMut,
    derive_more::IntoIterator,
)]
#[serde(transparent)]
pub struct Attributes(Vec<Attribute>);

impl Attributes {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }

    /// Insert or replace the value stored under `name`.
    pub fn add(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.0.iter_mut().find(|attribute| attribute.name == name) {
            Some(existing) => existing.value = value,
            None => self.0.push(Attribute { name, value }),
        }
    }

    /// Remove the attribute named `name`, returning its value if it existed.
    pub fn delete(&mut self, name: &str) -> Option<String> {
        let position = self.0.iter().position(|attribute| attribute.name == name)?;
        Some(self.0.remove(position).value)
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = &'a Attribute;
    type IntoIter = std::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl DeepCopy for Attributes {
    fn deep_copy(&self) -> Self {
        self.clone()
    }
}

impl FieldType for Attributes {
    const KIND: FieldKind = FieldKind::List(&FieldKind::Record("attribute"));

    fn from_value(value: Value) -> Result<Self, FieldError> {
        match value {
            Value::Null => Ok(Self::new()),
            Value::List(entries) => entries
                .into_iter()
                .enumerate()
                .map(|(index, entry)| {
                    Attribute::from_entry(entry)
                        .map_err(|error| error.nested(PathSegment::Index(index)))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self),
            Value::Map(mut wrapper) => match wrapper.take("attribute") {
                Some(inner) => Self::from_value(inner)
                    .map_err(|error| error.nested(PathSegment::Field("attribute"))),
                None => Err(FieldError::mismatch(Self::KIND, ValueKind::Map)),
            },
            other => Err(FieldError::mismatch(Self::KIND, other.kind())),
        }
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::List(
            self.0.iter().map(Attribute::to_entry).collect(),
        ))
    }
}

///
/// TESTS
///

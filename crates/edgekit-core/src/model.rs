use crate::{hydrate::FieldError, traits::Entity, value::Value};
use std::fmt;
use thiserror::Error as ThisError;

///
/// FieldKind
///
/// Closed set of declared field shapes. Container kinds nest by `&'static`
/// reference so per-type field tables stay fully `const`.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldKind {
    Bool,
    Int,
    Uint,
    Float,
    Text,
    Timestamp,
    Enum(&'static str),
    Record(&'static str),
    List(&'static FieldKind),
    Map(&'static FieldKind),
    Value,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Uint => write!(f, "uint"),
            Self::Float => write!(f, "float"),
            Self::Text => write!(f, "text"),
            Self::Timestamp => write!(f, "timestamp"),
            Self::Enum(name) => write!(f, "enum<{name}>"),
            Self::Record(name) => write!(f, "record<{name}>"),
            Self::List(element) => write!(f, "list<{element}>"),
            Self::Map(element) => write!(f, "map<{element}>"),
            Self::Value => write!(f, "value"),
        }
    }
}

///
/// FieldModel
///
/// One row of a type's field-registration table: the wire name, the declared
/// kind, an optional typed setter, and a getter. Hydration silently skips
/// rows with no setter; their keys may still appear in source maps.
///

pub struct FieldModel<E> {
    pub name: &'static str,
    pub kind: FieldKind,
    pub setter: Option<fn(&mut E, Value) -> Result<(), FieldError>>,
    pub getter: fn(&E) -> Option<Value>,
}

impl<E> Clone for FieldModel<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for FieldModel<E> {}

///
/// EntityModel
///
/// Erased per-type descriptor, detached from the entity's Rust type so tests
/// and tooling can inspect tables uniformly.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntityModel {
    pub entity_name: &'static str,
    pub id_field: &'static str,
    pub fields: Vec<(&'static str, FieldKind)>,
}

impl EntityModel {
    #[must_use]
    pub fn of<E: Entity>() -> Self {
        Self {
            entity_name: E::ENTITY_NAME,
            id_field: E::ID_FIELD,
            fields: E::FIELDS
                .iter()
                .map(|field| (field.name, field.kind))
                .collect(),
        }
    }

    /// Table consistency: unique field names, identity field declared.
    pub fn check(&self) -> Result<(), ModelError> {
        for (position, (name, _)) in self.fields.iter().enumerate() {
            if self.fields[..position].iter().any(|(seen, _)| seen == name) {
                return Err(ModelError::DuplicateField {
                    entity: self.entity_name,
                    name: (*name).to_string(),
                });
            }
        }

        if !self.fields.iter().any(|(name, _)| *name == self.id_field) {
            return Err(ModelError::UnknownIdField {
                entity: self.entity_name,
                id_field: self.id_field.to_string(),
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn field_kind(&self, name: &str) -> Option<FieldKind> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, kind)| *kind)
    }
}

///
/// ModelError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ModelError {
    #[error("{entity}: duplicate field `{name}`")]
    DuplicateField { entity: &'static str, name: String },
    #[error("{entity}: identity field `{id_field}` is not declared")]
    UnknownIdField {
        entity: &'static str,
        id_field: String,
    },
}

///
/// TESTS
///

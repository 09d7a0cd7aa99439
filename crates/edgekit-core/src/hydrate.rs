use crate::{
    model::FieldKind,
    traits::Entity,
    value::{ValueKind, ValueMap},
};
use std::fmt;
use thiserror::Error as ThisError;

// Module: hydrate
// Responsibility: drive a type's field table over a source map exactly once,
// at construction. Unmatched keys are ignored; rows without setters are
// skipped; the first coercion failure aborts with the full field path.
// Does not own: field coercion rules (FieldType) or table layout (model).

///
/// hydrate
///
/// Build an entity from an untyped key/value map. For every table row with a
/// setter whose wire name appears in `values`, the matching entry is removed
/// from the map and pushed through the setter. Everything left over in
/// `values` is dropped without error.
///
pub fn hydrate<E: Entity>(mut values: ValueMap) -> Result<E, HydrateError> {
    let mut entity = E::default();

    for field in E::FIELDS {
        let Some(setter) = field.setter else {
            continue;
        };
        let Some(value) = values.take(field.name) else {
            continue;
        };

        setter(&mut entity, value)
            .map_err(|error| error.into_hydrate(E::ENTITY_NAME, field.name))?;
    }

    Ok(entity)
}

///
/// PathSegment
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PathSegment {
    Field(&'static str),
    Index(usize),
}

///
/// FieldPath
///
/// Segments from an entity's root to the value that failed coercion,
/// rendered as `credentials[0].status`.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push_front(&mut self, segment: PathSegment) {
        self.0.insert(0, segment);
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if position > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{name}")?;
                }
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }

        Ok(())
    }
}

///
/// FieldError
///
/// A value could not be coerced to a field's declared kind. Carries the path
/// segments below the field where coercion actually failed; the hydration
/// driver prepends the field name and entity when surfacing it.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("expected {expected}, found {found}")]
pub struct FieldError {
    pub expected: FieldKind,
    pub found: ValueKind,
    path: FieldPath,
}

impl FieldError {
    #[must_use]
    pub fn mismatch(expected: FieldKind, found: ValueKind) -> Self {
        Self {
            expected,
            found,
            path: FieldPath::new(),
        }
    }

    /// Record that this failure happened one container level down.
    #[must_use]
    pub fn nested(mut self, segment: PathSegment) -> Self {
        self.path.push_front(segment);
        self
    }

    pub(crate) fn into_hydrate(self, entity: &'static str, field: &'static str) -> HydrateError {
        let mut path = self.path;
        path.push_front(PathSegment::Field(field));

        HydrateError::TypeMismatch {
            entity,
            path,
            expected: self.expected,
            found: self.found,
        }
    }
}

///
/// HydrateError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum HydrateError {
    #[error("{entity}: field `{path}` expected {expected}, found {found}")]
    TypeMismatch {
        entity: &'static str,
        path: FieldPath,
        expected: FieldKind,
        found: ValueKind,
    },
}

impl HydrateError {
    /// Demote to a field-level failure, keeping the path for the outer record.
    #[must_use]
    pub fn into_field_error(self) -> FieldError {
        match self {
            Self::TypeMismatch {
                path,
                expected,
                found,
                ..
            } => FieldError {
                expected,
                found,
                path,
            },
        }
    }
}

///
/// TESTS
///

use crate::{
    copy::DeepCopy,
    hydrate::{self, FieldError, HydrateError, PathSegment},
    model::{EntityModel, FieldKind, FieldModel},
    value::{Value, ValueMap},
};
use std::fmt::Debug;

///
/// EntityIdentity
///
/// Naming contract for a record type: its wire name and the field holding
/// its natural key. The identity field defaults to `name`; a variant may
/// override it (developers key on `email`, credentials on `consumerKey`).
///

pub trait EntityIdentity {
    const ENTITY_NAME: &'static str;
    const ID_FIELD: &'static str = "name";
}

///
/// FieldType
///
/// Coercion between untyped `Value`s and a field's Rust type. `from_value`
/// is the only place hydration type errors originate; `to_value` returning
/// `None` omits the field from serialized maps.
///

pub trait FieldType: Sized {
    const KIND: FieldKind;

    fn from_value(value: Value) -> Result<Self, FieldError>;

    fn to_value(&self) -> Option<Value>;

    /// Hydrate an optional field: `Null` reads as unset, anything else
    /// coerces through `from_value`. Types with wire-level "unset" spellings
    /// beyond `Null` override this.
    fn from_value_opt(value: Value) -> Result<Option<Self>, FieldError> {
        match value {
            Value::Null => Ok(None),
            other => Self::from_value(other).map(Some),
        }
    }
}

impl<T: FieldType> FieldType for Option<T> {
    const KIND: FieldKind = T::KIND;

    fn from_value(value: Value) -> Result<Self, FieldError> {
        T::from_value_opt(value)
    }

    fn to_value(&self) -> Option<Value> {
        self.as_ref().and_then(T::to_value)
    }
}

impl<T: FieldType> FieldType for Vec<T> {
    const KIND: FieldKind = FieldKind::List(&T::KIND);

    fn from_value(value: Value) -> Result<Self, FieldError> {
        match value {
            Value::List(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    T::from_value(item).map_err(|error| error.nested(PathSegment::Index(index)))
                })
                .collect(),
            other => Err(FieldError::mismatch(Self::KIND, other.kind())),
        }
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::List(self.iter().filter_map(T::to_value).collect()))
    }
}

// Untyped passthrough. A `Null` field serializes to nothing, matching the
// unset-scalar rule.
impl FieldType for Value {
    const KIND: FieldKind = FieldKind::Value;

    fn from_value(value: Value) -> Result<Self, FieldError> {
        Ok(value)
    }

    fn to_value(&self) -> Option<Value> {
        match self {
            Self::Null => None,
            other => Some(other.clone()),
        }
    }
}

impl FieldType for ValueMap {
    const KIND: FieldKind = FieldKind::Map(&FieldKind::Value);

    fn from_value(value: Value) -> Result<Self, FieldError> {
        match value {
            Value::Map(map) => Ok(map),
            other => Err(FieldError::mismatch(Self::KIND, other.kind())),
        }
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::Map(self.clone()))
    }
}

///
/// Entity
///
/// The assembled record contract: a static field table, one hydration path
/// (`from_values`, construction only), identity access through the declared
/// identity field, and deep copy. Mutation after construction goes through
/// the concrete type's own setters.
///

pub trait Entity:
    EntityIdentity + DeepCopy + Clone + Debug + Default + PartialEq + Sized + 'static
{
    const FIELDS: &'static [FieldModel<Self>];

    /// Construct from an untyped key/value map. Declared fields with a
    /// matching key hydrate through their setter; unmatched keys are
    /// silently dropped.
    fn from_values(values: ValueMap) -> Result<Self, HydrateError> {
        hydrate::hydrate(values)
    }

    /// Project every present field back into a key/value map under its wire
    /// name. Unset fields contribute nothing.
    fn to_values(&self) -> ValueMap {
        let mut values = ValueMap::with_capacity(Self::FIELDS.len());
        for field in Self::FIELDS {
            if let Some(value) = (field.getter)(self) {
                values.insert(field.name, value);
            }
        }

        values
    }

    /// Read one declared field through the table.
    fn field_value(&self, name: &str) -> Option<Value> {
        let field = Self::FIELDS.iter().find(|field| field.name == name)?;
        (field.getter)(self)
    }

    /// The record's natural key: the current value of the identity field,
    /// or `None` while unset.
    fn id(&self) -> Option<String> {
        match self.field_value(Self::ID_FIELD)? {
            Value::Text(text) => Some(text),
            other => Some(other.to_string()),
        }
    }

    #[must_use]
    fn model() -> EntityModel {
        EntityModel::of::<Self>()
    }
}

///
/// TESTS
///

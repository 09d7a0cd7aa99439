use crate::{
    hydrate::FieldError,
    model::FieldKind,
    value::Value,
};

///
/// scalar_field_type
///
/// Registers a scalar for field use: a `FieldType` impl. The blanket
/// `Option` impl in `traits` makes `Null` read as unset and unset fields
/// serialize to nothing.
///
macro_rules! scalar_field_type {
    ($scalar:ty, $kind:expr, from: |$value:ident| $from:expr, to: |$this:ident| $to:expr) => {
        impl crate::traits::FieldType for $scalar {
            const KIND: crate::model::FieldKind = $kind;

            fn from_value(value: crate::value::Value) -> Result<Self, crate::hydrate::FieldError> {
                let $value = value;
                $from
            }

            fn to_value(&self) -> Option<crate::value::Value> {
                let $this = self;
                Some($to)
            }
        }
    };
}

///
/// copy_by_value
///
/// `DeepCopy` for types with no nested mutable state.
///
macro_rules! copy_by_value {
    ($( $scalar:ty ),+ $(,)?) => {
        $(
            impl crate::copy::DeepCopy for $scalar {
                fn deep_copy(&self) -> Self {
                    self.clone()
                }
            }
        )+
    };
}

scalar_field_type!(String, FieldKind::Text,
    from: |value| match value {
        Value::Text(text) => Ok(text),
        other => Err(FieldError::mismatch(FieldKind::Text, other.kind())),
    },
    to: |this| Value::Text(this.clone()));

scalar_field_type!(bool, FieldKind::Bool,
    from: |value| match value {
        Value::Bool(flag) => Ok(flag),
        other => Err(FieldError::mismatch(FieldKind::Bool, other.kind())),
    },
    to: |this| Value::Bool(*this));

scalar_field_type!(i64, FieldKind::Int,
    from: |value| match value {
        Value::Int(int) => Ok(int),
        Value::Uint(uint) => i64::try_from(uint)
            .map_err(|_| FieldError::mismatch(FieldKind::Int, crate::value::ValueKind::Uint)),
        other => Err(FieldError::mismatch(FieldKind::Int, other.kind())),
    },
    to: |this| Value::Int(*this));

scalar_field_type!(u64, FieldKind::Uint,
    from: |value| match value {
        Value::Uint(uint) => Ok(uint),
        Value::Int(int) => u64::try_from(int)
            .map_err(|_| FieldError::mismatch(FieldKind::Uint, crate::value::ValueKind::Int)),
        other => Err(FieldError::mismatch(FieldKind::Uint, other.kind())),
    },
    to: |this| Value::Uint(*this));

copy_by_value!(String, bool, i64, u64);

///
/// TESTS
///

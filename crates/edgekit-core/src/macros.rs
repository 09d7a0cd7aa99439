///
/// entity
///
/// Declares the behavior of a record type over a hand-written struct: the
/// field-registration table (wire name, kind, setter, getter per row), the
/// identity consts, deep copy, and nesting as a field value. Rows marked
/// `[readonly]` get no setter, so hydration skips their keys.
///
/// ```ignore
/// entity! {
///     Developer {
///         name: "developer",
///         id_field: "email",
///         fields: [
///             email => email: Option<String>,
///             firstName => first_name: Option<String>,
///         ],
///     }
/// }
/// ```
///
#[macro_export]
macro_rules! entity {
    (
        $entity:ident {
            name: $entity_name:literal,
            $( id_field: $id_field:literal, )?
            fields: [
                $( $wire:ident => $field:ident : $field_ty:ty $( [$flag:ident] )? ),* $(,)?
            ] $(,)?
        }
    ) => {
        impl $crate::traits::EntityIdentity for $entity {
            const ENTITY_NAME: &'static str = $entity_name;
            $( const ID_FIELD: &'static str = $id_field; )?
        }

        impl $crate::traits::Entity for $entity {
            const FIELDS: &'static [$crate::model::FieldModel<Self>] = &[
                $(
                    $crate::model::FieldModel {
                        name: stringify!($wire),
                        kind: <$field_ty as $crate::traits::FieldType>::KIND,
                        setter: $crate::entity!(@setter $entity, $field, $field_ty $(, $flag)?),
                        getter: |entity: &$entity| {
                            $crate::traits::FieldType::to_value(&entity.$field)
                        },
                    },
                )*
            ];
        }

        impl $crate::copy::DeepCopy for $entity {
            fn deep_copy(&self) -> Self {
                Self {
                    $( $field: $crate::copy::DeepCopy::deep_copy(&self.$field), )*
                }
            }
        }

        impl $crate::traits::FieldType for $entity {
            const KIND: $crate::model::FieldKind =
                $crate::model::FieldKind::Record($entity_name);

            fn from_value(
                value: $crate::value::Value,
            ) -> Result<Self, $crate::hydrate::FieldError> {
                match value {
                    $crate::value::Value::Map(values) => {
                        <Self as $crate::traits::Entity>::from_values(values)
                            .map_err($crate::hydrate::HydrateError::into_field_error)
                    }
                    other => Err($crate::hydrate::FieldError::mismatch(
                        <Self as $crate::traits::FieldType>::KIND,
                        other.kind(),
                    )),
                }
            }

            fn to_value(&self) -> Option<$crate::value::Value> {
                Some($crate::value::Value::Map($crate::traits::Entity::to_values(
                    self,
                )))
            }
        }
    };

    (@setter $entity:ident, $field:ident, $field_ty:ty) => {
        Some(|entity: &mut $entity, value: $crate::value::Value| {
            entity.$field = <$field_ty as $crate::traits::FieldType>::from_value(value)?;
            Ok(())
        })
    };
    (@setter $entity:ident, $field:ident, $field_ty:ty, readonly) => {
        None
    };
}

// Module: macros
// Responsibility: declaration helper for wire-spelled enums. Generates the
// enum, `as_str`, `Display`, `FromStr` (via `ParseEnumError` at the call
// site), `DeepCopy`, and `FieldType` for the enum; the blanket impl in
// `edgekit_core::traits` covers its `Option`.

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $( $variant:ident => $wire:literal ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub enum $name {
            $( $variant, )*
        }

        impl $name {
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $wire => Ok(Self::$variant), )*
                    _ => Err(ParseEnumError {
                        name: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl ::edgekit_core::copy::DeepCopy for $name {
            fn deep_copy(&self) -> Self {
                *self
            }
        }

        impl ::edgekit_core::traits::FieldType for $name {
            const KIND: ::edgekit_core::model::FieldKind =
                ::edgekit_core::model::FieldKind::Enum($kind);

            fn from_value(
                value: ::edgekit_core::value::Value,
            ) -> Result<Self, ::edgekit_core::hydrate::FieldError> {
                match value {
                    ::edgekit_core::value::Value::Text(text) => text.parse().map_err(|_| {
                        ::edgekit_core::hydrate::FieldError::mismatch(
                            Self::KIND,
                            ::edgekit_core::value::ValueKind::Text,
                        )
                    }),
                    other => Err(::edgekit_core::hydrate::FieldError::mismatch(
                        Self::KIND,
                        other.kind(),
                    )),
                }
            }

            fn to_value(&self) -> Option<::edgekit_core::value::Value> {
                Some(::edgekit_core::value::Value::Text(self.as_str().to_string()))
            }
        }
    };
}

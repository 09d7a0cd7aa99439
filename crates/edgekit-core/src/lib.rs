//! Entity hydration, identity, and deep-copy runtime shared by the catalogue
//! and client crates, plus the `entity!` declaration macro and the ergonomics
//! exported via the `prelude`.
#![warn(unreachable_pub)]

#[macro_use]
pub(crate) mod scalars;

// public exports are one module level down
pub mod copy;
pub mod hydrate;
pub mod model;
pub mod traits;
pub mod types;
pub mod value;

mod macros;

#[cfg(test)]
pub(crate) mod fixtures;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No engine internals or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        copy::DeepCopy,
        model::{EntityModel, FieldKind},
        traits::{Entity, EntityIdentity, FieldType},
        types::{Float64, Timestamp},
        value::{Value, ValueMap},
    };
}

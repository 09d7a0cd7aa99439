use crate::{
    hydrate::FieldError,
    model::FieldKind,
    value::{Value, ValueKind},
};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, hash::Hash};
use thiserror::Error as ThisError;

///
/// Float64
///
/// Finite `f64` with total equality and ordering. Construction rejects NaN
/// and infinities; negative zero canonicalizes to positive zero so bitwise
/// equality is sound.
///

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Float64(f64);

impl Float64 {
    pub const ZERO: Self = Self(0.0);

    pub const fn try_new(value: f64) -> Result<Self, Float64Error> {
        if !value.is_finite() {
            return Err(Float64Error::NotFinite { value });
        }
        if value == 0.0 {
            return Ok(Self(0.0));
        }

        Ok(Self(value))
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for Float64 {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Float64 {}

impl PartialOrd for Float64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Float64 {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for Float64 {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for Float64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for Float64 {
    type Error = Float64Error;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Float64> for f64 {
    fn from(float: Float64) -> Self {
        float.get()
    }
}

#[allow(clippy::cast_precision_loss)]
scalar_field_type!(Float64, FieldKind::Float,
    from: |value| match value {
        Value::Float(float) => Ok(float),
        Value::Int(int) => Self::try_new(int as f64)
            .map_err(|_| FieldError::mismatch(FieldKind::Float, ValueKind::Int)),
        Value::Uint(uint) => Self::try_new(uint as f64)
            .map_err(|_| FieldError::mismatch(FieldKind::Float, ValueKind::Uint)),
        other => Err(FieldError::mismatch(FieldKind::Float, other.kind())),
    },
    to: |this| Value::Float(*this));

copy_by_value!(Float64);

///
/// Float64Error
///

#[derive(Clone, Copy, Debug, PartialEq, ThisError)]
pub enum Float64Error {
    #[error("not a finite number: {value}")]
    NotFinite { value: f64 },
}

///
/// TESTS
///

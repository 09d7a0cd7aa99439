use crate::{
    hydrate::FieldError,
    model::FieldKind,
    traits::FieldType,
    value::{Value, ValueKind},
};
use serde::{Deserialize, Serialize};
use std::{fmt, ops::Add, ops::Sub};
use thiserror::Error as ThisError;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

///
/// Timestamp
///
/// Milliseconds since the Unix epoch, the unit audit fields arrive in on the
/// wire (`createdAt`, `lastModifiedAt`, `issuedAt`, `expiresAt`). Arithmetic
/// saturates instead of wrapping.
///

#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const EPOCH: Self = Self(0);

    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub const fn from_seconds(seconds: u64) -> Self {
        Self(seconds.saturating_mul(1_000))
    }

    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Whole seconds, truncating the millisecond remainder.
    #[must_use]
    pub const fn as_seconds(self) -> u64 {
        self.0 / 1_000
    }

    /// Parse an RFC 3339 datetime. Datetimes before the epoch are rejected.
    pub fn parse_rfc3339(input: &str) -> Result<Self, TimestampError> {
        let parsed = OffsetDateTime::parse(input, &Rfc3339).map_err(|error| {
            TimestampError::Parse {
                message: error.to_string(),
            }
        })?;

        let nanos = parsed.unix_timestamp_nanos();
        let millis = u64::try_from(nanos / 1_000_000).map_err(|_| TimestampError::BeforeEpoch)?;

        Ok(Self(millis))
    }

    /// Parse either raw epoch milliseconds or an RFC 3339 datetime.
    pub fn parse_flexible(input: &str) -> Result<Self, TimestampError> {
        if let Ok(millis) = input.parse::<u64>() {
            return Ok(Self::from_millis(millis));
        }

        Self::parse_rfc3339(input)
    }

    pub fn to_rfc3339(self) -> Result<String, TimestampError> {
        let nanos = i128::from(self.0) * 1_000_000;
        let datetime = OffsetDateTime::from_unix_timestamp_nanos(nanos)
            .map_err(|_| TimestampError::OutOfRange)?;

        datetime
            .format(&Rfc3339)
            .map_err(|_| TimestampError::OutOfRange)
    }

    #[must_use]
    pub const fn saturating_add(self, millis: u64) -> Self {
        Self(self.0.saturating_add(millis))
    }

    #[must_use]
    pub const fn saturating_sub(self, millis: u64) -> Self {
        Self(self.0.saturating_sub(millis))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add<u64> for Timestamp {
    type Output = Self;

    fn add(self, millis: u64) -> Self {
        self.saturating_add(millis)
    }
}

impl Sub<u64> for Timestamp {
    type Output = Self;

    fn sub(self, millis: u64) -> Self {
        self.saturating_sub(millis)
    }
}

impl From<u64> for Timestamp {
    fn from(millis: u64) -> Self {
        Self(millis)
    }
}

impl From<Timestamp> for u64 {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.0
    }
}

impl FieldType for Timestamp {
    const KIND: FieldKind = FieldKind::Timestamp;

    fn from_value(value: Value) -> Result<Self, FieldError> {
        match value {
            Value::Uint(millis) => Ok(Self::from_millis(millis)),
            Value::Int(millis) => u64::try_from(millis)
                .map(Self::from_millis)
                .map_err(|_| FieldError::mismatch(FieldKind::Timestamp, ValueKind::Int)),
            Value::Text(text) => Self::parse_flexible(&text)
                .map_err(|_| FieldError::mismatch(FieldKind::Timestamp, ValueKind::Text)),
            other => Err(FieldError::mismatch(FieldKind::Timestamp, other.kind())),
        }
    }

    fn to_value(&self) -> Option<Value> {
        Some(Value::Uint(self.0))
    }

    fn from_value_opt(value: Value) -> Result<Option<Self>, FieldError> {
        match value {
            Value::Null => Ok(None),
            // the wire sends -1 for credentials that never expire
            Value::Int(millis) if millis < 0 => Ok(None),
            other => Self::from_value(other).map(Some),
        }
    }
}

copy_by_value!(Timestamp);

///
/// TimestampError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum TimestampError {
    #[error("timestamp predates the epoch")]
    BeforeEpoch,
    #[error("timestamp out of representable range")]
    OutOfRange,
    #[error("invalid timestamp: {message}")]
    Parse { message: String },
}

///
/// TESTS
///

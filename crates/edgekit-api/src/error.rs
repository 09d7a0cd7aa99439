use crate::transport::TransportError;
use edgekit_core::hydrate::HydrateError;
use thiserror::Error as ThisError;

///
/// ApiError
///
/// Controller-level failures. Transport and hydration errors pass through;
/// the remaining variants are semantic conditions controllers derive from
/// otherwise-successful exchanges.
///

#[remain::sorted]
#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ApiError {
    #[error("no developer owns an app named `{app}`")]
    DeveloperNotFound { app: String },

    #[error("{entity} `{id}` was not found")]
    EntityNotFound { entity: &'static str, id: String },

    #[error(transparent)]
    Hydrate(#[from] HydrateError),

    #[error("{entity} has no identity value to address it by")]
    MissingIdentity { entity: &'static str },

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("unexpected payload shape in {context}")]
    UnexpectedPayload { context: &'static str },
}

///
/// TESTS
///

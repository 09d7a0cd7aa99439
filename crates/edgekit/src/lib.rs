//! Synchronous client for Apigee-Edge-style management APIs: typed entity
//! hydration and deep copy from `edgekit-core`, the catalogue and
//! controllers from `edgekit-api`, and a journaling `Client` to drive them.

#![warn(unreachable_pub)]

pub use edgekit_api as api;
pub use edgekit_core as core;

mod client;
mod journal;

pub use client::{Client, ClientOptions};
pub use journal::{Journal, JournalEntry, JournalOutcome, JournaledTransport};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod prelude {
    pub use crate::{Client, ClientOptions, Journal, JournalEntry, JournalOutcome};
    pub use edgekit_api::{
        attributes::{Attribute, Attributes},
        controller::{
            ApiProductController, DeveloperAppController, DeveloperController,
            EntityController as _, ListController as _, StatusController as _,
        },
        entities::{
            ApiProduct, AppCredential, ApprovalType, CredentialProduct, Developer, DeveloperApp,
            EntityStatus, StatusAction,
        },
        error::ApiError,
        transport::{
            EndpointPath, Method, Pager, Request, StubTransport, Transport, TransportError,
        },
    };
    pub use edgekit_core::prelude::*;
}

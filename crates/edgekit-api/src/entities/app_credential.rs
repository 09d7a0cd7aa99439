use crate::{attributes::Attributes, entities::status::EntityStatus};
use edgekit_core::{entity, types::Timestamp};

///
/// CredentialProduct
///
/// One API product granted to a credential, with its own approval state.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CredentialProduct {
    apiproduct: Option<String>,
    status: Option<EntityStatus>,
}

entity! {
    CredentialProduct {
        name: "credential_product",
        id_field: "apiproduct",
        fields: [
            apiproduct => apiproduct: Option<String>,
            status => status: Option<EntityStatus>,
        ],
    }
}

impl CredentialProduct {
    #[must_use]
    pub fn new(apiproduct: impl Into<String>) -> Self {
        Self {
            apiproduct: Some(apiproduct.into()),
            status: None,
        }
    }

    #[must_use]
    pub fn apiproduct(&self) -> Option<&str> {
        self.apiproduct.as_deref()
    }

    #[must_use]
    pub const fn status(&self) -> Option<EntityStatus> {
        self.status
    }
}

///
/// AppCredential
///
/// A consumer key/secret pair issued to a developer app. Keyed by the
/// consumer key. `expires_at` is `None` for keys that never expire; the
/// service spells that as `-1` on the wire.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AppCredential {
    consumer_key: Option<String>,
    consumer_secret: Option<String>,
    status: Option<EntityStatus>,
    scopes: Vec<String>,
    attributes: Attributes,
    api_products: Vec<CredentialProduct>,
    issued_at: Option<Timestamp>,
    expires_at: Option<Timestamp>,
}

entity! {
    AppCredential {
        name: "app_credential",
        id_field: "consumerKey",
        fields: [
            consumerKey => consumer_key: Option<String>,
            consumerSecret => consumer_secret: Option<String>,
            status => status: Option<EntityStatus>,
            scopes => scopes: Vec<String>,
            attributes => attributes: Attributes,
            apiProducts => api_products: Vec<CredentialProduct>,
            issuedAt => issued_at: Option<Timestamp>,
            expiresAt => expires_at: Option<Timestamp>,
        ],
    }
}

impl AppCredential {
    #[must_use]
    pub fn consumer_key(&self) -> Option<&str> {
        self.consumer_key.as_deref()
    }

    #[must_use]
    pub fn consumer_secret(&self) -> Option<&str> {
        self.consumer_secret.as_deref()
    }

    #[must_use]
    pub const fn status(&self) -> Option<EntityStatus> {
        self.status
    }

    #[must_use]
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    #[must_use]
    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub const fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    #[must_use]
    pub fn api_products(&self) -> &[CredentialProduct] {
        &self.api_products
    }

    #[must_use]
    pub const fn issued_at(&self) -> Option<Timestamp> {
        self.issued_at
    }

    #[must_use]
    pub const fn expires_at(&self) -> Option<Timestamp> {
        self.expires_at
    }
}

///
/// TESTS
///

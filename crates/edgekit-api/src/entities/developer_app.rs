use crate::{
    attributes::Attributes,
    entities::{app_credential::AppCredential, status::EntityStatus},
};
use edgekit_core::{entity, types::Timestamp};

///
/// DeveloperApp
///
/// An app registered under a developer. Keyed by name within that
/// developer. Credentials are issued by the service and arrive nested in
/// responses, each carrying its own granted products.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DeveloperApp {
    app_id: Option<String>,
    developer_id: Option<String>,
    name: Option<String>,
    status: Option<EntityStatus>,
    callback_url: Option<String>,
    app_family: Option<String>,
    scopes: Vec<String>,
    attributes: Attributes,
    credentials: Vec<AppCredential>,
    created_at: Option<Timestamp>,
    last_modified_at: Option<Timestamp>,
    expires_at: Option<Timestamp>,
}

entity! {
    DeveloperApp {
        name: "developer_app",
        fields: [
            appId => app_id: Option<String>,
            developerId => developer_id: Option<String>,
            name => name: Option<String>,
            status => status: Option<EntityStatus>,
            callbackUrl => callback_url: Option<String>,
            appFamily => app_family: Option<String>,
            scopes => scopes: Vec<String>,
            attributes => attributes: Attributes,
            credentials => credentials: Vec<AppCredential>,
            createdAt => created_at: Option<Timestamp>,
            lastModifiedAt => last_modified_at: Option<Timestamp>,
            expiresAt => expires_at: Option<Timestamp>,
        ],
    }
}

impl DeveloperApp {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn app_id(&self) -> Option<&str> {
        self.app_id.as_deref()
    }

    #[must_use]
    pub fn developer_id(&self) -> Option<&str> {
        self.developer_id.as_deref()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub const fn status(&self) -> Option<EntityStatus> {
        self.status
    }

    #[must_use]
    pub fn callback_url(&self) -> Option<&str> {
        self.callback_url.as_deref()
    }

    pub fn set_callback_url(&mut self, url: impl Into<String>) {
        self.callback_url = Some(url.into());
    }

    #[must_use]
    pub fn app_family(&self) -> Option<&str> {
        self.app_family.as_deref()
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
    pub fn credentials(&self) -> &[AppCredential] {
        &self.credentials
    }

    #[must_use]
    pub const fn created_at(&self) -> Option<Timestamp> {
        self.created_at
    }

    #[must_use]
    pub const fn last_modified_at(&self) -> Option<Timestamp> {
        self.last_modified_at
    }

    #[must_use]
    pub const fn expires_at(&self) -> Option<Timestamp> {
        self.expires_at
    }
}

///
/// TESTS
///

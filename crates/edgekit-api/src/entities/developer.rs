use crate::{attributes::Attributes, entities::status::EntityStatus};
use edgekit_core::{entity, types::Timestamp};

///
/// Developer
///
/// An API developer account. Keyed by email address rather than by name;
/// `developer_id`, app and company memberships, and the audit timestamps
/// are owned by the service and only ever arrive in responses.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Developer {
    email: Option<String>,
    developer_id: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    user_name: Option<String>,
    status: Option<EntityStatus>,
    attributes: Attributes,
    apps: Vec<String>,
    companies: Vec<String>,
    organization_name: Option<String>,
    created_at: Option<Timestamp>,
    last_modified_at: Option<Timestamp>,
}

entity! {
    Developer {
        name: "developer",
        id_field: "email",
        fields: [
            email => email: Option<String>,
            developerId => developer_id: Option<String>,
            firstName => first_name: Option<String>,
            lastName => last_name: Option<String>,
            userName => user_name: Option<String>,
            status => status: Option<EntityStatus>,
            attributes => attributes: Attributes,
            apps => apps: Vec<String>,
            companies => companies: Vec<String>,
            organizationName => organization_name: Option<String>,
            createdAt => created_at: Option<Timestamp>,
            lastModifiedAt => last_modified_at: Option<Timestamp>,
        ],
    }
}

impl Developer {
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = Some(email.into());
    }

    #[must_use]
    pub fn developer_id(&self) -> Option<&str> {
        self.developer_id.as_deref()
    }

    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn set_first_name(&mut self, name: impl Into<String>) {
        self.first_name = Some(name.into());
    }

    #[must_use]
    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn set_last_name(&mut self, name: impl Into<String>) {
        self.last_name = Some(name.into());
    }

    #[must_use]
    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn set_user_name(&mut self, name: impl Into<String>) {
        self.user_name = Some(name.into());
    }

    #[must_use]
    pub const fn status(&self) -> Option<EntityStatus> {
        self.status
    }

    #[must_use]
    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub const fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    #[must_use]
    pub fn apps(&self) -> &[String] {
        &self.apps
    }

    #[must_use]
    pub fn companies(&self) -> &[String] {
        &self.companies
    }

    #[must_use]
    pub fn organization_name(&self) -> Option<&str> {
        self.organization_name.as_deref()
    }

    #[must_use]
    pub const fn created_at(&self) -> Option<Timestamp> {
        self.created_at
    }

    #[must_use]
    pub const fn last_modified_at(&self) -> Option<Timestamp> {
        self.last_modified_at
    }
}

///
/// TESTS
///

use crate::journal::{Journal, JournaledTransport};
use edgekit_api::{
    controller::{ApiProductController, DeveloperAppController, DeveloperController},
    transport::{Pager, Transport},
};
use serde::{Deserialize, Serialize};

///
/// ClientOptions
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct ClientOptions {
    /// How many transport exchanges the journal retains.
    pub journal_capacity: usize,

    /// Applied to pagers handed out by `Client::pager`.
    pub default_page_size: Option<u32>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            journal_capacity: 32,
            default_page_size: None,
        }
    }
}

///
/// Client
///
/// Entry point for one organization on one transport. Controllers borrow
/// the client's journaled transport, so every exchange they make lands in
/// the journal.
///

pub struct Client {
    transport: JournaledTransport,
    organization: String,
    options: ClientOptions,
}

impl Client {
    #[must_use]
    pub fn new(transport: Box<dyn Transport>, organization: impl Into<String>) -> Self {
        Self::with_options(transport, organization, ClientOptions::default())
    }

    #[must_use]
    pub fn with_options(
        transport: Box<dyn Transport>,
        organization: impl Into<String>,
        options: ClientOptions,
    ) -> Self {
        Self {
            transport: JournaledTransport::new(transport, options.journal_capacity),
            organization: organization.into(),
            options,
        }
    }

    #[must_use]
    pub fn organization(&self) -> &str {
        &self.organization
    }

    #[must_use]
    pub const fn options(&self) -> &ClientOptions {
        &self.options
    }

    #[must_use]
    pub const fn journal(&self) -> &Journal {
        self.transport.journal()
    }

    /// A pager preloaded with the configured default page size.
    #[must_use]
    pub fn pager(&self) -> Pager {
        match self.options.default_page_size {
            Some(limit) => Pager::new().limit(limit),
            None => Pager::new(),
        }
    }

    #[must_use]
    pub fn developers(&self) -> DeveloperController<'_> {
        DeveloperController::new(&self.transport, self.organization.clone())
    }

    #[must_use]
    pub fn developer_apps(&self, developer: impl Into<String>) -> DeveloperAppController<'_> {
        DeveloperAppController::new(&self.transport, self.organization.clone(), developer)
    }

    #[must_use]
    pub fn api_products(&self) -> ApiProductController<'_> {
        ApiProductController::new(&self.transport, self.organization.clone())
    }
}

///
/// TESTS
///

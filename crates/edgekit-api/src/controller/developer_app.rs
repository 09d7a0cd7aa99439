use crate::{
    controller::{EntityController, ListController, StatusController},
    entities::DeveloperApp,
    transport::{EndpointPath, Transport},
};

///
/// DeveloperAppController
///
/// `/organizations/{org}/developers/{developer}/apps`. Apps live under the
/// developer that owns them; `developer` is the owning email.
///

pub struct DeveloperAppController<'a> {
    transport: &'a dyn Transport,
    organization: String,
    developer: String,
}

impl<'a> DeveloperAppController<'a> {
    #[must_use]
    pub fn new(
        transport: &'a dyn Transport,
        organization: impl Into<String>,
        developer: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            organization: organization.into(),
            developer: developer.into(),
        }
    }

    #[must_use]
    pub fn developer(&self) -> &str {
        &self.developer
    }
}

impl EntityController for DeveloperAppController<'_> {
    type Entity = DeveloperApp;

    fn transport(&self) -> &dyn Transport {
        self.transport
    }

    fn base_path(&self) -> EndpointPath {
        EndpointPath::organization(&self.organization)
            .join("developers")
            .join(&self.developer)
            .join("apps")
    }
}

impl ListController for DeveloperAppController<'_> {}

impl StatusController for DeveloperAppController<'_> {}

///
/// TESTS
///

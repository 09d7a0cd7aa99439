use crate::{
    controller::{EntityController, ListController, hydrate_one},
    entities::Developer,
    error::ApiError,
    transport::{EndpointPath, Request, Transport},
};
use edgekit_core::value::Value;

///
/// DeveloperController
///
/// `/organizations/{org}/developers`. Developers are addressed by email.
///

pub struct DeveloperController<'a> {
    transport: &'a dyn Transport,
    organization: String,
}

impl<'a> DeveloperController<'a> {
    #[must_use]
    pub fn new(transport: &'a dyn Transport, organization: impl Into<String>) -> Self {
        Self {
            transport,
            organization: organization.into(),
        }
    }

    /// Reverse lookup: the developer that owns the app named `app_name`.
    ///
    /// The service answers `{ "developer": [ ... ] }`; an empty list is a
    /// successful reply meaning no developer owns such an app.
    pub fn developer_by_app(&self, app_name: &str) -> Result<Developer, ApiError> {
        let request = Request::get(self.base_path()).query("app", app_name);
        let value = self.transport.send(&request)?;

        let Value::Map(mut wrapper) = value else {
            return Err(ApiError::UnexpectedPayload {
                context: "developer lookup",
            });
        };
        let Some(Value::List(developers)) = wrapper.take("developer") else {
            return Err(ApiError::UnexpectedPayload {
                context: "developer lookup",
            });
        };

        let Some(first) = developers.into_iter().next() else {
            return Err(ApiError::DeveloperNotFound {
                app: app_name.to_string(),
            });
        };

        hydrate_one(first)
    }
}

impl EntityController for DeveloperController<'_> {
    type Entity = Developer;

    fn transport(&self) -> &dyn Transport {
        self.transport
    }

    fn base_path(&self) -> EndpointPath {
        EndpointPath::organization(&self.organization).join("developers")
    }
}

impl ListController for DeveloperController<'_> {}

///
/// TESTS
///

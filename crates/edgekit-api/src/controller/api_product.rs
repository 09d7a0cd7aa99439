use crate::{
    controller::{EntityController, ListController},
    entities::ApiProduct,
    transport::{EndpointPath, Transport},
};

///
/// ApiProductController
///
/// `/organizations/{org}/apiproducts`.
///

pub struct ApiProductController<'a> {
    transport: &'a dyn Transport,
    organization: String,
}

impl<'a> ApiProductController<'a> {
    #[must_use]
    pub fn new(transport: &'a dyn Transport, organization: impl Into<String>) -> Self {
        Self {
            transport,
            organization: organization.into(),
        }
    }
}

impl EntityController for ApiProductController<'_> {
    type Entity = ApiProduct;

    fn transport(&self) -> &dyn Transport {
        self.transport
    }

    fn base_path(&self) -> EndpointPath {
        EndpointPath::organization(&self.organization).join("apiproducts")
    }
}

impl ListController for ApiProductController<'_> {}

///
/// TESTS
///

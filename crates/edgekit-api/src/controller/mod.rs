use crate::{
    entities::status::StatusAction,
    error::ApiError,
    transport::{EndpointPath, Pager, Request, Transport, TransportError},
};
use edgekit_core::{
    traits::{Entity, EntityIdentity},
    value::Value,
};

pub mod api_product;
pub mod developer;
pub mod developer_app;

pub use api_product::ApiProductController;
pub use developer::DeveloperController;
pub use developer_app::DeveloperAppController;

// Module: controller
// Responsibility: turn entity operations into transport exchanges and turn
// replies back into entities. Path layout and response unwrapping live
// here; wire encoding and HTTP live behind `Transport`.

///
/// EntityController
///
/// CRUD over one entity kind. Implementors supply the transport and the
/// collection path; every operation is a single synchronous exchange.
///

pub trait EntityController {
    type Entity: Entity;

    fn transport(&self) -> &dyn Transport;

    /// Collection endpoint for this entity kind.
    fn base_path(&self) -> EndpointPath;

    fn entity_path(&self, id: &str) -> EndpointPath {
        self.base_path().join(id)
    }

    fn load(&self, id: &str) -> Result<Self::Entity, ApiError> {
        let request = Request::get(self.entity_path(id));
        let value = self
            .transport()
            .send(&request)
            .map_err(|error| not_found::<Self::Entity>(error, id))?;

        hydrate_one::<Self::Entity>(value)
    }

    fn create(&self, entity: &Self::Entity) -> Result<Self::Entity, ApiError> {
        let request = Request::post(self.base_path()).body(entity.to_values());
        let value = self.transport().send(&request)?;

        hydrate_one::<Self::Entity>(value)
    }

    fn update(&self, entity: &Self::Entity) -> Result<Self::Entity, ApiError> {
        let id = entity.id().ok_or(ApiError::MissingIdentity {
            entity: Self::Entity::ENTITY_NAME,
        })?;
        let request = Request::put(self.entity_path(&id)).body(entity.to_values());
        let value = self.transport().send(&request)?;

        hydrate_one::<Self::Entity>(value)
    }

    /// Delete on the service returns the final state of the entity.
    fn delete(&self, id: &str) -> Result<Self::Entity, ApiError> {
        let request = Request::delete(self.entity_path(id));
        let value = self
            .transport()
            .send(&request)
            .map_err(|error| not_found::<Self::Entity>(error, id))?;

        hydrate_one::<Self::Entity>(value)
    }
}

///
/// ListController
///
/// Paged listings. Without `expand` the service answers with a bare array
/// of names; with `expand=true` it wraps the full entities in an object
/// whose single key varies by entity kind, so the first value is taken.
///

pub trait ListController: EntityController {
    fn list_ids(&self, pager: &Pager) -> Result<Vec<String>, ApiError> {
        let request = pager.apply(Request::get(self.base_path()));
        let value = self.transport().send(&request)?;

        let Value::List(entries) = value else {
            return Err(ApiError::UnexpectedPayload {
                context: "id listing",
            });
        };

        entries
            .into_iter()
            .map(|entry| {
                entry.into_text().ok_or(ApiError::UnexpectedPayload {
                    context: "id listing",
                })
            })
            .collect()
    }

    fn list(&self, pager: &Pager) -> Result<Vec<Self::Entity>, ApiError> {
        let request = pager.apply(Request::get(self.base_path()).query("expand", "true"));
        let value = self.transport().send(&request)?;

        let Value::Map(wrapper) = value else {
            return Err(ApiError::UnexpectedPayload {
                context: "expanded listing",
            });
        };

        // an entirely empty wrapper object means an empty collection
        let Some((_, entries)) = wrapper.into_iter().next() else {
            return Ok(Vec::new());
        };
        let Value::List(entries) = entries else {
            return Err(ApiError::UnexpectedPayload {
                context: "expanded listing",
            });
        };

        entries
            .into_iter()
            .map(hydrate_one::<Self::Entity>)
            .collect()
    }
}

///
/// StatusController
///
/// Lifecycle changes ride on a POST to the entity with an `action` query
/// parameter and no body; the reply carries no entity.
///

pub trait StatusController: EntityController {
    fn set_status(&self, id: &str, action: StatusAction) -> Result<(), ApiError> {
        let request = Request::post(self.entity_path(id)).query("action", action.as_str());
        self.transport().send(&request)?;

        Ok(())
    }
}

fn hydrate_one<E: Entity>(value: Value) -> Result<E, ApiError> {
    let Value::Map(values) = value else {
        return Err(ApiError::UnexpectedPayload {
            context: "entity body",
        });
    };

    Ok(E::from_values(values)?)
}

fn not_found<E: Entity>(error: TransportError, id: &str) -> ApiError {
    match error {
        TransportError::Status { code: 404, .. } => ApiError::EntityNotFound {
            entity: E::ENTITY_NAME,
            id: id.to_string(),
        },
        other => ApiError::Transport(other),
    }
}

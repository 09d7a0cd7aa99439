pub mod api_product;
pub mod app_credential;
pub mod developer;
pub mod developer_app;
pub mod status;

pub use api_product::ApiProduct;
pub use app_credential::{AppCredential, CredentialProduct};
pub use developer::Developer;
pub use developer_app::DeveloperApp;
pub use status::{ApprovalType, EntityStatus, ParseEnumError, StatusAction};

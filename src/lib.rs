//! Swagger 1.2 documentation for CRUD resources.
//!
//! Describe each resource with a [`Controller`] (by hand, through
//! [`SwaggerResource`], or straight from a Sea-ORM entity), collect them in a
//! [`Release`] and mount [`Release::router`] next to the API:
//!
//! ```rust,ignore
//! let docs = Release::new(DocsConfig::from_env())
//!     .controller(Controller::from_entity::<vehicle::Entity>("vehicle", "vehicles").select("-vin"))
//!     .router()?;
//! let app = Router::new().nest("/api/v1", api.merge(docs));
//! ```

pub mod access;
pub mod config;
pub mod controller;
pub mod definition;
pub mod errors;
pub mod introspect;
pub mod listing;
pub mod models;
pub mod operations;
pub mod property;
pub mod routes;
pub mod schema;
pub mod select;
pub mod types;

pub use access::{FieldAccess, HiddenFields};
pub use config::{DocsConfig, Scheme};
pub use controller::{Controller, SwaggerResource};
pub use errors::SwaggerError;
pub use listing::Release;
pub use operations::Verb;
pub use routes::DocsApi;
pub use schema::{FieldType, Schema, SchemaPath};

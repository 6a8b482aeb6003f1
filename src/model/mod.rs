//! Domain models, operation parameters, and API DTOs.
//!
//! Each module holds the domain model for one entity, the parameter types
//! consumed by the service layer, and the serde DTOs exposed over HTTP.
//! Entity models from the database never cross the controller boundary;
//! repositories convert to domain models and controllers convert to DTOs.

pub mod api;
pub mod auth;
pub mod grade;
pub mod student;
pub mod subject;

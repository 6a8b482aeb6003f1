//! HTTP request handlers.
//!
//! Controllers validate request shape, convert DTOs to parameter models,
//! call the service layer, and convert domain models back to DTOs. Error
//! responses come from `AppError::into_response`.

pub mod auth;
pub mod grade;
pub mod student;
pub mod subject;

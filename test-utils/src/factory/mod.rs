//! Entity factories for seeding test databases.
//!
//! Each factory inserts a row with sensible defaults that individual tests
//! can override through the builder methods.

pub mod enrollment;
pub mod grade;
pub mod helpers;
pub mod student;
pub mod subject;

//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations
//! (CRUD) for each domain in the application. Repositories use SeaORM entity
//! models internally and return domain models to maintain separation between
//! the data layer and business logic layer. All database queries, inserts,
//! updates, and deletes are performed through these repositories.

pub mod credential;
pub mod enrollment;
pub mod grade;
pub mod student;
pub mod subject;

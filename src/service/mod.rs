//! Business logic layer between controllers and repositories.
//!
//! Services own the domain rules: grade uniqueness, roster population,
//! the ungraded-subjects set difference, and credential verification.
//! Controllers hand them parameter models and get domain models back.

pub mod auth;
pub mod grade;
pub mod student;
pub mod subject;

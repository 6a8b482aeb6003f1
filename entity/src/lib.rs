//! SeaORM entity definitions for the schoolbook database.
//!
//! One module per table. Relationships between tables are stored as plain
//! id references without foreign key constraints: deleting a student leaves
//! its id dangling in enrollments and grades, and reads resolve references
//! in memory.

pub mod credential;
pub mod enrollment;
pub mod grade;
pub mod prelude;
pub mod student;
pub mod subject;

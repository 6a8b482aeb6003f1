//! Student domain models and parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A student in the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// Storage-assigned identifier.
    pub id: i32,
    /// Display name of the student.
    pub name: String,
    /// Age in years.
    pub age: i32,
    /// Contact email. Not required to be unique.
    pub email: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl Student {
    /// Converts an entity model to a student domain model at the repository
    /// boundary.
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            age: entity.age,
            email: entity.email,
            created_at: entity.created_at,
        }
    }

    /// Converts the student domain model to a DTO for API responses.
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            name: self.name,
            age: self.age,
            email: self.email,
        }
    }
}

/// Parameters for creating a student.
#[derive(Debug, Clone)]
pub struct CreateStudentParam {
    pub name: String,
    pub age: i32,
    pub email: String,
}

/// Parameters for a partial student update.
///
/// `None` fields are left unchanged (merge semantics); only supplied fields
/// are written.
#[derive(Debug, Clone)]
pub struct UpdateStudentParam {
    pub id: i32,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentDto {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateStudentDto {
    pub name: String,
    pub age: i32,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateStudentDto {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
}

//! Subject domain models and parameters.
//!
//! A subject exists in two shapes: the bare record as stored, and the
//! populated form whose roster has been resolved to full student records
//! (the read-time join the catalog endpoints return).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::student::{Student, StudentDto};

/// A subject as stored, without its roster resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Subject {
    /// Storage-assigned identifier.
    pub id: i32,
    /// Display name of the subject.
    pub name: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl Subject {
    /// Converts an entity model to a subject domain model at the repository
    /// boundary.
    pub fn from_entity(entity: entity::subject::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
        }
    }

    /// Converts the bare subject to a DTO without roster, used inside joined
    /// grade responses.
    pub fn into_dto(self) -> SubjectDto {
        SubjectDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// A subject with its roster resolved to full student records.
///
/// The roster keeps enrollment insertion order and retains duplicate
/// entries, mirroring the append-only enroll operation.
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectWithStudents {
    pub id: i32,
    pub name: String,
    pub students: Vec<Student>,
}

impl SubjectWithStudents {
    /// Converts the populated subject to a DTO for API responses.
    pub fn into_dto(self) -> SubjectWithStudentsDto {
        SubjectWithStudentsDto {
            id: self.id,
            name: self.name,
            students: self.students.into_iter().map(|s| s.into_dto()).collect(),
        }
    }
}

/// Parameters for the wholesale roster replacement operation.
///
/// Overwrites both the subject name and the full roster, unlike the
/// append-only enroll operation.
#[derive(Debug, Clone)]
pub struct ReplaceEnrollmentParam {
    pub subject_id: i32,
    pub name: String,
    pub students: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubjectDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SubjectWithStudentsDto {
    pub id: i32,
    pub name: String,
    pub students: Vec<StudentDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateSubjectDto {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnrollDto {
    pub student_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReplaceEnrollmentDto {
    pub name: String,
    pub students: Vec<i32>,
}

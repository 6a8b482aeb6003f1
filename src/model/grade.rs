//! Grade domain models and parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    student::{Student, StudentDto},
    subject::{Subject, SubjectDto},
};

/// A grade as stored, referencing student and subject by id.
#[derive(Debug, Clone, PartialEq)]
pub struct Grade {
    /// Storage-assigned identifier.
    pub id: i32,
    /// Id of the graded student.
    pub student_id: i32,
    /// Id of the subject the grade was given in.
    pub subject_id: i32,
    /// Numeric score.
    pub score: f64,
    /// When the grade was recorded.
    pub created_at: DateTime<Utc>,
}

impl Grade {
    /// Converts an entity model to a grade domain model at the repository
    /// boundary.
    pub fn from_entity(entity: entity::grade::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            subject_id: entity.subject_id,
            score: entity.score,
            created_at: entity.created_at,
        }
    }

    /// Converts the bare grade to a DTO with unresolved id references, used
    /// by the write endpoints that return the stored row as-is.
    pub fn into_dto(self) -> GradeRecordDto {
        GradeRecordDto {
            id: self.id,
            student_id: self.student_id,
            subject_id: self.subject_id,
            score: self.score,
        }
    }
}

/// A grade with its student and subject references resolved.
///
/// Either reference can be `None` when the referenced record has been
/// deleted: references are stored as plain ids without integrity
/// enforcement, so a joined read of a dangling reference resolves to null.
#[derive(Debug, Clone, PartialEq)]
pub struct GradeWithRefs {
    pub id: i32,
    pub student: Option<Student>,
    pub subject: Option<Subject>,
    pub score: f64,
}

impl GradeWithRefs {
    /// Converts the joined grade to a DTO for API responses.
    pub fn into_dto(self) -> GradeDto {
        GradeDto {
            id: self.id,
            student: self.student.map(|s| s.into_dto()),
            subject: self.subject.map(|s| s.into_dto()),
            score: self.score,
        }
    }
}

/// Parameters for recording a new grade.
#[derive(Debug, Clone)]
pub struct RecordGradeParam {
    pub student_id: i32,
    pub subject_id: i32,
    pub score: f64,
}

/// A grade as stored, with plain id references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GradeRecordDto {
    pub id: i32,
    pub student_id: i32,
    pub subject_id: i32,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GradeDto {
    pub id: i32,
    pub student: Option<StudentDto>,
    pub subject: Option<SubjectDto>,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordGradeDto {
    pub student_id: i32,
    pub subject_id: i32,
    pub score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateGradeDto {
    pub score: f64,
}

/// Query parameters for the grade filter endpoint.
///
/// `student_id` is required by the operation but optional here so the
/// handler can reject its absence with a 400 instead of a generic
/// deserialization failure.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterGradesQuery {
    pub student_id: Option<i32>,
}

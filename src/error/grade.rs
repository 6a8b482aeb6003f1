use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum GradeError {
    /// A grade already exists for the (student, subject) pair.
    ///
    /// Raised by the pre-insert check, and also when the unique index on
    /// grade (student_id, subject_id) rejects a racing insert. Results in a
    /// 409 Conflict response.
    #[error("grade already exists for this subject and student")]
    Duplicate,
}

/// Converts grade book business-rule violations into HTTP responses.
///
/// # Returns
/// - 409 Conflict - For duplicate grade creation attempts
impl IntoResponse for GradeError {
    fn into_response(self) -> Response {
        match self {
            Self::Duplicate => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: "grade already exists for this subject and student".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        api::ErrorDto,
        subject::{
            CreateSubjectDto, EnrollDto, ReplaceEnrollmentDto, ReplaceEnrollmentParam,
            SubjectWithStudentsDto,
        },
    },
    service::subject::SubjectService,
    state::AppState,
};

/// Tag for grouping subject endpoints in OpenAPI documentation
pub static SUBJECT_TAG: &str = "subject";

/// POST /subjects - Create a new subject.
///
/// The new subject starts with an empty roster.
///
/// # Returns
/// - `201 Created` - The persisted subject with its generated id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/subjects",
    tag = SUBJECT_TAG,
    request_body = CreateSubjectDto,
    responses(
        (status = 201, description = "Subject created", body = SubjectWithStudentsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_subject(
    State(state): State<AppState>,
    Json(payload): Json<CreateSubjectDto>,
) -> Result<impl IntoResponse, AppError> {
    let subject = SubjectService::new(&state.db).create(payload.name).await?;

    Ok((StatusCode::CREATED, Json(subject.into_dto())))
}

/// GET /subjects - List all subjects with populated rosters.
///
/// Rosters are resolved to full student records at read time, in enrollment
/// order with duplicate entries retained.
///
/// # Returns
/// - `200 OK` - All subjects with their rosters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/subjects",
    tag = SUBJECT_TAG,
    responses(
        (status = 200, description = "All subjects with rosters", body = Vec<SubjectWithStudentsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_subjects(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let subjects = SubjectService::new(&state.db).get_all().await?;

    let dtos: Vec<SubjectWithStudentsDto> =
        subjects.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// POST /subjects/{subject_id}/enroll - Enroll a student.
///
/// Appends the student to the subject's roster. No duplicate check:
/// re-enrolling the same student appends a second roster entry.
///
/// # Returns
/// - `200 OK` - The subject with its updated roster
/// - `404 Not Found` - Subject id does not resolve
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/subjects/{subject_id}/enroll",
    tag = SUBJECT_TAG,
    params(
        ("subject_id" = i32, Path, description = "Subject id")
    ),
    request_body = EnrollDto,
    responses(
        (status = 200, description = "Updated subject roster", body = SubjectWithStudentsDto),
        (status = 404, description = "Subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn enroll_student(
    State(state): State<AppState>,
    Path(subject_id): Path<i32>,
    Json(payload): Json<EnrollDto>,
) -> Result<impl IntoResponse, AppError> {
    let subject = SubjectService::new(&state.db)
        .enroll(subject_id, payload.student_id)
        .await?;

    Ok((StatusCode::OK, Json(subject.into_dto())))
}

/// PUT /subject-enroll/{subject_id} - Replace a subject's name and roster.
///
/// Wholesale overwrite, unlike the append-only enroll operation. The path
/// keeps the original API's naming for compatibility.
///
/// # Returns
/// - `200 OK` - The subject with its replaced roster
/// - `404 Not Found` - Subject id does not resolve; nothing is created
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/subject-enroll/{subject_id}",
    tag = SUBJECT_TAG,
    params(
        ("subject_id" = i32, Path, description = "Subject id")
    ),
    request_body = ReplaceEnrollmentDto,
    responses(
        (status = 200, description = "Subject with replaced roster", body = SubjectWithStudentsDto),
        (status = 404, description = "Subject not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_enrollment(
    State(state): State<AppState>,
    Path(subject_id): Path<i32>,
    Json(payload): Json<ReplaceEnrollmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = ReplaceEnrollmentParam {
        subject_id,
        name: payload.name,
        students: payload.students,
    };
    let subject = SubjectService::new(&state.db).replace_enrollment(param).await?;

    Ok((StatusCode::OK, Json(subject.into_dto())))
}

/// DELETE /subjects/{id} - Delete a subject.
///
/// Idempotent. Removes the subject and its roster rows; grades referencing
/// the subject are left in place.
///
/// # Returns
/// - `204 No Content` - Deletion acknowledged
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/subjects/{id}",
    tag = SUBJECT_TAG,
    params(
        ("id" = i32, Path, description = "Subject id")
    ),
    responses(
        (status = 204, description = "Deletion acknowledged"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_subject(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    SubjectService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

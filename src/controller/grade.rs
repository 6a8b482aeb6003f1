use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        api::ErrorDto,
        grade::{
            FilterGradesQuery, GradeDto, GradeRecordDto, RecordGradeDto, RecordGradeParam,
            UpdateGradeDto,
        },
        subject::SubjectWithStudentsDto,
    },
    service::grade::GradeService,
    state::AppState,
};

/// Tag for grouping grade endpoints in OpenAPI documentation
pub static GRADE_TAG: &str = "grade";

/// POST /grades - Record a grade.
///
/// At most one grade may exist per (student, subject) pair; a second
/// attempt for the same pair is rejected without mutating state. The
/// uniqueness holds under concurrent requests via the storage-level unique
/// index.
///
/// # Returns
/// - `201 Created` - The recorded grade
/// - `409 Conflict` - A grade already exists for this pair
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/grades",
    tag = GRADE_TAG,
    request_body = RecordGradeDto,
    responses(
        (status = 201, description = "Grade recorded", body = GradeRecordDto),
        (status = 409, description = "Grade already exists for this pair", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_grade(
    State(state): State<AppState>,
    Json(payload): Json<RecordGradeDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = RecordGradeParam {
        student_id: payload.student_id,
        subject_id: payload.subject_id,
        score: payload.score,
    };
    let grade = GradeService::new(&state.db).record(param).await?;

    Ok((StatusCode::CREATED, Json(grade.into_dto())))
}

/// GET /grades - List all grades with references resolved.
///
/// Each grade carries its full student and subject records. References
/// whose target has been deleted resolve to `null`.
///
/// # Returns
/// - `200 OK` - All grades, joined
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/grades",
    tag = GRADE_TAG,
    responses(
        (status = 200, description = "All grades with references resolved", body = Vec<GradeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_grades(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let grades = GradeService::new(&state.db).get_all_joined().await?;

    let dtos: Vec<GradeDto> = grades.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /filter-grades?studentId= - Filter grades by student.
///
/// The `studentId` query parameter is required; its absence is a 400
/// rather than an empty result.
///
/// # Returns
/// - `200 OK` - Joined grades of the student (possibly empty)
/// - `400 Bad Request` - `studentId` query parameter missing
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/filter-grades",
    tag = GRADE_TAG,
    params(
        ("studentId" = Option<i32>, Query, description = "Student id to filter by (required)")
    ),
    responses(
        (status = 200, description = "Joined grades of the student", body = Vec<GradeDto>),
        (status = 400, description = "Missing studentId query parameter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn filter_grades(
    State(state): State<AppState>,
    Query(query): Query<FilterGradesQuery>,
) -> Result<impl IntoResponse, AppError> {
    let Some(student_id) = query.student_id else {
        return Err(AppError::BadRequest(
            "Missing required query parameter 'studentId'".to_string(),
        ));
    };

    let grades = GradeService::new(&state.db)
        .filter_by_student(student_id)
        .await?;

    let dtos: Vec<GradeDto> = grades.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /user/{user_id}/grades - Grades of one student by path parameter.
///
/// Path-parameter twin of `/filter-grades`; both return the same joined
/// listing for the student.
///
/// # Returns
/// - `200 OK` - Joined grades of the student (possibly empty)
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/user/{user_id}/grades",
    tag = GRADE_TAG,
    params(
        ("user_id" = i32, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "Joined grades of the student", body = Vec<GradeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_grades_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let grades = GradeService::new(&state.db)
        .filter_by_student(user_id)
        .await?;

    let dtos: Vec<GradeDto> = grades.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// PUT /grade/{id} - Update the score of a grade.
///
/// The singular `/grade` path is kept for client compatibility. An id that
/// does not resolve yields a 200 with a JSON `null` body.
///
/// # Returns
/// - `200 OK` - The updated grade, or `null` if the id does not resolve
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/grade/{id}",
    tag = GRADE_TAG,
    params(
        ("id" = i32, Path, description = "Grade id")
    ),
    request_body = UpdateGradeDto,
    responses(
        (status = 200, description = "The updated grade, or null when not found", body = Option<GradeRecordDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_grade(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGradeDto>,
) -> Result<impl IntoResponse, AppError> {
    let grade = GradeService::new(&state.db)
        .update_score(id, payload.score)
        .await?;

    Ok((StatusCode::OK, Json(grade.map(|g| g.into_dto()))))
}

/// DELETE /grades/{id} - Delete a grade.
///
/// Idempotent: deleting an id that does not exist still succeeds.
///
/// # Returns
/// - `204 No Content` - Deletion acknowledged
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/grades/{id}",
    tag = GRADE_TAG,
    params(
        ("id" = i32, Path, description = "Grade id")
    ),
    responses(
        (status = 204, description = "Deletion acknowledged"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_grade(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    GradeService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /students/{student_id}/subjects-without-grades - Ungraded subjects.
///
/// Computes the set difference between the subjects the student is enrolled
/// in and the subjects they already have a grade for. Duplicated
/// enrollments collapse to one entry.
///
/// # Returns
/// - `200 OK` - Subjects without a grade for this student, rosters populated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students/{student_id}/subjects-without-grades",
    tag = GRADE_TAG,
    params(
        ("student_id" = i32, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "Subjects without a grade for this student", body = Vec<SubjectWithStudentsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ungraded_subjects(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let subjects = GradeService::new(&state.db)
        .ungraded_subjects(student_id)
        .await?;

    let dtos: Vec<SubjectWithStudentsDto> =
        subjects.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

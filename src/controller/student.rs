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
        student::{
            CreateStudentDto, CreateStudentParam, StudentDto, UpdateStudentDto, UpdateStudentParam,
        },
    },
    service::student::StudentService,
    state::AppState,
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// POST /students - Create a new student.
///
/// Inserts a new student record. No uniqueness check is applied to the
/// email.
///
/// # Returns
/// - `201 Created` - The persisted student with its generated id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created", body = StudentDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = CreateStudentParam {
        name: payload.name,
        age: payload.age,
        email: payload.email,
    };
    let student = StudentService::new(&state.db).create(param).await?;

    Ok((StatusCode::CREATED, Json(student.into_dto())))
}

/// GET /students - List all students.
///
/// # Returns
/// - `200 OK` - All student records in natural storage order
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "All students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let students = StudentService::new(&state.db).get_all().await?;

    let dtos: Vec<StudentDto> = students.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// GET /students/{id} - Get one student.
///
/// An id that does not resolve yields a 200 with a JSON `null` body rather
/// than a 404; callers check for null.
///
/// # Returns
/// - `200 OK` - The student, or `null` if the id does not resolve
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student id")
    ),
    responses(
        (status = 200, description = "The student, or null when not found", body = Option<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(student.map(|s| s.into_dto()))))
}

/// PUT /students/{id} - Partially update a student.
///
/// Merge semantics: only supplied fields change. An id that does not
/// resolve yields a 200 with a JSON `null` body and writes nothing.
///
/// # Returns
/// - `200 OK` - The updated student, or `null` if the id does not resolve
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student id")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "The updated student, or null when not found", body = Option<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = UpdateStudentParam {
        id,
        name: payload.name,
        age: payload.age,
        email: payload.email,
    };
    let student = StudentService::new(&state.db).update(param).await?;

    Ok((StatusCode::OK, Json(student.map(|s| s.into_dto()))))
}

/// DELETE /students/{id} - Delete a student.
///
/// Idempotent: deleting an id that does not exist still succeeds. Roster
/// and grade rows referencing the student are left dangling.
///
/// # Returns
/// - `204 No Content` - Deletion acknowledged
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = i32, Path, description = "Student id")
    ),
    responses(
        (status = 204, description = "Deletion acknowledged"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    StudentService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

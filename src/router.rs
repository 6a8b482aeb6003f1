use axum::{
    routing::{delete, get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{auth, grade, student, subject},
    model,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::register,
        student::create_student,
        student::get_students,
        student::get_student,
        student::update_student,
        student::delete_student,
        subject::create_subject,
        subject::get_subjects,
        subject::enroll_student,
        subject::replace_enrollment,
        subject::delete_subject,
        grade::record_grade,
        grade::get_grades,
        grade::filter_grades,
        grade::get_grades_by_user,
        grade::update_grade,
        grade::delete_grade,
        grade::get_ungraded_subjects,
    ),
    components(schemas(
        model::api::ErrorDto,
        model::auth::LoginDto,
        model::auth::LoginResultDto,
        model::auth::RegisterDto,
        model::auth::CredentialDto,
        model::student::StudentDto,
        model::student::CreateStudentDto,
        model::student::UpdateStudentDto,
        model::subject::SubjectDto,
        model::subject::SubjectWithStudentsDto,
        model::subject::CreateSubjectDto,
        model::subject::EnrollDto,
        model::subject::ReplaceEnrollmentDto,
        model::grade::GradeDto,
        model::grade::GradeRecordDto,
        model::grade::RecordGradeDto,
        model::grade::UpdateGradeDto,
    ))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .route("/students", post(student::create_student))
        .route("/students", get(student::get_students))
        .route("/students/{id}", get(student::get_student))
        .route("/students/{id}", put(student::update_student))
        .route("/students/{id}", delete(student::delete_student))
        .route("/subjects", post(subject::create_subject))
        .route("/subjects", get(subject::get_subjects))
        .route("/subjects/{id}", delete(subject::delete_subject))
        .route("/subjects/{subject_id}/enroll", post(subject::enroll_student))
        .route(
            "/subject-enroll/{subject_id}",
            put(subject::replace_enrollment),
        )
        .route("/grades", post(grade::record_grade))
        .route("/grades", get(grade::get_grades))
        .route("/grade/{id}", put(grade::update_grade))
        .route("/grades/{id}", delete(grade::delete_grade))
        .route("/filter-grades", get(grade::filter_grades))
        .route("/user/{user_id}/grades", get(grade::get_grades_by_user))
        .route(
            "/students/{student_id}/subjects-without-grades",
            get(grade::get_ungraded_subjects),
        )
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthenticateParam, LoginDto, LoginResultDto, RegisterDto, RegisterParam},
    },
    error::AppError,
    service::auth::AuthService,
    state::AppState,
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// POST /login - Check a login attempt.
///
/// Succeeds only when a credential record exists for exactly the supplied
/// email whose stored hash verifies against exactly the supplied password.
/// Case or whitespace differences fail.
///
/// # Returns
/// - `200 OK` - Credentials matched
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Credentials matched", body = LoginResultDto),
        (status = 401, description = "Unknown email or wrong password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = AuthenticateParam {
        email: payload.email,
        password: payload.password,
    };
    AuthService::new(&state.db).authenticate(param).await?;

    Ok((
        StatusCode::OK,
        Json(LoginResultDto {
            authenticated: true,
        }),
    ))
}

/// POST /register - Store a new credential.
///
/// Hashes the password with a fresh random salt before persisting; the
/// plaintext is never stored. The response carries only the id and email.
///
/// # Returns
/// - `201 Created` - Credential stored
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Credential stored", body = crate::model::auth::CredentialDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = RegisterParam {
        email: payload.email,
        password: payload.password,
    };
    let credential = AuthService::new(&state.db).register(param).await?;

    Ok((StatusCode::CREATED, Json(credential.into_dto())))
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No credential record matches the supplied email and password.
    ///
    /// Covers both an unknown email and a wrong password so the response
    /// does not reveal which part of the pair was wrong. Results in a
    /// 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Converts authentication errors into HTTP responses.
///
/// The client-facing message stays generic regardless of whether the email
/// was unknown or the password mismatched.
///
/// # Returns
/// - 401 Unauthorized - For failed credential checks
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
        }
    }
}

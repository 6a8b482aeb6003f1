use crate::error::AppError;
use crate::model::auth::{AuthenticateParam, RegisterParam};
use crate::service::auth::AuthService;
use test_utils::builder::TestBuilder;

mod register;

fn attempt(email: &str, password: &str) -> AuthenticateParam {
    AuthenticateParam {
        email: email.to_string(),
        password: password.to_string(),
    }
}

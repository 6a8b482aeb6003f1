//! Credential domain models and parameters.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored login credential, without the secret material.
///
/// The salt and hash never leave the data layer; this model is what the
/// registration endpoint returns.
#[derive(Debug, Clone, PartialEq)]
pub struct Credential {
    pub id: i32,
    pub email: String,
}

impl Credential {
    /// Converts an entity model to a credential domain model, dropping the
    /// secret columns at the repository boundary.
    pub fn from_entity(entity: entity::credential::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
        }
    }

    /// Converts the credential domain model to a DTO for API responses.
    pub fn into_dto(self) -> CredentialDto {
        CredentialDto {
            id: self.id,
            email: self.email,
        }
    }
}

/// Parameters for checking a login attempt.
#[derive(Debug, Clone)]
pub struct AuthenticateParam {
    pub email: String,
    pub password: String,
}

/// Parameters for registering a new credential.
#[derive(Debug, Clone)]
pub struct RegisterParam {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResultDto {
    pub authenticated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CredentialDto {
    pub id: i32,
    pub email: String,
}

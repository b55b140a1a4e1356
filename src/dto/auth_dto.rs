use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::user::User;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "passwords_match"))]
pub struct RegisterPayload {
    #[validate(
        length(max = 20),
        custom(function = "crate::utils::validation::validate_username")
    )]
    pub username: String,
    #[validate(
        length(min = 1, max = 20),
        custom(function = "crate::utils::validation::validate_text")
    )]
    pub first_name: String,
    #[validate(
        length(min = 1, max = 20),
        custom(function = "crate::utils::validation::validate_text")
    )]
    pub last_name: String,
    #[validate(
        email(message = "Invalid email format"),
        custom(function = "crate::utils::validation::validate_text")
    )]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    pub repeat_password: String,
}

fn passwords_match(payload: &RegisterPayload) -> Result<(), ValidationError> {
    if payload.password == payload.repeat_password {
        Ok(())
    } else {
        let mut err = ValidationError::new("passwords_mismatch");
        err.message = Some("Passwords do not match".into());
        Err(err)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginPayload {
    #[validate(
        length(min = 1, max = 20),
        custom(function = "crate::utils::validation::validate_text")
    )]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub user: UserResponse,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            username: value.username,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
        }
    }
}

impl AuthResponse {
    pub fn bearer(token: String, user: User) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            user: user.into(),
        }
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::application::Application;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ApplicationPayload {
    #[validate(
        length(min = 1, max = 50),
        custom(function = "crate::utils::validation::validate_not_blank")
    )]
    pub written_username: String,
    #[validate(
        length(max = 17),
        custom(function = "crate::utils::validation::validate_phone")
    )]
    pub written_phone: Option<String>,
    #[validate(custom(function = "crate::utils::validation::validate_not_blank"))]
    pub written_cover_letter: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApplicationResponse {
    pub id: i64,
    pub written_username: String,
    pub written_phone: String,
    pub written_cover_letter: String,
    pub vacancy_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Application> for ApplicationResponse {
    fn from(value: Application) -> Self {
        Self {
            id: value.id,
            written_username: value.written_username,
            written_phone: value.written_phone,
            written_cover_letter: value.written_cover_letter,
            vacancy_id: value.vacancy_id,
            user_id: value.user_id,
            created_at: value.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_is_optional_but_checked_when_given() {
        let mut payload = ApplicationPayload {
            written_username: "Ann".into(),
            written_phone: None,
            written_cover_letter: "Hire me".into(),
        };
        assert!(payload.validate().is_ok());
        payload.written_phone = Some("79991234567".into());
        assert!(payload.validate().is_ok());
        payload.written_phone = Some("call me maybe".into());
        assert!(payload.validate().is_err());
    }

    #[test]
    fn blank_cover_letter_is_rejected() {
        let payload = ApplicationPayload {
            written_username: "Ann".into(),
            written_phone: None,
            written_cover_letter: "   ".into(),
        };
        assert!(payload.validate().is_err());
    }
}

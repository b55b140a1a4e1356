use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::dto::form_dto::FormDescriptor;
use crate::dto::home_dto::SpecialtyResponse;
use crate::dto::image_url;
use crate::error::Result;
use crate::models::resume::{Grade, Resume, ResumeStatus};
use crate::utils::multipart::{merge_form_errors, FormFields};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ResumePayload {
    #[validate(
        length(min = 1, max = 50),
        custom(function = "crate::utils::validation::validate_not_blank")
    )]
    pub name: String,
    #[validate(
        length(min = 1, max = 50),
        custom(function = "crate::utils::validation::validate_not_blank")
    )]
    pub surname: String,
    pub status: ResumeStatus,
    #[validate(range(min = 0))]
    pub salary: i32,
    pub specialty_id: i64,
    pub grade: Grade,
    #[validate(
        length(min = 1, max = 100),
        custom(function = "crate::utils::validation::validate_not_blank")
    )]
    pub education: String,
    #[validate(custom(function = "crate::utils::validation::validate_text"))]
    pub experience: Option<String>,
    #[validate(custom(function = "crate::utils::validation::validate_text"))]
    pub description: Option<String>,
    #[validate(
        length(min = 1, max = 100),
        custom(function = "crate::utils::validation::validate_not_blank")
    )]
    pub portfolio: String,
    #[validate(
        length(max = 17),
        custom(function = "crate::utils::validation::validate_phone")
    )]
    pub phone: Option<String>,
}

impl ResumePayload {
    /// Parses and validates a submitted form; every bad field is reported together.
    pub fn from_form(fields: &FormFields) -> Result<Self> {
        let mut errors = ValidationErrors::new();
        let status = fields.parse::<ResumeStatus>("status", &mut errors);
        let salary = fields.parse::<i32>("salary", &mut errors);
        let specialty_id = fields.parse::<i64>("specialty_id", &mut errors);
        let grade = fields.parse::<Grade>("grade", &mut errors);

        let payload = Self {
            name: fields.text("name"),
            surname: fields.text("surname"),
            status: status.unwrap_or(ResumeStatus::NotLooking),
            salary: salary.unwrap_or_default(),
            specialty_id: specialty_id.unwrap_or_default(),
            grade: grade.unwrap_or(Grade::Intern),
            education: fields.text("education"),
            experience: fields.optional_text("experience"),
            description: fields.optional_text("description"),
            portfolio: fields.text("portfolio"),
            phone: fields.optional_text("phone"),
        };
        merge_form_errors(errors, payload.validate())?;
        Ok(payload)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResumeResponse {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub surname: String,
    pub status: ResumeStatus,
    pub status_label: String,
    pub salary: i32,
    pub specialty_id: i64,
    pub grade: Grade,
    pub grade_label: String,
    pub photo: Option<String>,
    pub photo_url: String,
    pub education: String,
    pub experience: Option<String>,
    pub description: Option<String>,
    pub portfolio: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResumeListResponse {
    pub resumes: Vec<ResumeResponse>,
    pub resumes_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResumeDetailResponse {
    pub resume: ResumeResponse,
    pub specialty: SpecialtyResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MyResumeResponse {
    pub resume: ResumeResponse,
    pub form: FormDescriptor,
}

impl From<Resume> for ResumeResponse {
    fn from(value: Resume) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            status_label: value.status.label().to_string(),
            grade_label: value.grade.label().to_string(),
            photo_url: image_url(value.photo.as_deref()),
            name: value.name,
            surname: value.surname,
            status: value.status,
            salary: value.salary,
            specialty_id: value.specialty_id,
            grade: value.grade,
            photo: value.photo,
            education: value.education,
            experience: value.experience,
            description: value.description,
            portfolio: value.portfolio,
            phone: value.phone,
        }
    }
}

impl From<Vec<Resume>> for ResumeListResponse {
    fn from(value: Vec<Resume>) -> Self {
        let resumes: Vec<ResumeResponse> = value.into_iter().map(Into::into).collect();
        Self {
            resumes_count: resumes.len(),
            resumes,
        }
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::dto::form_dto::FormDescriptor;
use crate::dto::image_url;
use crate::dto::vacancy_dto::VacancyCard;
use crate::error::Result;
use crate::models::company::{Company, CompanyWithCount};
use crate::utils::multipart::{merge_form_errors, FormFields};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CompanyPayload {
    #[validate(
        length(min = 1, max = 50),
        custom(function = "crate::utils::validation::validate_not_blank")
    )]
    pub name: String,
    #[validate(
        length(min = 1, max = 50),
        custom(function = "crate::utils::validation::validate_not_blank")
    )]
    pub location: String,
    #[validate(custom(function = "crate::utils::validation::validate_not_blank"))]
    pub description: String,
    #[validate(range(min = 0, max = 32767))]
    pub employee_count: i32,
}

impl CompanyPayload {
    /// Parses and validates a submitted form; every bad field is reported together.
    pub fn from_form(fields: &FormFields) -> Result<Self> {
        let mut errors = ValidationErrors::new();
        let employee_count = fields.parse::<i32>("employee_count", &mut errors);

        let payload = Self {
            name: fields.text("name"),
            location: fields.text("location"),
            description: fields.text("description"),
            employee_count: employee_count.unwrap_or_default(),
        };
        merge_form_errors(errors, payload.validate())?;
        Ok(payload)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyResponse {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub logo: Option<String>,
    pub logo_url: String,
    pub description: String,
    pub employee_count: i32,
    pub owner_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyCard {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub logo_url: String,
    pub employee_count: i32,
    pub vacancy_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyListResponse {
    pub companies: Vec<CompanyCard>,
    pub companies_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyDetailResponse {
    pub company: CompanyResponse,
    pub vacancies: Vec<VacancyCard>,
    pub vacancies_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MyCompanyResponse {
    pub company: CompanyResponse,
    pub form: FormDescriptor,
}

impl From<Company> for CompanyResponse {
    fn from(value: Company) -> Self {
        Self {
            id: value.id,
            logo_url: image_url(value.logo.as_deref()),
            name: value.name,
            location: value.location,
            logo: value.logo,
            description: value.description,
            employee_count: value.employee_count,
            owner_id: value.owner_id,
        }
    }
}

impl From<CompanyWithCount> for CompanyCard {
    fn from(value: CompanyWithCount) -> Self {
        Self {
            id: value.id,
            logo_url: image_url(value.logo.as_deref()),
            name: value.name,
            location: value.location,
            employee_count: value.employee_count,
            vacancy_count: value.vacancy_count,
        }
    }
}

impl From<Vec<CompanyWithCount>> for CompanyListResponse {
    fn from(value: Vec<CompanyWithCount>) -> Self {
        let companies: Vec<CompanyCard> = value.into_iter().map(Into::into).collect();
        Self {
            companies_count: companies.len(),
            companies,
        }
    }
}

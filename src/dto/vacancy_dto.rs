use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::dto::application_dto::ApplicationResponse;
use crate::dto::form_dto::FormDescriptor;
use crate::dto::home_dto::SpecialtyResponse;
use crate::dto::image_url;
use crate::models::vacancy::{Vacancy, VacancyListing, VacancyWithApplications};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "salary_range_is_ordered"))]
pub struct VacancyPayload {
    #[validate(
        length(min = 1, max = 50),
        custom(function = "crate::utils::validation::validate_not_blank")
    )]
    pub title: String,
    pub specialty_id: i64,
    #[validate(
        length(min = 1, max = 255),
        custom(function = "crate::utils::validation::validate_not_blank")
    )]
    pub skills: String,
    #[validate(custom(function = "crate::utils::validation::validate_not_blank"))]
    pub description: String,
    #[validate(range(min = 0))]
    pub salary_min: i32,
    #[validate(range(min = 0))]
    pub salary_max: i32,
}

fn salary_range_is_ordered(payload: &VacancyPayload) -> Result<(), ValidationError> {
    if payload.salary_min <= payload.salary_max {
        Ok(())
    } else {
        let mut err = ValidationError::new("salary_range");
        err.message = Some("salary_min must not exceed salary_max".into());
        Err(err)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VacancyResponse {
    pub id: i64,
    pub title: String,
    pub specialty_id: i64,
    pub company_id: i64,
    pub skills: String,
    pub description: String,
    pub salary_min: i32,
    pub salary_max: i32,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompanyRef {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub logo_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SpecialtyRef {
    pub id: i64,
    pub code: String,
    pub title: String,
}

/// A vacancy as shown in listings: with its company and specialty inlined.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VacancyCard {
    pub id: i64,
    pub title: String,
    pub skills: String,
    pub description: String,
    pub salary_min: i32,
    pub salary_max: i32,
    pub published_at: DateTime<Utc>,
    pub company: CompanyRef,
    pub specialty: SpecialtyRef,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VacancyListResponse {
    pub vacancies: Vec<VacancyCard>,
    pub vacancies_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryVacanciesResponse {
    pub specialty: SpecialtyResponse,
    pub vacancies: Vec<VacancyCard>,
    pub vacancies_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VacancyDetailResponse {
    pub vacancy: VacancyCard,
    pub form: FormDescriptor,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OwnedVacancy {
    pub id: i64,
    pub title: String,
    pub specialty_id: i64,
    pub skills: String,
    pub salary_min: i32,
    pub salary_max: i32,
    pub published_at: DateTime<Utc>,
    pub application_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MyVacanciesResponse {
    pub vacancies: Vec<OwnedVacancy>,
    pub vacancies_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MyVacancyResponse {
    pub vacancy: VacancyResponse,
    pub applications: Vec<ApplicationResponse>,
    pub applications_count: usize,
    pub form: FormDescriptor,
}

impl From<Vacancy> for VacancyResponse {
    fn from(value: Vacancy) -> Self {
        Self {
            id: value.id,
            title: value.title,
            specialty_id: value.specialty_id,
            company_id: value.company_id,
            skills: value.skills,
            description: value.description,
            salary_min: value.salary_min,
            salary_max: value.salary_max,
            published_at: value.published_at,
        }
    }
}

impl From<VacancyListing> for VacancyCard {
    fn from(value: VacancyListing) -> Self {
        Self {
            id: value.id,
            title: value.title,
            skills: value.skills,
            description: value.description,
            salary_min: value.salary_min,
            salary_max: value.salary_max,
            published_at: value.published_at,
            company: CompanyRef {
                id: value.company_id,
                logo_url: image_url(value.company_logo.as_deref()),
                name: value.company_name,
                location: value.company_location,
            },
            specialty: SpecialtyRef {
                id: value.specialty_id,
                code: value.specialty_code,
                title: value.specialty_title,
            },
        }
    }
}

impl From<Vec<VacancyListing>> for VacancyListResponse {
    fn from(value: Vec<VacancyListing>) -> Self {
        let vacancies: Vec<VacancyCard> = value.into_iter().map(Into::into).collect();
        Self {
            vacancies_count: vacancies.len(),
            vacancies,
        }
    }
}

impl From<VacancyWithApplications> for OwnedVacancy {
    fn from(value: VacancyWithApplications) -> Self {
        Self {
            id: value.id,
            title: value.title,
            specialty_id: value.specialty_id,
            skills: value.skills,
            salary_min: value.salary_min,
            salary_max: value.salary_max,
            published_at: value.published_at,
            application_count: value.application_count,
        }
    }
}

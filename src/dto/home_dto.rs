use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::dto::company_dto::CompanyCard;
use crate::dto::image_url;
use crate::dto::vacancy_dto::VacancyCard;
use crate::models::specialty::{Specialty, SpecialtyWithCount};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SpecialtyResponse {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub picture_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SpecialtyCard {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub picture_url: String,
    pub vacancy_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HomeResponse {
    pub specialties: Vec<SpecialtyCard>,
    pub companies: Vec<CompanyCard>,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Matched case-insensitively against vacancy titles and skills.
    pub q: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub query: String,
    pub vacancies: Vec<VacancyCard>,
    pub vacancies_count: usize,
    pub examples: Vec<String>,
}

/// Returned to an owner who has not created the record yet.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LandingResponse {
    pub message: String,
    pub create_url: String,
}

impl From<Specialty> for SpecialtyResponse {
    fn from(value: Specialty) -> Self {
        Self {
            id: value.id,
            picture_url: image_url(value.picture.as_deref()),
            code: value.code,
            title: value.title,
        }
    }
}

impl From<SpecialtyWithCount> for SpecialtyCard {
    fn from(value: SpecialtyWithCount) -> Self {
        Self {
            id: value.id,
            picture_url: image_url(value.picture.as_deref()),
            code: value.code,
            title: value.title,
            vacancy_count: value.vacancy_count,
        }
    }
}

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        company_dto::{CompanyDetailResponse, CompanyListResponse},
        vacancy_dto::VacancyListResponse,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/companies/",
    responses(
        (status = 200, description = "Companies with their vacancy counts", body = CompanyListResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_companies(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.company_service.list_with_counts(None).await?;
    Ok(Json(CompanyListResponse::from(items)))
}

#[utoipa::path(
    get,
    path = "/companies/{id}",
    params(
        ("id" = i64, Path, description = "Company ID")
    ),
    responses(
        (status = 200, description = "Company with its vacancies", body = CompanyDetailResponse),
        (status = 404, description = "Company not found")
    )
)]
#[axum::debug_handler]
pub async fn get_company(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let company = state.company_service.get(id).await?;
    let listing = VacancyListResponse::from(state.vacancy_service.list_by_company(id).await?);

    Ok(Json(CompanyDetailResponse {
        company: company.into(),
        vacancies: listing.vacancies,
        vacancies_count: listing.vacancies_count,
    }))
}

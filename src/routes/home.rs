use axum::{
    extract::{Query, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        home_dto::{HomeResponse, SearchQuery, SearchResponse, SpecialtyCard},
        vacancy_dto::VacancyCard,
    },
    error::Result,
    AppState,
};

const HOME_COMPANIES: i64 = 8;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Specialties, featured companies and search examples", body = HomeResponse)
    )
)]
#[axum::debug_handler]
pub async fn home(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let specialties = state.specialty_service.list_with_counts().await?;
    let companies = state
        .company_service
        .list_with_counts(Some(HOME_COMPANIES))
        .await?;
    let examples = state.search_service.examples().await?;

    Ok(Json(HomeResponse {
        specialties: specialties.into_iter().map(SpecialtyCard::from).collect(),
        companies: companies.into_iter().map(Into::into).collect(),
        examples,
    }))
}

#[utoipa::path(
    get,
    path = "/search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Vacancies matching the query, newest first", body = SearchResponse)
    )
)]
#[axum::debug_handler]
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse> {
    let result = state.search_service.search(query.q.as_deref()).await?;
    let vacancies: Vec<VacancyCard> = result.vacancies.into_iter().map(Into::into).collect();

    Ok(Json(SearchResponse {
        query: result.query,
        vacancies_count: vacancies.len(),
        vacancies,
        examples: result.examples,
    }))
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use validator::Validate;

use crate::{
    dto::{
        application_dto::{ApplicationPayload, ApplicationResponse},
        form_dto::FormDescriptor,
        vacancy_dto::{
            CategoryVacanciesResponse, VacancyDetailResponse, VacancyListResponse, VacancyPayload,
            VacancyResponse,
        },
    },
    error::Result,
    middleware::auth::Claims,
    models::company::Company,
    AppState,
};

#[utoipa::path(
    get,
    path = "/vacancies/",
    responses(
        (status = 200, description = "All vacancies, newest first", body = VacancyListResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_vacancies(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.vacancy_service.list_all().await?;
    Ok(Json(VacancyListResponse::from(items)))
}

#[utoipa::path(
    get,
    path = "/vacancies/cat/{code}",
    params(
        ("code" = String, Path, description = "Specialty code, e.g. backend")
    ),
    responses(
        (status = 200, description = "Vacancies of one specialty", body = CategoryVacanciesResponse),
        (status = 404, description = "Unknown specialty")
    )
)]
#[axum::debug_handler]
pub async fn list_by_specialty(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse> {
    let specialty = state.specialty_service.get_by_code(&code).await?;
    let listing = VacancyListResponse::from(
        state.vacancy_service.list_by_specialty(specialty.id).await?,
    );

    Ok(Json(CategoryVacanciesResponse {
        specialty: specialty.into(),
        vacancies: listing.vacancies,
        vacancies_count: listing.vacancies_count,
    }))
}

#[utoipa::path(
    get,
    path = "/vacancies/{id}",
    params(
        ("id" = i64, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Vacancy with the application form", body = VacancyDetailResponse),
        (status = 404, description = "Vacancy not found")
    )
)]
#[axum::debug_handler]
pub async fn get_vacancy(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let vacancy = state.vacancy_service.get_listing(id).await?;
    Ok(Json(VacancyDetailResponse {
        vacancy: vacancy.into(),
        form: FormDescriptor::application(id),
    }))
}

#[utoipa::path(
    post,
    path = "/vacancies/{id}",
    params(
        ("id" = i64, Path, description = "Vacancy ID")
    ),
    request_body = ApplicationPayload,
    responses(
        (status = 201, description = "Application recorded", body = ApplicationResponse),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Not logged in"),
        (status = 404, description = "Vacancy not found")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn apply(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i64>,
    Json(payload): Json<ApplicationPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let application = state
        .application_service
        .submit(claims.sub, id, &payload)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApplicationResponse::from(application)),
    ))
}

#[utoipa::path(
    post,
    path = "/vacancies/",
    request_body = VacancyPayload,
    responses(
        (status = 201, description = "Vacancy created for the caller's company", body = VacancyResponse),
        (status = 303, description = "Caller has no company yet"),
        (status = 400, description = "Invalid payload")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn create_vacancy(
    State(state): State<AppState>,
    Extension(company): Extension<Company>,
    Json(payload): Json<VacancyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let vacancy = state.vacancy_service.create(company.id, &payload).await?;
    Ok((StatusCode::CREATED, Json(VacancyResponse::from(vacancy))))
}

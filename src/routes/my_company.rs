use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Redirect},
    Extension,
};
use validator::Validate;

use crate::{
    dto::{
        application_dto::ApplicationResponse,
        company_dto::{CompanyPayload, MyCompanyResponse},
        form_dto::FormDescriptor,
        home_dto::LandingResponse,
        vacancy_dto::{MyVacanciesResponse, MyVacancyResponse, OwnedVacancy, VacancyPayload},
    },
    error::Result,
    middleware::{auth::Claims, ownership::CREATE_COMPANY_PATH},
    models::company::Company,
    services::upload_service::ImageDir,
    utils::multipart::read_form,
    AppState,
};

const MY_COMPANY_PATH: &str = "/mycompany/";
const MY_VACANCIES_PATH: &str = "/mycompany/vacancies";
const CREATE_VACANCY_PATH: &str = "/mycompany/vacancies/create";

#[utoipa::path(
    get,
    path = "/mycompany/",
    responses(
        (status = 200, description = "The caller's company and its edit form", body = MyCompanyResponse),
        (status = 303, description = "Caller has no company yet")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn show_company(Extension(company): Extension<Company>) -> Json<MyCompanyResponse> {
    Json(MyCompanyResponse {
        company: company.into(),
        form: FormDescriptor::company(MY_COMPANY_PATH),
    })
}

/// Creates the caller's company or updates it. Multipart: `name`, `location`,
/// `description`, `employee_count` and an optional `logo` file.
#[utoipa::path(
    post,
    path = "/mycompany/",
    responses(
        (status = 303, description = "Saved, redirects to /mycompany/"),
        (status = 400, description = "Invalid form or image")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn save_company(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let (fields, logo) = read_form(multipart, "logo", state.upload_service.max_bytes()).await?;
    let payload = CompanyPayload::from_form(&fields)?;
    let previous = state
        .company_service
        .find_by_owner(claims.sub)
        .await?
        .and_then(|company| company.logo);

    let logo = match logo {
        Some(file) => Some(
            state
                .upload_service
                .save_image(ImageDir::CompanyImages, &file)
                .await?,
        ),
        None => None,
    };
    let saved = state
        .company_service
        .upsert_for_owner(claims.sub, &payload, logo.clone())
        .await;
    state
        .upload_service
        .settle(saved, logo.as_deref(), previous.as_deref())
        .await?;
    Ok(Redirect::to(MY_COMPANY_PATH))
}

#[utoipa::path(
    delete,
    path = "/mycompany/",
    responses(
        (status = 204, description = "Company and its vacancies deleted"),
        (status = 303, description = "Caller has no company")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn delete_company(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse> {
    state.company_service.delete_for_owner(claims.sub).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/mycompany/letsstart",
    responses((status = 200, description = "Invitation to create a company", body = LandingResponse)),
    security(("bearer" = []))
)]
pub async fn company_landing() -> Json<LandingResponse> {
    Json(LandingResponse {
        message: "You don't have a company yet. Create one to start publishing vacancies.".into(),
        create_url: CREATE_COMPANY_PATH.into(),
    })
}

#[utoipa::path(
    get,
    path = "/mycompany/create",
    responses((status = 200, description = "Empty company form", body = FormDescriptor)),
    security(("bearer" = []))
)]
pub async fn company_form() -> Json<FormDescriptor> {
    Json(FormDescriptor::company(CREATE_COMPANY_PATH))
}

#[utoipa::path(
    get,
    path = "/mycompany/vacancies",
    responses(
        (status = 200, description = "The company's vacancies with application counts", body = MyVacanciesResponse),
        (status = 303, description = "Caller has no company yet")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn list_my_vacancies(
    State(state): State<AppState>,
    Extension(company): Extension<Company>,
) -> Result<impl IntoResponse> {
    let vacancies: Vec<OwnedVacancy> = state
        .vacancy_service
        .list_owned_with_counts(company.id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(MyVacanciesResponse {
        vacancies_count: vacancies.len(),
        vacancies,
    }))
}

#[utoipa::path(
    get,
    path = "/mycompany/vacancies/create",
    responses(
        (status = 200, description = "Empty vacancy form", body = FormDescriptor),
        (status = 303, description = "Caller has no company yet")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn vacancy_form(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let specialties = state.specialty_service.list().await?;
    Ok(Json(FormDescriptor::vacancy(CREATE_VACANCY_PATH, &specialties)))
}

#[utoipa::path(
    post,
    path = "/mycompany/vacancies/create",
    request_body = VacancyPayload,
    responses(
        (status = 303, description = "Created, redirects to /mycompany/vacancies"),
        (status = 400, description = "Invalid payload")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn create_my_vacancy(
    State(state): State<AppState>,
    Extension(company): Extension<Company>,
    Json(payload): Json<VacancyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state
        .vacancy_service
        .upsert(company.id, None, &payload)
        .await?;
    Ok(Redirect::to(MY_VACANCIES_PATH))
}

#[utoipa::path(
    get,
    path = "/mycompany/vacancies/{id}",
    params(
        ("id" = i64, Path, description = "Vacancy ID")
    ),
    responses(
        (status = 200, description = "Owned vacancy with its applications", body = MyVacancyResponse),
        (status = 404, description = "No such vacancy in the caller's company")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn show_my_vacancy(
    State(state): State<AppState>,
    Extension(company): Extension<Company>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let vacancy = state.vacancy_service.get_owned(id, company.id).await?;
    let applications: Vec<ApplicationResponse> = state
        .application_service
        .list_for_vacancy(vacancy.id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    let specialties = state.specialty_service.list().await?;

    Ok(Json(MyVacancyResponse {
        form: FormDescriptor::vacancy(&format!("{}/{}", MY_VACANCIES_PATH, id), &specialties),
        vacancy: vacancy.into(),
        applications_count: applications.len(),
        applications,
    }))
}

#[utoipa::path(
    post,
    path = "/mycompany/vacancies/{id}",
    params(
        ("id" = i64, Path, description = "Vacancy ID")
    ),
    request_body = VacancyPayload,
    responses(
        (status = 303, description = "Updated, redirects to /mycompany/vacancies"),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "No such vacancy in the caller's company")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn update_my_vacancy(
    State(state): State<AppState>,
    Extension(company): Extension<Company>,
    Path(id): Path<i64>,
    Json(payload): Json<VacancyPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state
        .vacancy_service
        .upsert(company.id, Some(id), &payload)
        .await?;
    Ok(Redirect::to(MY_VACANCIES_PATH))
}

use axum::Json;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::dto::{
    application_dto::{ApplicationPayload, ApplicationResponse},
    auth_dto::{AuthResponse, LoginPayload, RegisterPayload, UserResponse},
    company_dto::{
        CompanyCard, CompanyDetailResponse, CompanyListResponse, CompanyPayload, CompanyResponse,
        MyCompanyResponse,
    },
    form_dto::{Choice, FieldKind, FormDescriptor, FormField},
    home_dto::{HomeResponse, LandingResponse, SearchResponse, SpecialtyCard, SpecialtyResponse},
    resume_dto::{
        MyResumeResponse, ResumeDetailResponse, ResumeListResponse, ResumePayload, ResumeResponse,
    },
    vacancy_dto::{
        CategoryVacanciesResponse, CompanyRef, MyVacanciesResponse, MyVacancyResponse,
        OwnedVacancy, SpecialtyRef, VacancyCard, VacancyDetailResponse, VacancyListResponse,
        VacancyPayload, VacancyResponse,
    },
};
use crate::models::resume::{Grade, ResumeStatus};

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::home::home,
        crate::routes::home::search,
        crate::routes::auth::login_form,
        crate::routes::auth::login,
        crate::routes::auth::register_form,
        crate::routes::auth::register,
        crate::routes::auth::logout,
        crate::routes::vacancy::list_vacancies,
        crate::routes::vacancy::list_by_specialty,
        crate::routes::vacancy::get_vacancy,
        crate::routes::vacancy::apply,
        crate::routes::vacancy::create_vacancy,
        crate::routes::company::list_companies,
        crate::routes::company::get_company,
        crate::routes::resume::list_resumes,
        crate::routes::resume::get_resume,
        crate::routes::my_company::show_company,
        crate::routes::my_company::save_company,
        crate::routes::my_company::delete_company,
        crate::routes::my_company::company_landing,
        crate::routes::my_company::company_form,
        crate::routes::my_company::list_my_vacancies,
        crate::routes::my_company::vacancy_form,
        crate::routes::my_company::create_my_vacancy,
        crate::routes::my_company::show_my_vacancy,
        crate::routes::my_company::update_my_vacancy,
        crate::routes::my_resume::show_resume,
        crate::routes::my_resume::save_resume,
        crate::routes::my_resume::resume_landing,
        crate::routes::my_resume::resume_form,
    ),
    components(schemas(
        ApplicationPayload, ApplicationResponse,
        AuthResponse, LoginPayload, RegisterPayload, UserResponse,
        CompanyCard, CompanyDetailResponse, CompanyListResponse, CompanyPayload,
        CompanyResponse, MyCompanyResponse,
        Choice, FieldKind, FormDescriptor, FormField,
        HomeResponse, LandingResponse, SearchResponse, SpecialtyCard, SpecialtyResponse,
        MyResumeResponse, ResumeDetailResponse, ResumeListResponse, ResumePayload,
        ResumeResponse, Grade, ResumeStatus,
        CategoryVacanciesResponse, CompanyRef, MyVacanciesResponse, MyVacancyResponse,
        OwnedVacancy, SpecialtyRef, VacancyCard, VacancyDetailResponse, VacancyListResponse,
        VacancyPayload, VacancyResponse,
    )),
    modifiers(&BearerAuth)
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_owner_routes_and_bearer_scheme() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/mycompany/vacancies/{id}"));
        assert!(doc.paths.paths.contains_key("/search"));
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key("bearer"));
    }
}

pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    application_service::ApplicationService, company_service::CompanyService,
    resume_service::ResumeService, search_service::SearchService,
    specialty_service::SpecialtyService, upload_service::UploadService,
    user_service::UserService, vacancy_service::VacancyService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub user_service: UserService,
    pub specialty_service: SpecialtyService,
    pub company_service: CompanyService,
    pub vacancy_service: VacancyService,
    pub application_service: ApplicationService,
    pub resume_service: ResumeService,
    pub search_service: SearchService,
    pub upload_service: UploadService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let config = crate::config::get_config();

        let user_service = UserService::new(pool.clone());
        let specialty_service = SpecialtyService::new(pool.clone());
        let company_service = CompanyService::new(pool.clone());
        let vacancy_service = VacancyService::new(pool.clone());
        let application_service = ApplicationService::new(pool.clone());
        let resume_service = ResumeService::new(pool.clone());
        let search_service = SearchService::new(pool.clone());
        let upload_service =
            UploadService::new(config.uploads_dir.clone(), config.max_upload_bytes);

        Self {
            pool,
            user_service,
            specialty_service,
            company_service,
            vacancy_service,
            application_service,
            resume_service,
            search_service,
            upload_service,
        }
    }
}

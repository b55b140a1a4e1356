pub mod auth;
pub mod company;
pub mod docs;
pub mod health;
pub mod home;
pub mod my_company;
pub mod my_resume;
pub mod resume;
pub mod vacancy;

use axum::{
    extract::DefaultBodyLimit,
    http::StatusCode,
    middleware::{from_fn, from_fn_with_state},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    config::get_config,
    middleware::{
        auth::require_bearer_auth,
        cors::cors_layer,
        ownership::{require_company, require_resume},
        rate_limit::{rps_middleware, RateLimiter},
    },
    services::upload_service::MEDIA_PREFIX,
    AppState,
};

const FORM_OVERHEAD_BYTES: usize = 1024 * 1024;

async fn not_found() -> impl IntoResponse {
    (StatusCode::BAD_REQUEST, "Resource not found")
}

/// Builds the whole application: public pages, authenticated pages, and the
/// owner area behind the access gate.
pub fn app(state: AppState) -> Router {
    let config = get_config();

    let public: Router<AppState> = Router::new()
        .route("/", get(home::home))
        .route("/search", get(home::search))
        .route("/vacancies/", get(vacancy::list_vacancies))
        .route("/vacancies/cat/:code", get(vacancy::list_by_specialty))
        .route("/vacancies/:id", get(vacancy::get_vacancy))
        .route("/companies/", get(company::list_companies))
        .route("/companies/:id", get(company::get_company))
        .route("/login", get(auth::login_form).post(auth::login))
        .route("/register", get(auth::register_form).post(auth::register))
        .route("/logout", get(auth::logout))
        .layer(from_fn_with_state(
            RateLimiter::per_second(config.public_rps),
            rps_middleware,
        ));

    let authenticated: Router<AppState> = Router::new()
        .route("/vacancies/:id", post(vacancy::apply))
        .route("/resumes/", get(resume::list_resumes))
        .route("/resumes/:id", get(resume::get_resume))
        .route("/mycompany/", post(my_company::save_company))
        .route("/mycompany/letsstart", get(my_company::company_landing))
        .route(
            "/mycompany/create",
            get(my_company::company_form).post(my_company::save_company),
        )
        .route("/myresume/", post(my_resume::save_resume))
        .route("/myresume/letsstart", get(my_resume::resume_landing))
        .route(
            "/myresume/create",
            get(my_resume::resume_form).post(my_resume::save_resume),
        )
        .route_layer(from_fn(require_bearer_auth));

    let company_area: Router<AppState> = Router::new()
        .route("/vacancies/", post(vacancy::create_vacancy))
        .route(
            "/mycompany/",
            get(my_company::show_company).delete(my_company::delete_company),
        )
        .route("/mycompany/vacancies", get(my_company::list_my_vacancies))
        .route(
            "/mycompany/vacancies/create",
            get(my_company::vacancy_form).post(my_company::create_my_vacancy),
        )
        .route(
            "/mycompany/vacancies/:id",
            get(my_company::show_my_vacancy).post(my_company::update_my_vacancy),
        )
        .route_layer(from_fn_with_state(state.clone(), require_company))
        .route_layer(from_fn(require_bearer_auth));

    let resume_area: Router<AppState> = Router::new()
        .route("/myresume/", get(my_resume::show_resume))
        .route_layer(from_fn_with_state(state.clone(), require_resume))
        .route_layer(from_fn(require_bearer_auth));

    Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .merge(public)
        .merge(authenticated)
        .merge(company_area)
        .merge(resume_area)
        .nest_service(MEDIA_PREFIX, ServeDir::new(&config.uploads_dir))
        .fallback(not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(
            config.max_upload_bytes + FORM_OVERHEAD_BYTES,
        ))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

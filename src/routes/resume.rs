use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};

use crate::{
    dto::resume_dto::{ResumeDetailResponse, ResumeListResponse},
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/resumes/",
    responses(
        (status = 200, description = "Résumés of people open to offers", body = ResumeListResponse),
        (status = 401, description = "Not logged in")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn list_resumes(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.resume_service.list_open().await?;
    Ok(Json(ResumeListResponse::from(items)))
}

#[utoipa::path(
    get,
    path = "/resumes/{id}",
    params(
        ("id" = i64, Path, description = "Résumé ID")
    ),
    responses(
        (status = 200, description = "Résumé with its specialty", body = ResumeDetailResponse),
        (status = 401, description = "Not logged in"),
        (status = 404, description = "Résumé not found")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn get_resume(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let resume = state.resume_service.get(id).await?;
    let specialty = state.specialty_service.get(resume.specialty_id).await?;

    Ok(Json(ResumeDetailResponse {
        resume: resume.into(),
        specialty: specialty.into(),
    }))
}

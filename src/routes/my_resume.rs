use axum::{
    extract::{Multipart, State},
    response::{IntoResponse, Json, Redirect},
    Extension,
};

use crate::{
    dto::{
        form_dto::FormDescriptor,
        home_dto::LandingResponse,
        resume_dto::{MyResumeResponse, ResumePayload},
    },
    error::Result,
    middleware::{auth::Claims, ownership::CREATE_RESUME_PATH},
    models::resume::Resume,
    services::upload_service::ImageDir,
    utils::multipart::read_form,
    AppState,
};

const MY_RESUME_PATH: &str = "/myresume/";

#[utoipa::path(
    get,
    path = "/myresume/",
    responses(
        (status = 200, description = "The caller's résumé and its edit form", body = MyResumeResponse),
        (status = 303, description = "Caller has no résumé yet")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn show_resume(
    State(state): State<AppState>,
    Extension(resume): Extension<Resume>,
) -> Result<impl IntoResponse> {
    let specialties = state.specialty_service.list().await?;
    Ok(Json(MyResumeResponse {
        resume: resume.into(),
        form: FormDescriptor::resume(MY_RESUME_PATH, &specialties),
    }))
}

/// Multipart upsert of the caller's résumé with an optional `photo` file.
#[utoipa::path(
    post,
    path = "/myresume/",
    responses(
        (status = 303, description = "Saved, redirects to /myresume/"),
        (status = 400, description = "Invalid form or image")
    ),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn save_resume(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let (fields, photo) = read_form(multipart, "photo", state.upload_service.max_bytes()).await?;
    let payload = ResumePayload::from_form(&fields)?;
    let previous = state
        .resume_service
        .find_by_user(claims.sub)
        .await?
        .and_then(|resume| resume.photo);

    let photo = match photo {
        Some(file) => Some(
            state
                .upload_service
                .save_image(ImageDir::UserImages, &file)
                .await?,
        ),
        None => None,
    };
    let saved = state
        .resume_service
        .upsert_for_user(claims.sub, &payload, photo.clone())
        .await;
    state
        .upload_service
        .settle(saved, photo.as_deref(), previous.as_deref())
        .await?;
    Ok(Redirect::to(MY_RESUME_PATH))
}

#[utoipa::path(
    get,
    path = "/myresume/letsstart",
    responses((status = 200, description = "Invitation to write a résumé", body = LandingResponse)),
    security(("bearer" = []))
)]
pub async fn resume_landing() -> Json<LandingResponse> {
    Json(LandingResponse {
        message: "You don't have a résumé yet. Write one so employers can find you.".into(),
        create_url: CREATE_RESUME_PATH.into(),
    })
}

#[utoipa::path(
    get,
    path = "/myresume/create",
    responses((status = 200, description = "Empty résumé form", body = FormDescriptor)),
    security(("bearer" = []))
)]
#[axum::debug_handler]
pub async fn resume_form(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let specialties = state.specialty_service.list().await?;
    Ok(Json(FormDescriptor::resume(CREATE_RESUME_PATH, &specialties)))
}

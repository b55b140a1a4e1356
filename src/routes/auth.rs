use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Redirect},
};
use validator::Validate;

use crate::{
    config::get_config,
    dto::{
        auth_dto::{AuthResponse, LoginPayload, RegisterPayload},
        form_dto::FormDescriptor,
    },
    error::Result,
    models::user::User,
    utils::token::issue_token,
    AppState,
};

fn token_for(user: User) -> Result<AuthResponse> {
    let config = get_config();
    let token = issue_token(user.id, &user.username, &config.jwt_secret, config.jwt_ttl_hours)?;
    Ok(AuthResponse::bearer(token, user))
}

#[utoipa::path(
    get,
    path = "/login",
    responses((status = 200, description = "Login form", body = FormDescriptor))
)]
pub async fn login_form() -> Json<FormDescriptor> {
    Json(FormDescriptor::login())
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginPayload,
    responses(
        (status = 200, description = "Logged in", body = AuthResponse),
        (status = 401, description = "Invalid username or password")
    )
)]
#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state
        .user_service
        .authenticate(&payload.username, &payload.password)
        .await?;
    tracing::info!(user_id = user.id, "user logged in");
    Ok(Json(token_for(user)?))
}

#[utoipa::path(
    get,
    path = "/register",
    responses((status = 200, description = "Registration form", body = FormDescriptor))
)]
pub async fn register_form() -> Json<FormDescriptor> {
    Json(FormDescriptor::register())
}

#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterPayload,
    responses(
        (status = 201, description = "Account created and logged in", body = AuthResponse),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "Username is already taken")
    )
)]
#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state.user_service.register(&payload).await?;
    Ok((StatusCode::CREATED, Json(token_for(user)?)))
}

/// Tokens are not tracked server side; the client forgets its token.
#[utoipa::path(
    get,
    path = "/logout",
    responses((status = 303, description = "Back to the home page"))
)]
pub async fn logout() -> Redirect {
    Redirect::to("/")
}

//! Access gate for the owner area.
//!
//! Runs behind [`require_bearer_auth`](super::auth::require_bearer_auth). A user
//! without an owned record is sent to the page that creates one instead of
//! reaching the handler; a user with one gets it attached to the request so the
//! handler can take `Extension<Company>` / `Extension<Resume>`.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::error::Error;
use crate::middleware::auth::Claims;
use crate::AppState;

pub const CREATE_COMPANY_PATH: &str = "/mycompany/create";
pub const CREATE_RESUME_PATH: &str = "/myresume/create";

fn claims_of(req: &Request) -> Result<Claims, Error> {
    req.extensions()
        .get::<Claims>()
        .cloned()
        .ok_or_else(|| Error::Unauthorized("missing_authorization".into()))
}

pub async fn require_company(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let claims = match claims_of(&req) {
        Ok(claims) => claims,
        Err(err) => return err.into_response(),
    };

    match state.company_service.find_by_owner(claims.sub).await {
        Ok(Some(company)) => {
            req.extensions_mut().insert(company);
            next.run(req).await
        }
        Ok(None) => {
            tracing::debug!(user_id = claims.sub, path = %req.uri().path(), "no company yet");
            Redirect::to(CREATE_COMPANY_PATH).into_response()
        }
        Err(err) => err.into_response(),
    }
}

pub async fn require_resume(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let claims = match claims_of(&req) {
        Ok(claims) => claims,
        Err(err) => return err.into_response(),
    };

    match state.resume_service.find_by_user(claims.sub).await {
        Ok(Some(resume)) => {
            req.extensions_mut().insert(resume);
            next.run(req).await
        }
        Ok(None) => {
            tracing::debug!(user_id = claims.sub, path = %req.uri().path(), "no resume yet");
            Redirect::to(CREATE_RESUME_PATH).into_response()
        }
        Err(err) => err.into_response(),
    }
}

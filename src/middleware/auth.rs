use axum::{extract::Request, middleware::Next, response::IntoResponse, response::Response};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::utils::token::decode_token;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub username: String,
    pub iat: usize,
    pub exp: usize,
}

fn bearer_token(req: &Request) -> Result<&str, Error> {
    let header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .ok_or_else(|| Error::Unauthorized("missing_authorization".into()))?;
    let value = header
        .to_str()
        .map_err(|_| Error::Unauthorized("bad_authorization".into()))?;
    value
        .strip_prefix("Bearer ")
        .ok_or_else(|| Error::Unauthorized("unsupported_scheme".into()))
}

/// Rejects the request with 401 unless it carries a valid bearer token.
/// On success the decoded [`Claims`] are placed in the request extensions.
pub async fn require_bearer_auth(mut req: Request, next: Next) -> Response {
    let secret = &crate::config::get_config().jwt_secret;
    let claims = match bearer_token(&req).and_then(|token| decode_token(token, secret)) {
        Ok(claims) => claims,
        Err(err) => return err.into_response(),
    };
    req.extensions_mut().insert(claims);
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn request_with(header: Option<&str>) -> Request {
        let mut builder = Request::builder().uri("/mycompany/");
        if let Some(value) = header {
            builder = builder.header("authorization", value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn missing_header_is_unauthorized() {
        let req = request_with(None);
        assert!(matches!(bearer_token(&req), Err(Error::Unauthorized(m)) if m == "missing_authorization"));
    }

    #[test]
    fn basic_scheme_is_rejected() {
        let req = request_with(Some("Basic dXNlcjpwYXNz"));
        assert!(matches!(bearer_token(&req), Err(Error::Unauthorized(m)) if m == "unsupported_scheme"));
    }

    #[test]
    fn bearer_token_is_extracted() {
        let req = request_with(Some("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&req).unwrap(), "abc.def.ghi");
    }
}

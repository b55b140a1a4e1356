use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::error::{Error, Result};
use crate::middleware::auth::Claims;

pub fn issue_token(user_id: i64, username: &str, secret: &str, ttl_hours: i64) -> Result<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::hours(ttl_hours.max(1))).timestamp() as usize,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| Error::Internal(format!("failed to sign token: {}", e)))
}

pub fn decode_token(token: &str, secret: &str) -> Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| Error::Unauthorized("Invalid or expired token".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_decodes_to_same_user() {
        let token = issue_token(42, "employer_1", "secret-a", 1).unwrap();
        let claims = decode_token(&token, "secret-a").unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.username, "employer_1");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = issue_token(1, "someone", "secret-a", 1).unwrap();
        assert!(matches!(
            decode_token(&token, "secret-b"),
            Err(Error::Unauthorized(_))
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let past = (Utc::now() - Duration::hours(2)).timestamp() as usize;
        let claims = Claims {
            sub: 1,
            username: "someone".into(),
            iat: past,
            exp: past,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"secret-a"),
        )
        .unwrap();
        assert!(decode_token(&token, "secret-a").is_err());
    }
}

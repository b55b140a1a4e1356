use crate::dto::auth_dto::RegisterPayload;
use crate::error::{Error, Result};
use crate::models::user::User;
use crate::utils::password::{hash_password, verify_against_dummy, verify_password};
use sqlx::PgPool;

const USER_COLUMNS: &str = "id, username, first_name, last_name, email, password_hash, created_at";
const INVALID_CREDENTIALS: &str = "Invalid username or password";

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn register(&self, payload: &RegisterPayload) -> Result<User> {
        let password_hash = hash_password(&payload.password)?;
        let query = format!(
            r#"
            INSERT INTO users (username, first_name, last_name, email, password_hash)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {}
            "#,
            USER_COLUMNS
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&payload.username)
            .bind(&payload.first_name)
            .bind(&payload.last_name)
            .bind(&payload.email)
            .bind(password_hash)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match Error::from(e) {
                Error::Conflict(_) => Error::Conflict("Username is already taken".into()),
                other => other,
            })?;

        tracing::info!(user_id = user.id, username = %user.username, "user registered");
        Ok(user)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let query = format!("SELECT {} FROM users WHERE username = $1", USER_COLUMNS);
        let user = sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Unknown usernames and wrong passwords fail with the same error.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User> {
        match self.find_by_username(username).await? {
            Some(user) if verify_password(password, &user.password_hash) => return Ok(user),
            Some(_) => {}
            None => {
                verify_against_dummy(password);
            }
        }
        tracing::debug!(username, "rejected login");
        Err(Error::Unauthorized(INVALID_CREDENTIALS.into()))
    }
}

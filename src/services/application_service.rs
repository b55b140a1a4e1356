use crate::dto::application_dto::ApplicationPayload;
use crate::error::{Error, Result};
use crate::models::application::Application;
use sqlx::PgPool;

const APPLICATION_COLUMNS: &str =
    "id, written_username, written_phone, written_cover_letter, vacancy_id, user_id, created_at";

#[derive(Clone)]
pub struct ApplicationService {
    pool: PgPool,
}

impl ApplicationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Records one application by `user_id`. Fails with `NotFound` when the
    /// vacancy does not exist.
    pub async fn submit(
        &self,
        user_id: i64,
        vacancy_id: i64,
        payload: &ApplicationPayload,
    ) -> Result<Application> {
        let query = format!(
            r#"
            INSERT INTO applications (written_username, written_phone, written_cover_letter, vacancy_id, user_id)
            SELECT $1, $2, $3, v.id, $5
            FROM vacancies v
            WHERE v.id = $4
            RETURNING {}
            "#,
            APPLICATION_COLUMNS
        );
        let application = sqlx::query_as::<_, Application>(&query)
            .bind(&payload.written_username)
            .bind(payload.written_phone.clone().unwrap_or_default())
            .bind(&payload.written_cover_letter)
            .bind(vacancy_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Vacancy not found".into()))?;

        tracing::info!(
            application_id = application.id,
            vacancy_id,
            user_id,
            "application submitted"
        );
        Ok(application)
    }

    pub async fn list_for_vacancy(&self, vacancy_id: i64) -> Result<Vec<Application>> {
        let query = format!(
            "SELECT {} FROM applications WHERE vacancy_id = $1 ORDER BY created_at DESC, id DESC",
            APPLICATION_COLUMNS
        );
        let items = sqlx::query_as::<_, Application>(&query)
            .bind(vacancy_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }
}

use crate::dto::resume_dto::ResumePayload;
use crate::error::Result;
use crate::models::resume::Resume;
use sqlx::{FromRow, PgPool};

const RESUME_COLUMNS: &str = "id, user_id, name, surname, status, salary, specialty_id, grade, \
     photo, education, experience, description, portfolio, phone";

#[derive(Debug, FromRow)]
pub struct UpsertedResume {
    #[sqlx(flatten)]
    pub resume: Resume,
    pub inserted: bool,
}

#[derive(Clone)]
pub struct ResumeService {
    pool: PgPool,
}

impl ResumeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_user(&self, user_id: i64) -> Result<Option<Resume>> {
        let query = format!("SELECT {} FROM resumes WHERE user_id = $1", RESUME_COLUMNS);
        let resume = sqlx::query_as::<_, Resume>(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(resume)
    }

    pub async fn get(&self, id: i64) -> Result<Resume> {
        let query = format!("SELECT {} FROM resumes WHERE id = $1", RESUME_COLUMNS);
        let resume = sqlx::query_as::<_, Resume>(&query)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(resume)
    }

    /// Résumés of people who are at least considering offers, newest first.
    pub async fn list_open(&self) -> Result<Vec<Resume>> {
        let query = format!(
            "SELECT {} FROM resumes WHERE status <> 'not_looking' ORDER BY id DESC",
            RESUME_COLUMNS
        );
        let items = sqlx::query_as::<_, Resume>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    /// Creates or replaces the résumé of `user_id`; the photo follows the same
    /// keep-unless-replaced rule as company logos.
    pub async fn upsert_for_user(
        &self,
        user_id: i64,
        payload: &ResumePayload,
        photo: Option<String>,
    ) -> Result<UpsertedResume> {
        let query = format!(
            r#"
            INSERT INTO resumes (
                user_id, name, surname, status, salary, specialty_id, grade,
                photo, education, experience, description, portfolio, phone
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (user_id) DO UPDATE SET
                name = EXCLUDED.name,
                surname = EXCLUDED.surname,
                status = EXCLUDED.status,
                salary = EXCLUDED.salary,
                specialty_id = EXCLUDED.specialty_id,
                grade = EXCLUDED.grade,
                photo = COALESCE(EXCLUDED.photo, resumes.photo),
                education = EXCLUDED.education,
                experience = EXCLUDED.experience,
                description = EXCLUDED.description,
                portfolio = EXCLUDED.portfolio,
                phone = EXCLUDED.phone
            RETURNING {}, (xmax = 0) AS inserted
            "#,
            RESUME_COLUMNS
        );
        let upserted = sqlx::query_as::<_, UpsertedResume>(&query)
            .bind(user_id)
            .bind(&payload.name)
            .bind(&payload.surname)
            .bind(payload.status)
            .bind(payload.salary)
            .bind(payload.specialty_id)
            .bind(payload.grade)
            .bind(photo)
            .bind(&payload.education)
            .bind(&payload.experience)
            .bind(&payload.description)
            .bind(&payload.portfolio)
            .bind(payload.phone.clone().unwrap_or_default())
            .fetch_one(&self.pool)
            .await?;

        tracing::info!(
            resume_id = upserted.resume.id,
            user_id,
            inserted = upserted.inserted,
            "resume saved"
        );
        Ok(upserted)
    }
}

use crate::dto::vacancy_dto::VacancyPayload;
use crate::error::{Error, Result};
use crate::models::vacancy::{Vacancy, VacancyListing, VacancyWithApplications};
use sqlx::PgPool;

pub(crate) const LISTING_SELECT: &str = r#"
    SELECT
        v.id, v.title, v.skills, v.description, v.salary_min, v.salary_max, v.published_at,
        c.id AS company_id, c.name AS company_name, c.location AS company_location,
        c.logo AS company_logo,
        s.id AS specialty_id, s.code AS specialty_code, s.title AS specialty_title
    FROM vacancies v
    JOIN companies c ON c.id = v.company_id
    JOIN specialties s ON s.id = v.specialty_id
"#;

pub(crate) const NEWEST_FIRST: &str = "ORDER BY v.published_at DESC, v.id DESC";

const VACANCY_COLUMNS: &str =
    "id, title, specialty_id, company_id, skills, description, salary_min, salary_max, published_at";

#[derive(Clone)]
pub struct VacancyService {
    pool: PgPool,
}

impl VacancyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<VacancyListing>> {
        let query = format!("{} {}", LISTING_SELECT, NEWEST_FIRST);
        let items = sqlx::query_as::<_, VacancyListing>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    pub async fn list_by_specialty(&self, specialty_id: i64) -> Result<Vec<VacancyListing>> {
        let query = format!("{} WHERE v.specialty_id = $1 {}", LISTING_SELECT, NEWEST_FIRST);
        let items = sqlx::query_as::<_, VacancyListing>(&query)
            .bind(specialty_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    pub async fn list_by_company(&self, company_id: i64) -> Result<Vec<VacancyListing>> {
        let query = format!("{} WHERE v.company_id = $1 {}", LISTING_SELECT, NEWEST_FIRST);
        let items = sqlx::query_as::<_, VacancyListing>(&query)
            .bind(company_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(items)
    }

    pub async fn get_listing(&self, id: i64) -> Result<VacancyListing> {
        let query = format!("{} WHERE v.id = $1", LISTING_SELECT);
        let item = sqlx::query_as::<_, VacancyListing>(&query)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(item)
    }

    /// Fetches a vacancy only if it belongs to `company_id`.
    pub async fn get_owned(&self, id: i64, company_id: i64) -> Result<Vacancy> {
        let query = format!(
            "SELECT {} FROM vacancies WHERE id = $1 AND company_id = $2",
            VACANCY_COLUMNS
        );
        sqlx::query_as::<_, Vacancy>(&query)
            .bind(id)
            .bind(company_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Vacancy not found".into()))
    }

    pub async fn list_owned_with_counts(
        &self,
        company_id: i64,
    ) -> Result<Vec<VacancyWithApplications>> {
        let items = sqlx::query_as::<_, VacancyWithApplications>(
            r#"
            SELECT v.id, v.title, v.specialty_id, v.company_id, v.skills, v.description,
                   v.salary_min, v.salary_max, v.published_at,
                   COUNT(a.id) AS application_count
            FROM vacancies v
            LEFT JOIN applications a ON a.vacancy_id = v.id
            WHERE v.company_id = $1
            GROUP BY v.id
            ORDER BY v.published_at DESC, v.id DESC
            "#,
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    pub async fn create(&self, company_id: i64, payload: &VacancyPayload) -> Result<Vacancy> {
        let query = format!(
            r#"
            INSERT INTO vacancies (title, specialty_id, company_id, skills, description, salary_min, salary_max)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            VACANCY_COLUMNS
        );
        let vacancy = sqlx::query_as::<_, Vacancy>(&query)
            .bind(&payload.title)
            .bind(payload.specialty_id)
            .bind(company_id)
            .bind(&payload.skills)
            .bind(&payload.description)
            .bind(payload.salary_min)
            .bind(payload.salary_max)
            .fetch_one(&self.pool)
            .await?;

        tracing::info!(vacancy_id = vacancy.id, company_id, "vacancy created");
        Ok(vacancy)
    }

    /// `published_at` is left as it was at creation.
    pub async fn update(
        &self,
        id: i64,
        company_id: i64,
        payload: &VacancyPayload,
    ) -> Result<Vacancy> {
        let query = format!(
            r#"
            UPDATE vacancies
            SET title = $3,
                specialty_id = $4,
                skills = $5,
                description = $6,
                salary_min = $7,
                salary_max = $8
            WHERE id = $1 AND company_id = $2
            RETURNING {}
            "#,
            VACANCY_COLUMNS
        );
        let vacancy = sqlx::query_as::<_, Vacancy>(&query)
            .bind(id)
            .bind(company_id)
            .bind(&payload.title)
            .bind(payload.specialty_id)
            .bind(&payload.skills)
            .bind(&payload.description)
            .bind(payload.salary_min)
            .bind(payload.salary_max)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Vacancy not found".into()))?;

        tracing::info!(vacancy_id = vacancy.id, company_id, "vacancy updated");
        Ok(vacancy)
    }

    /// Inserts when `id` is `None`, otherwise updates that vacancy of the company.
    pub async fn upsert(
        &self,
        company_id: i64,
        id: Option<i64>,
        payload: &VacancyPayload,
    ) -> Result<Vacancy> {
        match id {
            Some(id) => self.update(id, company_id, payload).await,
            None => self.create(company_id, payload).await,
        }
    }
}

use crate::dto::company_dto::CompanyPayload;
use crate::error::Result;
use crate::models::company::{Company, CompanyWithCount};
use sqlx::{FromRow, PgPool};

const COMPANY_COLUMNS: &str = "id, name, location, logo, description, employee_count, owner_id";

#[derive(Debug, FromRow)]
pub struct UpsertedCompany {
    #[sqlx(flatten)]
    pub company: Company,
    pub inserted: bool,
}

#[derive(Clone)]
pub struct CompanyService {
    pool: PgPool,
}

impl CompanyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_owner(&self, owner_id: i64) -> Result<Option<Company>> {
        let query = format!("SELECT {} FROM companies WHERE owner_id = $1", COMPANY_COLUMNS);
        let company = sqlx::query_as::<_, Company>(&query)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(company)
    }

    pub async fn get(&self, id: i64) -> Result<Company> {
        let query = format!("SELECT {} FROM companies WHERE id = $1", COMPANY_COLUMNS);
        let company = sqlx::query_as::<_, Company>(&query)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(company)
    }

    /// Companies with their vacancy counts, oldest first; `limit = None` returns all.
    pub async fn list_with_counts(&self, limit: Option<i64>) -> Result<Vec<CompanyWithCount>> {
        let items = sqlx::query_as::<_, CompanyWithCount>(
            r#"
            SELECT c.id, c.name, c.location, c.logo, c.description, c.employee_count, c.owner_id,
                   COUNT(v.id) AS vacancy_count
            FROM companies c
            LEFT JOIN vacancies v ON v.company_id = c.id
            GROUP BY c.id
            ORDER BY c.id
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    /// Creates or updates the single company owned by `owner_id`.
    ///
    /// A new `logo` replaces the stored one; without one the stored logo is
    /// kept, and a brand new company gets none.
    pub async fn upsert_for_owner(
        &self,
        owner_id: i64,
        payload: &CompanyPayload,
        logo: Option<String>,
    ) -> Result<UpsertedCompany> {
        let query = format!(
            r#"
            INSERT INTO companies (name, location, logo, description, employee_count, owner_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (owner_id) DO UPDATE SET
                name = EXCLUDED.name,
                location = EXCLUDED.location,
                logo = COALESCE(EXCLUDED.logo, companies.logo),
                description = EXCLUDED.description,
                employee_count = EXCLUDED.employee_count
            RETURNING {}, (xmax = 0) AS inserted
            "#,
            COMPANY_COLUMNS
        );
        let upserted = sqlx::query_as::<_, UpsertedCompany>(&query)
            .bind(&payload.name)
            .bind(&payload.location)
            .bind(logo)
            .bind(&payload.description)
            .bind(payload.employee_count)
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await?;

        tracing::info!(
            company_id = upserted.company.id,
            owner_id,
            inserted = upserted.inserted,
            "company saved"
        );
        Ok(upserted)
    }

    /// Deletes the owner's company; its vacancies and their applications cascade.
    pub async fn delete_for_owner(&self, owner_id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM companies WHERE owner_id = $1")
            .bind(owner_id)
            .execute(&self.pool)
            .await?;
        tracing::info!(owner_id, removed = result.rows_affected(), "company deleted");
        Ok(result.rows_affected())
    }
}

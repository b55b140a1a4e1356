use crate::error::{Error, Result};
use crate::models::specialty::{Specialty, SpecialtyWithCount};
use sqlx::PgPool;

#[derive(Clone)]
pub struct SpecialtyService {
    pool: PgPool,
}

impl SpecialtyService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Specialty>> {
        let items = sqlx::query_as::<_, Specialty>(
            "SELECT id, code, title, picture FROM specialties ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    pub async fn list_with_counts(&self) -> Result<Vec<SpecialtyWithCount>> {
        let items = sqlx::query_as::<_, SpecialtyWithCount>(
            r#"
            SELECT s.id, s.code, s.title, s.picture, COUNT(v.id) AS vacancy_count
            FROM specialties s
            LEFT JOIN vacancies v ON v.specialty_id = s.id
            GROUP BY s.id
            ORDER BY s.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    pub async fn get(&self, id: i64) -> Result<Specialty> {
        let specialty = sqlx::query_as::<_, Specialty>(
            "SELECT id, code, title, picture FROM specialties WHERE id = $1",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(specialty)
    }

    pub async fn get_by_code(&self, code: &str) -> Result<Specialty> {
        if code.contains('\0') {
            return Err(Error::NotFound("Specialty not found".into()));
        }
        sqlx::query_as::<_, Specialty>(
            "SELECT id, code, title, picture FROM specialties WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Specialty '{}' not found", code)))
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vacancy {
    pub id: i64,
    pub title: String,
    pub specialty_id: i64,
    pub company_id: i64,
    pub skills: String,
    pub description: String,
    pub salary_min: i32,
    pub salary_max: i32,
    pub published_at: DateTime<Utc>,
}

/// A vacancy joined with the company and specialty it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VacancyListing {
    pub id: i64,
    pub title: String,
    pub skills: String,
    pub description: String,
    pub salary_min: i32,
    pub salary_max: i32,
    pub published_at: DateTime<Utc>,
    pub company_id: i64,
    pub company_name: String,
    pub company_location: String,
    pub company_logo: Option<String>,
    pub specialty_id: i64,
    pub specialty_code: String,
    pub specialty_title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VacancyWithApplications {
    pub id: i64,
    pub title: String,
    pub specialty_id: i64,
    pub company_id: i64,
    pub skills: String,
    pub description: String,
    pub salary_min: i32,
    pub salary_max: i32,
    pub published_at: DateTime<Utc>,
    pub application_count: i64,
}

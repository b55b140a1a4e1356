use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Specialty {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub picture: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SpecialtyWithCount {
    pub id: i64,
    pub code: String,
    pub title: String,
    pub picture: Option<String>,
    pub vacancy_count: i64,
}

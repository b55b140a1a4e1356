use crate::error::Result;
use crate::models::vacancy::VacancyListing;
use crate::services::vacancy_service::{LISTING_SELECT, NEWEST_FIRST};
use sqlx::PgPool;

const MAX_EXAMPLES: usize = 4;

pub struct SearchResult {
    pub query: String,
    pub vacancies: Vec<VacancyListing>,
    pub examples: Vec<String>,
}

#[derive(Clone)]
pub struct SearchService {
    pool: PgPool,
}

impl SearchService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Vacancies whose title or skills contain `query`, ignoring case.
    /// A missing or blank query matches every vacancy. NUL characters are dropped.
    pub async fn search(&self, query: Option<&str>) -> Result<SearchResult> {
        let query = query
            .map(|q| q.replace('\0', ""))
            .unwrap_or_default()
            .trim()
            .to_string();

        let vacancies = if query.is_empty() {
            let sql = format!("{} {}", LISTING_SELECT, NEWEST_FIRST);
            sqlx::query_as::<_, VacancyListing>(&sql)
                .fetch_all(&self.pool)
                .await?
        } else {
            let sql = format!(
                r"{} WHERE v.skills ILIKE $1 ESCAPE '\' OR v.title ILIKE $1 ESCAPE '\' {}",
                LISTING_SELECT, NEWEST_FIRST
            );
            sqlx::query_as::<_, VacancyListing>(&sql)
                .bind(contains_pattern(&query))
                .fetch_all(&self.pool)
                .await?
        };

        let examples = self.examples().await?;
        tracing::debug!(query = %query, hits = vacancies.len(), "vacancy search");

        Ok(SearchResult {
            query,
            vacancies,
            examples,
        })
    }

    /// Keywords suggested under the search box, taken from the newest vacancy.
    pub async fn examples(&self) -> Result<Vec<String>> {
        let skills: Option<String> = sqlx::query_scalar(
            "SELECT skills FROM vacancies ORDER BY published_at DESC, id DESC LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(skills.map(|s| example_keywords(&s)).unwrap_or_default())
    }
}

/// `ILIKE` pattern matching `query` anywhere, with wildcards in the query taken literally.
pub fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for ch in query.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

pub fn example_keywords(skills: &str) -> Vec<String> {
    skills
        .split(", ")
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(MAX_EXAMPLES)
        .map(str::to_string)
        .collect()
}

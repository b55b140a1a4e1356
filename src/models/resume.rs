use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, utoipa::ToSchema)]
#[sqlx(type_name = "resume_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ResumeStatus {
    NotLooking,
    Considering,
    Looking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, utoipa::ToSchema)]
#[sqlx(type_name = "resume_grade", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Intern,
    Junior,
    Middle,
    Senior,
    Lead,
}

impl ResumeStatus {
    pub const ALL: [ResumeStatus; 3] = [
        ResumeStatus::NotLooking,
        ResumeStatus::Considering,
        ResumeStatus::Looking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResumeStatus::NotLooking => "not_looking",
            ResumeStatus::Considering => "considering",
            ResumeStatus::Looking => "looking",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResumeStatus::NotLooking => "Not looking for a job",
            ResumeStatus::Considering => "Considering offers",
            ResumeStatus::Looking => "Looking for a job",
        }
    }
}

impl Grade {
    pub const ALL: [Grade; 5] = [
        Grade::Intern,
        Grade::Junior,
        Grade::Middle,
        Grade::Senior,
        Grade::Lead,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Intern => "intern",
            Grade::Junior => "junior",
            Grade::Middle => "middle",
            Grade::Senior => "senior",
            Grade::Lead => "lead",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Grade::Intern => "Intern",
            Grade::Junior => "Junior",
            Grade::Middle => "Middle",
            Grade::Senior => "Senior",
            Grade::Lead => "Lead",
        }
    }
}

impl std::str::FromStr for ResumeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("'{}' is not a valid resume status", s))
    }
}

impl std::str::FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|grade| grade.as_str() == s)
            .ok_or_else(|| format!("'{}' is not a valid grade", s))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Resume {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub surname: String,
    pub status: ResumeStatus,
    pub salary: i32,
    pub specialty_id: i64,
    pub grade: Grade,
    pub photo: Option<String>,
    pub education: String,
    pub experience: Option<String>,
    pub description: Option<String>,
    pub portfolio: String,
    pub phone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_its_code() {
        for status in ResumeStatus::ALL {
            assert_eq!(status.as_str().parse::<ResumeStatus>().unwrap(), status);
        }
        assert!("searching".parse::<ResumeStatus>().is_err());
    }

    #[test]
    fn grade_codes_match_serde_names() {
        for grade in Grade::ALL {
            let json = serde_json::to_value(grade).unwrap();
            assert_eq!(json, grade.as_str());
        }
        assert!("architect".parse::<Grade>().is_err());
    }
}

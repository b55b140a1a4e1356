use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::resume::{Grade, ResumeStatus};
use crate::models::specialty::Specialty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Textarea,
    Number,
    Email,
    Password,
    Select,
    File,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub choices: Vec<Choice>,
}

impl FormField {
    fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required: true,
            max_length: None,
            min: None,
            max: None,
            choices: Vec::new(),
        }
    }

    fn max_length(mut self, max: u64) -> Self {
        self.max_length = Some(max);
        self
    }

    fn range(mut self, min: i64, max: Option<i64>) -> Self {
        self.min = Some(min);
        self.max = max;
        self
    }

    fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    fn choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = choices;
        self
    }
}

/// What a client needs to render and submit one of the service's forms.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FormDescriptor {
    pub form: String,
    pub method: String,
    pub action: String,
    pub encoding: String,
    pub fields: Vec<FormField>,
}

const JSON: &str = "application/json";
const MULTIPART: &str = "multipart/form-data";

fn specialty_choices(specialties: &[Specialty]) -> Vec<Choice> {
    specialties
        .iter()
        .map(|s| Choice {
            value: s.id.to_string(),
            label: s.title.clone(),
        })
        .collect()
}

impl FormDescriptor {
    fn post(form: &str, action: &str, encoding: &str, fields: Vec<FormField>) -> Self {
        Self {
            form: form.to_string(),
            method: "POST".to_string(),
            action: action.to_string(),
            encoding: encoding.to_string(),
            fields,
        }
    }

    pub fn login() -> Self {
        Self::post(
            "login",
            "/login",
            JSON,
            vec![
                FormField::new("username", "Username", FieldKind::Text).max_length(20),
                FormField::new("password", "Password", FieldKind::Password),
            ],
        )
    }

    pub fn register() -> Self {
        Self::post(
            "register",
            "/register",
            JSON,
            vec![
                FormField::new("username", "Username", FieldKind::Text).max_length(16),
                FormField::new("first_name", "First name", FieldKind::Text).max_length(20),
                FormField::new("last_name", "Last name", FieldKind::Text).max_length(20),
                FormField::new("email", "Email", FieldKind::Email),
                FormField::new("password", "Password", FieldKind::Password),
                FormField::new("repeat_password", "Repeat password", FieldKind::Password),
            ],
        )
    }

    pub fn application(vacancy_id: i64) -> Self {
        Self::post(
            "application",
            &format!("/vacancies/{}", vacancy_id),
            JSON,
            vec![
                FormField::new("written_username", "Name", FieldKind::Text).max_length(50),
                FormField::new("written_phone", "Phone", FieldKind::Text)
                    .max_length(17)
                    .optional(),
                FormField::new("written_cover_letter", "Cover letter", FieldKind::Textarea),
            ],
        )
    }

    pub fn company(action: &str) -> Self {
        Self::post(
            "company",
            action,
            MULTIPART,
            vec![
                FormField::new("name", "Company name", FieldKind::Text).max_length(50),
                FormField::new("location", "City", FieldKind::Text).max_length(50),
                FormField::new("logo", "Logo", FieldKind::File).optional(),
                FormField::new("description", "About the company", FieldKind::Textarea),
                FormField::new("employee_count", "Employees", FieldKind::Number)
                    .range(0, Some(32767)),
            ],
        )
    }

    pub fn vacancy(action: &str, specialties: &[Specialty]) -> Self {
        Self::post(
            "vacancy",
            action,
            JSON,
            vec![
                FormField::new("title", "Title", FieldKind::Text).max_length(50),
                FormField::new("specialty_id", "Specialty", FieldKind::Select)
                    .choices(specialty_choices(specialties)),
                FormField::new("skills", "Skills", FieldKind::Textarea).max_length(255),
                FormField::new("description", "Description", FieldKind::Textarea),
                FormField::new("salary_min", "Salary from", FieldKind::Number).range(0, None),
                FormField::new("salary_max", "Salary to", FieldKind::Number).range(0, None),
            ],
        )
    }

    pub fn resume(action: &str, specialties: &[Specialty]) -> Self {
        let statuses = ResumeStatus::ALL
            .iter()
            .map(|s| Choice {
                value: s.as_str().to_string(),
                label: s.label().to_string(),
            })
            .collect();
        let grades = Grade::ALL
            .iter()
            .map(|g| Choice {
                value: g.as_str().to_string(),
                label: g.label().to_string(),
            })
            .collect();

        Self::post(
            "resume",
            action,
            MULTIPART,
            vec![
                FormField::new("name", "Name", FieldKind::Text).max_length(50),
                FormField::new("surname", "Surname", FieldKind::Text).max_length(50),
                FormField::new("photo", "Photo", FieldKind::File).optional(),
                FormField::new("status", "Status", FieldKind::Select).choices(statuses),
                FormField::new("salary", "Expected salary", FieldKind::Number).range(0, None),
                FormField::new("specialty_id", "Specialty", FieldKind::Select)
                    .choices(specialty_choices(specialties)),
                FormField::new("grade", "Grade", FieldKind::Select).choices(grades),
                FormField::new("education", "Education", FieldKind::Textarea).max_length(100),
                FormField::new("experience", "Experience", FieldKind::Textarea).optional(),
                FormField::new("description", "About me", FieldKind::Textarea).optional(),
                FormField::new("portfolio", "Portfolio", FieldKind::Text).max_length(100),
                FormField::new("phone", "Phone", FieldKind::Text)
                    .max_length(17)
                    .optional(),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field<'a>(form: &'a FormDescriptor, name: &str) -> &'a FormField {
        form.fields.iter().find(|f| f.name == name).unwrap()
    }

    #[test]
    fn company_form_posts_multipart_with_optional_logo() {
        let form = FormDescriptor::company("/mycompany/create");
        assert_eq!(form.encoding, MULTIPART);
        assert_eq!(form.action, "/mycompany/create");
        assert!(!field(&form, "logo").required);
        assert_eq!(field(&form, "employee_count").max, Some(32767));
    }

    #[test]
    fn resume_form_lists_every_status_and_grade() {
        let specialties = vec![Specialty {
            id: 2,
            code: "backend".into(),
            title: "Backend".into(),
            picture: None,
        }];
        let form = FormDescriptor::resume("/myresume/create", &specialties);
        assert_eq!(field(&form, "status").choices.len(), 3);
        assert_eq!(field(&form, "grade").choices.len(), 5);
        assert_eq!(field(&form, "specialty_id").choices[0].value, "2");
    }

    #[test]
    fn application_form_targets_the_vacancy() {
        let form = FormDescriptor::application(17);
        assert_eq!(form.action, "/vacancies/17");
        assert!(!field(&form, "written_phone").required);
    }
}

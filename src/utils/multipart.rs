use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use axum::extract::Multipart;
use bytes::Bytes;
use validator::{ValidationError, ValidationErrors};

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: String,
    pub data: Bytes,
}

/// Text fields of a submitted form, looked up by name.
#[derive(Debug, Clone, Default)]
pub struct FormFields {
    values: HashMap<String, String>,
}

impl FormFields {
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn text(&self, name: &str) -> String {
        self.values
            .get(name)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }

    pub fn optional_text(&self, name: &str) -> Option<String> {
        let value = self.text(name);
        (!value.is_empty()).then_some(value)
    }

    /// Parses a required field, recording a field error instead of failing fast
    /// so every bad field is reported at once.
    pub fn parse<T>(&self, name: &'static str, errors: &mut ValidationErrors) -> Option<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let raw = self.text(name);
        if raw.is_empty() {
            let mut err = ValidationError::new("required");
            err.message = Some(Cow::Borrowed("This field is required"));
            errors.add(name, err);
            return None;
        }
        match raw.parse::<T>() {
            Ok(value) => Some(value),
            Err(e) => {
                let mut err = ValidationError::new("invalid");
                err.message = Some(Cow::Owned(e.to_string()));
                errors.add(name, err);
                None
            }
        }
    }
}

/// Combines field parse errors with the payload's own validation result.
/// A parse error wins over a rule failure on the same field.
pub fn merge_form_errors(
    mut parse_errors: ValidationErrors,
    validated: std::result::Result<(), ValidationErrors>,
) -> Result<()> {
    if let Err(rule_errors) = validated {
        for (field, kind) in rule_errors.into_errors() {
            parse_errors.errors_mut().entry(field).or_insert(kind);
        }
    }
    if parse_errors.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(parse_errors))
    }
}

pub async fn read_form(
    mut multipart: Multipart,
    file_field: &str,
    max_file_bytes: usize,
) -> Result<(FormFields, Option<UploadedFile>)> {
    let mut values = HashMap::new();
    let mut file = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        if name == file_field {
            let file_name = field.file_name().unwrap_or("upload.bin").to_string();
            let data = field.bytes().await?;
            if data.is_empty() {
                continue;
            }
            if data.len() > max_file_bytes {
                return Err(Error::BadRequest(format!(
                    "File is larger than {} bytes",
                    max_file_bytes
                )));
            }
            file = Some(UploadedFile { file_name, data });
        } else if !name.is_empty() {
            let text = field.text().await?;
            values.insert(name, text);
        }
    }

    Ok((FormFields { values }, file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_trimmed_and_missing_is_empty() {
        let fields = FormFields::from_pairs([("name", "  Acme  ")]);
        assert_eq!(fields.text("name"), "Acme");
        assert_eq!(fields.text("location"), "");
        assert_eq!(fields.optional_text("location"), None);
    }

    #[test]
    fn parse_error_wins_over_rule_error_on_the_same_field() {
        let mut parse_errors = ValidationErrors::new();
        parse_errors.add("salary", ValidationError::new("invalid"));
        let mut rule_errors = ValidationErrors::new();
        rule_errors.add("salary", ValidationError::new("range"));
        rule_errors.add("name", ValidationError::new("length"));

        match merge_form_errors(parse_errors, Err(rule_errors)) {
            Err(Error::Validation(errors)) => {
                let fields = errors.field_errors();
                assert_eq!(fields["salary"][0].code, "invalid");
                assert_eq!(fields["name"][0].code, "length");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(merge_form_errors(ValidationErrors::new(), Ok(())).is_ok());
    }

    #[test]
    fn parse_collects_errors_for_every_bad_field() {
        let fields = FormFields::from_pairs([("employee_count", "lots"), ("salary", "100")]);
        let mut errors = ValidationErrors::new();
        let count: Option<i32> = fields.parse("employee_count", &mut errors);
        let salary: Option<i32> = fields.parse("salary", &mut errors);
        let missing: Option<i32> = fields.parse("specialty_id", &mut errors);
        assert_eq!(count, None);
        assert_eq!(salary, Some(100));
        assert_eq!(missing, None);
        let failed = errors.field_errors();
        assert!(failed.contains_key("employee_count"));
        assert!(failed.contains_key("specialty_id"));
        assert!(!failed.contains_key("salary"));
    }
}

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;
use validator::ValidationError;

fn phone_regex() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(r"^\+?1?\d{9,15}$").expect("phone regex"))
}

fn username_regex() -> &'static Regex {
    static USERNAME: OnceLock<Regex> = OnceLock::new();
    USERNAME.get_or_init(|| Regex::new(r"^[a-z0-9_-]{6,16}$").expect("username regex"))
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

/// Blank is allowed; anything else must look like `+999999999`.
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || phone_regex().is_match(value) {
        Ok(())
    } else {
        Err(error(
            "phone",
            "Phone number must be entered in the format: '+999999999'",
        ))
    }
}

pub fn validate_username(value: &str) -> Result<(), ValidationError> {
    if username_regex().is_match(value) {
        Ok(())
    } else {
        Err(error(
            "username",
            "Username must be 6 to 16 characters of a-z, 0-9, '_' or '-'",
        ))
    }
}

/// Postgres text columns cannot hold NUL, so it is refused as a field error.
pub fn validate_text(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        Err(error("nul_byte", "This field may not contain NUL characters"))
    } else {
        Ok(())
    }
}

pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("blank", "This field may not be blank"));
    }
    validate_text(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_accepts_blank_and_international_digits() {
        assert!(validate_phone("").is_ok());
        assert!(validate_phone("+79991234567").is_ok());
        assert!(validate_phone("999999999").is_ok());
    }

    #[test]
    fn phone_rejects_letters_and_short_numbers() {
        assert!(validate_phone("12345").is_err());
        assert!(validate_phone("+7 999 123").is_err());
        assert!(validate_phone("call me").is_err());
    }

    #[test]
    fn username_is_anchored_at_both_ends() {
        assert!(validate_username("hunter_42").is_ok());
        assert!(validate_username("short").is_err());
        assert!(validate_username("valid_prefix!!").is_err());
        assert!(validate_username("UpperCase1").is_err());
    }

    #[test]
    fn nul_bytes_are_rejected() {
        assert_eq!(validate_text("bad\0text").unwrap_err().code, "nul_byte");
        assert_eq!(validate_not_blank("bad\0text").unwrap_err().code, "nul_byte");
        assert!(validate_text("plain text").is_ok());
    }

    #[test]
    fn whitespace_only_counts_as_blank() {
        assert!(validate_not_blank("   ").is_err());
        assert!(validate_not_blank(" x ").is_ok());
    }
}

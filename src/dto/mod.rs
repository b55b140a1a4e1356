pub mod application_dto;
pub mod auth_dto;
pub mod company_dto;
pub mod form_dto;
pub mod home_dto;
pub mod resume_dto;
pub mod vacancy_dto;

/// Shown wherever a company logo, résumé photo or specialty picture was never uploaded.
pub const PLACEHOLDER_IMAGE: &str = "https://place-hold.it/100x60";

pub fn image_url(path: Option<&str>) -> String {
    path.filter(|p| !p.is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_image_uses_placeholder() {
        assert_eq!(image_url(None), PLACEHOLDER_IMAGE);
        assert_eq!(image_url(Some("")), PLACEHOLDER_IMAGE);
        assert_eq!(
            image_url(Some("/media/company_images/a.png")),
            "/media/company_images/a.png"
        );
    }
}

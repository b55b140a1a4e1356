pub mod multipart;
pub mod password;
pub mod token;
pub mod validation;

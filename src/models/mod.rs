pub mod application;
pub mod company;
pub mod resume;
pub mod specialty;
pub mod user;
pub mod vacancy;

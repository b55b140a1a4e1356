pub mod auth;
pub mod cors;
pub mod ownership;
pub mod rate_limit;

use axum::http::header;
use tower_http::cors::{Any, CorsLayer};

/// Any origin may call the API; `Location` is exposed so browser clients can
/// follow the gate and post-save redirects themselves.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .allow_origin(Any)
        .expose_headers([header::LOCATION])
}

use actix_cors::Cors;
use actix_web::http::header;

const FALLBACK_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// CORS for browser clients.
///
/// `allowed_origins` comes from `CORS_ALLOWED_ORIGINS`; entries that are not
/// `http(s)://` origins are ignored and an empty list falls back to
/// localhost. Credentials are allowed so the session cookie travels with
/// cross-origin requests.
pub fn cors_middleware(allowed_origins: &[String]) -> Cors {
    let mut origins: Vec<&str> = allowed_origins
        .iter()
        .map(|s| s.trim())
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .collect();
    if origins.is_empty() {
        origins = FALLBACK_ORIGINS.to_vec();
    }

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::HeaderName::from_static("x-request-id"),
        ])
        .supports_credentials()
        .max_age(3600);

    for origin in origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}

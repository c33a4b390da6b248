use axum::http::{HeaderName, HeaderValue, Method};
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Create a CORS layer from a comma-separated list of allowed origins.
///
/// Methods, headers, and credentials are configured for a JSON API:
/// - Methods: GET, POST, PUT, DELETE, PATCH, OPTIONS
/// - Headers: Content-Type, Authorization, Accept, x-csrf-token
/// - Credentials: allowed
/// - Max age: 1 hour
///
/// # Errors
/// Returns an error if the list is empty or contains an invalid origin.
pub fn create_cors_layer(origins_str: &str) -> io::Result<CorsLayer> {
    let allowed_origins: Vec<HeaderValue> = origins_str
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS origin value: {}", e),
            )
        })?;

    if allowed_origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS origin list cannot be empty",
        ));
    }

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
            HeaderName::from_static("x-csrf-token"),
        ])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600)))
}

/// Create a permissive CORS layer for local development.
///
/// Allows any origin, method, and header. Never use this in production.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cors_layer_single_origin() {
        let layer = create_cors_layer("http://localhost:3000");
        assert!(layer.is_ok());
    }

    #[test]
    fn test_create_cors_layer_multiple_origins() {
        let layer = create_cors_layer("http://localhost:3000, https://example.com");
        assert!(layer.is_ok());
    }

    #[test]
    fn test_create_cors_layer_empty() {
        let layer = create_cors_layer("");
        assert!(layer.is_err());
    }

    #[test]
    fn test_create_cors_layer_invalid_origin() {
        let layer = create_cors_layer("not a header value\u{0000}");
        assert!(layer.is_err());
    }
}

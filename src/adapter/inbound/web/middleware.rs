//! Middleware constructors for the Actix application.

use actix_web::middleware;

/// Request logger. Records go through the `log` facade, which the tracing
/// subscriber picks up.
pub fn request_logger() -> middleware::Logger {
    middleware::Logger::new(r#"%a "%r" %s %b %Dms"#)
}

/// Headers added to every response.
pub fn default_headers() -> middleware::DefaultHeaders {
    middleware::DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-Frame-Options", "DENY"))
}

use actix_cors::Cors;

/// The dashboard frontend is served from its own origin and sends the bearer
/// token on every call.
pub fn create_cors() -> Cors {
    Cors::default()
        // echo the caller's origin
        .allowed_origin_fn(|_, _req_head| true)
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_any_header()
        .supports_credentials()
        .max_age(3600)
}

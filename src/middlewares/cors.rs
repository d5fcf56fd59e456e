use actix_cors::Cors;

/// Every origin may call the API; there are no credentials to protect.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

pub mod config;
pub mod db;
pub mod errors;
pub mod middlewares;
pub mod models;
pub mod routes;
pub mod utils;

use actix_web::web::ServiceConfig;
use config::app_config::DEFAULT_MAX_BODY_BYTES;

/// Registers every route with the default JSON body limit.
pub fn configure(cnf: &mut ServiceConfig) {
    configure_with_limit(DEFAULT_MAX_BODY_BYTES)(cnf)
}

/// Registers every route, accepting JSON bodies up to `max_body_bytes`.
pub fn configure_with_limit(max_body_bytes: usize) -> impl Fn(&mut ServiceConfig) + Clone {
    move |cnf: &mut ServiceConfig| {
        cnf.app_data(routes::general_routes::json_config(max_body_bytes))
            .configure(routes::general_routes::init)
            .configure(routes::survey_routes::init);
    }
}

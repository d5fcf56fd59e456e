use actix_web::{
    error::JsonPayloadError,
    web::{JsonConfig, ServiceConfig},
    HttpRequest, HttpResponse, Responder,
};

use crate::errors::AppError;

#[actix_web::get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json("Welcome to survey app backend")
}

// Unreadable bodies are not validation failures; they surface as 500 with
// the parser's message.
fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    AppError::Unexpected(err.to_string()).into()
}

pub fn json_config(max_body_bytes: usize) -> JsonConfig {
    JsonConfig::default()
        .limit(max_body_bytes)
        .error_handler(json_error)
}

pub fn init(cnf: &mut ServiceConfig) {
    cnf.service(home);
}

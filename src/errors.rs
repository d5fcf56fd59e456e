use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::error;
use std::fmt;

use crate::utils::json_responder::ErrorBody;

#[derive(Debug)]
pub enum AppError {
    /// A required request field was absent.
    Validation(String),
    Db(sqlx::Error),
    NotFound(String),
    Unexpected(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "{msg}"),
            AppError::Db(e) => write!(f, "Database error: {e}"),
            AppError::NotFound(msg) => write!(f, "{msg}"),
            AppError::Unexpected(msg) => write!(f, "{msg}"),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Db(_) | AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Db(_) | AppError::Unexpected(_) = self {
            error!("{self}");
        }
        HttpResponse::build(self.status_code()).json(ErrorBody::new(self.to_string()))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Db(e)
    }
}
